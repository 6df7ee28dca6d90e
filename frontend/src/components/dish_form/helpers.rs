//! Utility functions for the dish form component.
//!
//! - **Submission**: one POST of the dish payload, raced against a timeout and
//!   folded into a `SubmitOutcome`.
//! - **Toast lifetime**: scheduling the dismissal of a notification.
//! - **Event plumbing**: reading values out of input and select events.

use common::model::dish::{Category, DishPayload};
use common::notification::NotificationKey;
use common::submission::SubmitOutcome;
use futures_util::future::{select, Either};
use gloo_console::log;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::DishFormComponent;

/// Sends `payload` as JSON to `endpoint` exactly once.
///
/// The response body is never read: any 2xx is a success, everything else,
/// including transport errors and hitting `timeout_ms`, is a failure. Nothing
/// is retried.
pub async fn post_dish(endpoint: &str, payload: &DishPayload, timeout_ms: u32) -> SubmitOutcome {
    if let Ok(body) = serde_json::to_string(payload) {
        log!(format!("POST {} {}", endpoint, body));
    }

    let request = match Request::post(endpoint).json(payload) {
        Ok(request) => request,
        Err(err) => return SubmitOutcome::Transport(err.to_string()),
    };

    let send = Box::pin(request.send());
    let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

    match select(send, timeout).await {
        Either::Left((Ok(response), _)) => SubmitOutcome::from_status(response.status()),
        Either::Left((Err(err), _)) => SubmitOutcome::Transport(err.to_string()),
        Either::Right(_) => SubmitOutcome::TimedOut,
    }
}

/// Expires the toast appearance `(key, generation)` after `duration_ms`.
pub fn schedule_dismiss(
    link: &Scope<DishFormComponent>,
    key: NotificationKey,
    generation: u64,
    duration_ms: u32,
) {
    let link = link.clone();
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        link.send_message(Msg::ExpireToast(key, generation));
    });
}

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn clicked_value(e: &MouseEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn selected_category(e: &Event) -> Option<Category> {
    Category::parse(&e.target_unchecked_into::<HtmlSelectElement>().value())
}

/// How the spiciness slider presents a draft value.
///
/// A range input always draws its thumb somewhere, so a blank draft is shown
/// faded with a hint rather than as the browser's midpoint.
#[derive(Debug, PartialEq, Eq)]
pub struct SliderDisplay {
    pub label: String,
    pub unset: bool,
    pub opacity: &'static str,
}

pub fn spiciness_display(raw: &str) -> SliderDisplay {
    if raw.is_empty() {
        SliderDisplay {
            label: "not set".to_string(),
            unset: true,
            opacity: "0.4",
        }
    } else {
        SliderDisplay {
            label: raw.to_string(),
            unset: false,
            opacity: "1",
        }
    }
}
