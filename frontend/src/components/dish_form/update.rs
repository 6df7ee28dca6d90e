//! Update function for the dish form component.
//!
//! Elm-style: receives the current `DishFormComponent` state, the `Context`,
//! and a `Msg`, mutates the state accordingly, and returns a `bool` telling
//! Yew whether to re-render.
//!
//! Key behaviors
//! - Field edits and blurs go straight to `DishForm`, which revalidates before
//!   the next render.
//! - `Submit` asks the form for a payload and spawns a single POST. The
//!   request never blocks input handling; its outcome comes back as
//!   `SubmitFinished`.
//! - Outcome notifications go through the `Toaster`, so a toast that is
//!   already visible is not shown twice.

use gloo_console::{error, log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::submission::SubmitOutcome;

use super::helpers::{post_dish, schedule_dismiss};
use super::messages::Msg;
use super::state::DishFormComponent;

/// Central update function for the component.
pub fn update(component: &mut DishFormComponent, ctx: &Context<DishFormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetConfig(config) => {
            component.form.set_options(config.form_options());
            component.config = config;
            true
        }
        Msg::SetField(field, value) => {
            component.form.set_field(field, value);
            true
        }
        Msg::SetCategory(category) => {
            component.form.set_category(category);
            true
        }
        Msg::Blur(field) => component.form.touch(field),
        Msg::Submit => {
            match component.form.begin_submit() {
                Ok(payload) => {
                    let link = ctx.link().clone();
                    let endpoint = component.config.dish_endpoint.clone();
                    let timeout_ms = component.config.request_timeout_ms;
                    spawn_local(async move {
                        let outcome = post_dish(&endpoint, &payload, timeout_ms).await;
                        link.send_message(Msg::SubmitFinished(outcome));
                    });
                }
                Err(err) => warn!(format!("Submit ignored: {}", err)),
            }
            true
        }
        Msg::SubmitFinished(outcome) => {
            report(&outcome);
            let notification = component.form.finish_submit(&outcome);
            if let Some(generation) = component.toaster.push(notification) {
                schedule_dismiss(
                    ctx.link(),
                    notification.key,
                    generation,
                    component.config.toast_duration_ms,
                );
            }
            true
        }
        Msg::DismissToast(key) => component.toaster.dismiss(key),
        Msg::ExpireToast(key, generation) => component.toaster.expire(key, generation),
    }
}

fn report(outcome: &SubmitOutcome) {
    if outcome.is_success() {
        log!(outcome.to_string());
    } else {
        error!(outcome.to_string());
    }
}
