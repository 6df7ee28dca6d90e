//! Dish creator form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `DishFormProps`, `DishFormComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, load the runtime `FormConfig` from the backend, keeping the
//!   defaults when it cannot be fetched.

use common::config::FormConfig;
use gloo_console::warn;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DishFormProps;
pub use state::DishFormComponent;

impl Component for DishFormComponent {
    type Message = Msg;
    type Properties = DishFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DishFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let config_url = ctx.props().config_url.to_string();
            spawn_local(async move {
                match Request::get(&config_url).send().await {
                    Ok(resp) if resp.ok() => match resp.json::<FormConfig>().await {
                        Ok(config) => link.send_message(Msg::SetConfig(config)),
                        Err(err) => warn!(format!("Invalid form config, using defaults: {}", err)),
                    },
                    Ok(resp) => warn!(format!(
                        "Form config unavailable (HTTP {}), using defaults",
                        resp.status()
                    )),
                    Err(err) => warn!(format!("Form config unavailable, using defaults: {}", err)),
                }
            });
        }
    }
}
