use serde::{Deserialize, Serialize};

use crate::form::FormOptions;

/// Dish API used when nothing else is configured.
pub const DEFAULT_DISH_ENDPOINT: &str =
    "https://umzzcc503l.execute-api.us-west-2.amazonaws.com/dishes/";

/// Runtime settings of the dish form, served by the backend at `/api/config`.
///
/// Missing keys fall back to [`FormConfig::default`], so an older backend can
/// still talk to a newer frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// URL the dish payload is POSTed to.
    pub dish_endpoint: String,
    /// Upper bound for the dish request. Expiry counts as a failed submit.
    pub request_timeout_ms: u32,
    /// How long a toast stays on screen.
    pub toast_duration_ms: u32,
    /// Clear the draft after the dish API accepted it.
    pub reset_after_success: bool,
    /// Refuse a submit while the previous request is still outstanding.
    pub block_concurrent_submits: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            dish_endpoint: DEFAULT_DISH_ENDPOINT.to_string(),
            request_timeout_ms: 10_000,
            toast_duration_ms: 3_000,
            reset_after_success: false,
            block_concurrent_submits: true,
        }
    }
}

impl FormConfig {
    pub fn form_options(&self) -> FormOptions {
        FormOptions {
            reset_after_success: self.reset_after_success,
            block_concurrent_submits: self.block_concurrent_submits,
        }
    }
}
