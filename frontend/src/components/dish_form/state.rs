//! Component state for the dish form.
//!
//! The form logic itself lives in `common::form::DishForm`; this struct only
//! adds what the browser side needs on top of it: the runtime configuration,
//! the visible toasts, and the one-time initialization guard.

use common::config::FormConfig;
use common::form::DishForm;
use common::notification::Toaster;

/// Main state container for the `DishFormComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct DishFormComponent {
    /// Draft, touched flags, errors and in-flight tracking.
    pub form: DishForm,

    /// Endpoint, timeout and submit behaviour. Starts at the defaults and is
    /// replaced once `/api/config` answers.
    pub config: FormConfig,

    /// Notifications currently on screen, de-duplicated by identity key.
    pub toaster: Toaster,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl DishFormComponent {
    pub fn new() -> Self {
        let config = FormConfig::default();
        Self {
            form: DishForm::new(config.form_options()),
            config,
            toaster: Toaster::new(),
            loaded: false,
        }
    }
}
