//! Defines the properties for the `DishFormComponent`.

use yew::prelude::*;

/// Path of the backend endpoint serving the form's runtime configuration.
pub const CONFIG_PATH: &str = "/api/config";

/// Properties for the `DishFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct DishFormProps {
    /// Where the component loads its `FormConfig` from on first render.
    ///
    /// If the request fails or the body does not parse, the component keeps
    /// `FormConfig::default()`, which targets the public dish API.
    #[prop_or(AttrValue::Static(CONFIG_PATH))]
    pub config_url: AttrValue,
}
