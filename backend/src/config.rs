//! Server configuration.
//!
//! Values come from built-in defaults overridden by `DISH_FORM_*` environment
//! variables (a `.env` file is loaded first when present), for example
//! `DISH_FORM_PORT=9000` or `DISH_FORM_DISH_ENDPOINT=http://localhost:3000/dishes/`.

use common::config::FormConfig;
use config::{Config, ConfigError, Environment, Source};
use serde::Deserialize;

const ENV_PREFIX: &str = "DISH_FORM";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the form in the default browser once the server is up.
    pub open_browser: bool,
    pub dish_endpoint: String,
    pub request_timeout_ms: u32,
    pub toast_duration_ms: u32,
    pub reset_after_success: bool,
    pub block_concurrent_submits: bool,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_source(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let form = FormConfig::default();
        Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("open_browser", true)?
            .set_default("dish_endpoint", form.dish_endpoint)?
            .set_default("request_timeout_ms", i64::from(form.request_timeout_ms))?
            .set_default("toast_duration_ms", i64::from(form.toast_duration_ms))?
            .set_default("reset_after_success", form.reset_after_success)?
            .set_default("block_concurrent_submits", form.block_concurrent_submits)?
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// The part of the configuration the browser needs.
    pub fn form_config(&self) -> FormConfig {
        FormConfig {
            dish_endpoint: self.dish_endpoint.clone(),
            request_timeout_ms: self.request_timeout_ms,
            toast_duration_ms: self.toast_duration_ms,
            reset_after_success: self.reset_after_success,
            block_concurrent_submits: self.block_concurrent_submits,
        }
    }
}
