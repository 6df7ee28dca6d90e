//! # Form Config Service Module
//!
//! Exposes the runtime settings of the dish form to the browser. The frontend
//! fetches them once on first render and falls back to its built-in defaults
//! when the request fails.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for the form configuration endpoint.
const API_PATH: &str = "/api";

/// Configures and returns the Actix `Scope` for the form configuration.
///
/// # Registered Routes:
///
/// *   **`GET /config`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the `FormConfig` shared as application data,
///       serialized as JSON: dish endpoint, request timeout, toast duration and
///       the two submit options.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/config", get().to(get::process))
}
