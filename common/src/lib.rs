//! Shared, target-independent core of the dish creator.
//!
//! Both the Yew frontend and the actix backend depend on this crate. Nothing in
//! here touches the DOM or the network, so the whole form pipeline can be
//! exercised with plain `cargo test`.

pub mod config;
pub mod form;
pub mod model;
pub mod notification;
pub mod schema;
pub mod submission;
