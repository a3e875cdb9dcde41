//! # irrigo-adapter-http-reqwest
//!
//! Native implementation of the `ControllerApi` port.
//!
//! ## Responsibilities
//! - Issue the controller's `GET` reads and `POST` commands with `reqwest`
//! - Map transport failures, non-2xx statuses, and malformed bodies onto
//!   `ApiError`
//!
//! ## Dependency rule
//! Depends on `irrigo-app` (port traits) and `irrigo-domain` (wire types).

pub mod config;
pub mod error;

mod client;

pub use client::HttpController;
pub use config::ControllerConfig;
pub use error::HttpAdapterError;
