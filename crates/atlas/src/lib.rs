//! The shared library for Atlas, a Rust single-page country explorer.
//!
//! This crate holds everything the frontend needs that does not touch the DOM directly:
//! the theme state holder, the country data model, the REST client, configuration,
//! error types and logging setup.

pub mod api;
pub mod config;
pub mod data;
pub mod errors;
pub mod log;
pub mod theme;

pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing::{debug, error, info, trace, warn};
