//! Context providers for shared application state and services.

pub mod api;
pub mod config;
pub mod theme;

pub use config::use_config;
pub use theme::{ThemeProvider, use_theme};
