//! Page components for different routes in the application.

pub mod countries;
pub mod country;

pub use countries::*;
pub use country::*;
