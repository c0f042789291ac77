//! Reusable UI components for the Atlas frontend.

pub mod country_card;
pub mod header;
pub mod region_filter;
pub mod search_bar;
pub mod status;
pub mod theme_toggle;

pub use country_card::*;
pub use header::*;
pub use region_filter::*;
pub use search_bar::*;
pub use status::*;
pub use theme_toggle::*;
