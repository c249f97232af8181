//! State Management
//!
//! The page controller and the signals views subscribe to.

pub mod site;

pub use site::{provide_site_state, SiteState};
