//! UI Components
//!
//! Page sections of the SIERA site.

pub mod demos;
pub mod hero;
pub mod modules;
pub mod nav;
pub mod stakeholders;

pub use demos::Demos;
pub use hero::Hero;
pub use modules::{ModuleModal, Modules};
pub use nav::Nav;
pub use stakeholders::Stakeholders;
