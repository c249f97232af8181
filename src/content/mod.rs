//! Static site content
//!
//! Demo panels, product modules and stakeholder audiences. Everything here
//! is compiled in; the string ids only exist for the untyped boundary
//! (markup attributes, URL fragments) and parse into closed enums.

pub mod demos;
pub mod modules;
pub mod stakeholders;

pub use demos::{DemoDescriptor, DemoKind, MetricTile, KEY_INSIGHTS, RECOMMENDATIONS};
pub use modules::{ModuleDetail, ModuleKind};
pub use stakeholders::{Stakeholder, StakeholderInfo};

/// Accent colour names shared with the stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Indigo,
    Gray,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Blue => "blue",
            ColorTag::Green => "green",
            ColorTag::Purple => "purple",
            ColorTag::Orange => "orange",
            ColorTag::Red => "red",
            ColorTag::Indigo => "indigo",
            ColorTag::Gray => "gray",
        }
    }

    /// Text colour class at the given shade, e.g. `text-blue-600`
    pub fn text(&self, shade: u16) -> String {
        format!("text-{}-{}", self.as_str(), shade)
    }

    /// Background colour class at the given shade, e.g. `bg-blue-50`
    pub fn bg(&self, shade: u16) -> String {
        format!("bg-{}-{}", self.as_str(), shade)
    }

    /// Highlight ring for the active card or button
    pub fn ring(&self) -> String {
        format!("ring-2 ring-{}-500", self.as_str())
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
