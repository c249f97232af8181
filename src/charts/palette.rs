//! Chart colour palettes
//!
//! Every descriptor in the catalog takes its colours from a [`Palette`], so
//! switching the site theme never touches chart data.

use serde::{Deserialize, Serialize};

/// An opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#3b82f6`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba()` notation with the given opacity
    pub fn alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Names of the built-in palettes, as used in config files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteName {
    /// Light page background
    #[default]
    Standard,
    /// Dark page background
    Slate,
}

impl PaletteName {
    pub fn palette(&self) -> Palette {
        match self {
            PaletteName::Standard => Palette::standard(),
            PaletteName::Slate => Palette::slate(),
        }
    }
}

impl std::fmt::Display for PaletteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaletteName::Standard => write!(f, "standard"),
            PaletteName::Slate => write!(f, "slate"),
        }
    }
}

/// Colour roles used by the chart catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: PaletteName,
    /// Sector average line, below-average bars
    pub baseline: Color,
    /// Top decile line
    pub leader: Color,
    /// "Your performance" series, bubbles, top performers
    pub primary: Color,
    /// Claims cost series
    pub cost: Color,
    /// ROI, own radar series, own bar
    pub success: Color,
    /// Peer comparison series
    pub peer: Color,
    /// Above-average bars
    pub accent: Color,
    /// Page background; used for point and bar borders
    pub surface: Color,
    /// Contrast colour for tooltips and grid lines
    pub ink: Color,
    /// Percentile distribution ramp, lowest to highest
    pub heat: [Color; 6],
}

impl Palette {
    pub fn standard() -> Self {
        Self {
            name: PaletteName::Standard,
            baseline: Color::rgb(0xe5, 0xe7, 0xeb),
            leader: Color::rgb(0x10, 0xb9, 0x81),
            primary: Color::rgb(0x3b, 0x82, 0xf6),
            cost: Color::rgb(0x93, 0x33, 0xea),
            success: Color::rgb(0x22, 0xc5, 0x5e),
            peer: Color::rgb(0x9c, 0xa3, 0xaf),
            accent: Color::rgb(0x8b, 0x5c, 0xf6),
            surface: Color::rgb(0xff, 0xff, 0xff),
            ink: Color::rgb(0x00, 0x00, 0x00),
            heat: [
                Color::rgb(0xfe, 0xe2, 0xe2),
                Color::rgb(0xfe, 0xca, 0xca),
                Color::rgb(0xfc, 0xa5, 0xa5),
                Color::rgb(0xf8, 0x71, 0x71),
                Color::rgb(0xef, 0x44, 0x44),
                Color::rgb(0xdc, 0x26, 0x26),
            ],
        }
    }

    pub fn slate() -> Self {
        Self {
            name: PaletteName::Slate,
            baseline: Color::rgb(0x47, 0x55, 0x69),
            leader: Color::rgb(0x34, 0xd3, 0x99),
            primary: Color::rgb(0x60, 0xa5, 0xfa),
            cost: Color::rgb(0xc0, 0x84, 0xfc),
            success: Color::rgb(0x4a, 0xde, 0x80),
            peer: Color::rgb(0x94, 0xa3, 0xb8),
            accent: Color::rgb(0xa7, 0x8b, 0xfa),
            surface: Color::rgb(0x0f, 0x17, 0x2a),
            ink: Color::rgb(0xff, 0xff, 0xff),
            heat: [
                Color::rgb(0x45, 0x0a, 0x0a),
                Color::rgb(0x7f, 0x1d, 0x1d),
                Color::rgb(0x99, 0x1b, 0x1b),
                Color::rgb(0xb9, 0x1c, 0x1c),
                Color::rgb(0xdc, 0x26, 0x26),
                Color::rgb(0xef, 0x44, 0x44),
            ],
        }
    }

    /// Strongest step of the heat ramp
    pub fn heat_peak(&self) -> Color {
        self.heat[self.heat.len() - 1]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
