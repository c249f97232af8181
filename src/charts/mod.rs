//! Charts
//!
//! Descriptors, palettes, the chart catalog, the charting-library boundary
//! and the registry of live chart instances.

pub mod backend;
pub mod catalog;
pub mod descriptor;
pub mod palette;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{ChartBackend, ChartInstance, HeadlessBackend, ImageDownloader, ImageExport};
pub use catalog::{ChartCatalog, VisualizationKind};
pub use descriptor::{
    Callbacks, ChartData, ChartType, ColorSpec, Dataset, SeriesData, TooltipLabel, TooltipTitle,
    VisualizationDescriptor,
};
pub use palette::{Color, Palette, PaletteName};
pub use registry::VisualizationRegistry;
