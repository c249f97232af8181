//! # SIERA
//!
//! Core of the SIERA healthcare analytics demo site: the chart catalog, the
//! registry of live charts, the interactive demo selector and the page
//! controller that ties them to browser events.
//!
//! Everything here is plain Rust with no DOM access. The charting library is
//! reached through [`charts::ChartBackend`]; the `siera-ui` crate provides the
//! Chart.js implementation and the Leptos views.
//!
//! ## Modules
//!
//! - [`charts`]: Descriptors, palettes, catalog and the chart registry
//! - [`content`]: Demo, module and stakeholder copy
//! - [`selector`]: Demo selection and chart mount tickets
//! - [`page`]: Per-page controller owning all of the above
//! - [`timing`]: Debounce and throttle state machines
//! - [`nav`]: Scroll spy for the nav bar and section reveal tracking
//!
//! ## Quick Start
//!
//! ```rust
//! use siera::charts::HeadlessBackend;
//! use siera::{SiteConfig, SitePage, VisualizationKind};
//!
//! let mut page = SitePage::new(&SiteConfig::default(), HeadlessBackend::default());
//! page.hero_ready(1280.0);
//!
//! let panel = page.select_demo_kind(siera::DemoKind::PatientContext);
//! page.demo_mount_ready(panel.ticket, 1280.0);
//!
//! assert!(page.registry().contains(&VisualizationKind::PercentileComparison.mount_id()));
//! page.teardown();
//! ```

pub mod charts;
pub mod config;
pub mod content;
pub mod error;
pub mod nav;
pub mod page;
pub mod selector;
pub mod timing;

pub use charts::{
    ChartBackend, ChartCatalog, ChartInstance, ImageDownloader, Palette, PaletteName,
    VisualizationDescriptor, VisualizationKind, VisualizationRegistry,
};
pub use config::{generate_default_config, ConfigError, SiteConfig};
pub use content::{DemoKind, ModuleDetail, ModuleKind, Stakeholder};
pub use error::{ChartFault, VizError, VizResult};
pub use nav::{ScrollSpy, ScrollUpdate, SectionOffset, SectionReveal};
pub use page::SitePage;
pub use selector::{DemoPanel, DemoSelector, MountTicket, Selection};
pub use timing::{Debouncer, Throttler};
