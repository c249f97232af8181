//! SIERA Demo Site
//!
//! Marketing and demo site for the SIERA healthcare analytics platform,
//! built with Leptos (WASM).
//!
//! # Features
//!
//! - Hero benchmark chart
//! - Interactive demo panels with Chart.js visualizations
//! - Module detail modal
//! - Scroll-aware navigation
//! - Sections fade in as they scroll into view
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All page rules live in the `siera` crate; this crate binds
//! them to the DOM and to Chart.js, which the host page loads as a global.

use leptos::*;
use siera::SiteConfig;

mod app;
mod chartjs;
mod components;
mod logging;
mod reveal;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let (config, config_error) = match SiteConfig::from_toml_str(include_str!("../siera.toml")) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };

    logging::init(&config.logging);
    if let Some(e) = config_error {
        tracing::warn!("Embedded config rejected, using defaults: {}", e);
    }

    tracing::info!("SIERA Healthcare Platform v{}", env!("CARGO_PKG_VERSION"));

    mount_to_body(move || view! { <app::App config=config /> });
}
