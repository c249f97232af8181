//! Site page controller
//!
//! One [`SitePage`] per loaded page. It owns the chart registry and every
//! piece of UI state that has rules attached (demo selection, resize
//! coalescing, scroll spy, section reveal, module modal, stakeholder
//! highlight). Nothing in here is global, so independent pages never share
//! charts.
//!
//! Errors stop at this layer: they are logged and the affected panel is
//! simply left without a chart.

use crate::charts::{
    ChartBackend, ChartCatalog, ImageDownloader, VisualizationKind, VisualizationRegistry,
};
use crate::config::SiteConfig;
use crate::content::{DemoKind, ModuleDetail, ModuleKind, Stakeholder, StakeholderInfo};
use crate::nav::{ScrollSpy, ScrollUpdate, SectionOffset, SectionReveal};
use crate::selector::{DemoPanel, DemoSelector, MountTicket, Selection};
use crate::timing::Debouncer;

pub struct SitePage<B: ChartBackend> {
    registry: VisualizationRegistry<B>,
    selector: DemoSelector,
    catalog: ChartCatalog,
    resize: Debouncer,
    scroll: ScrollSpy,
    reveal: SectionReveal,
    modal: Option<&'static ModuleDetail>,
    stakeholder: Option<Stakeholder>,
    export_filename: String,
}

impl<B: ChartBackend> SitePage<B> {
    pub fn new(config: &SiteConfig, backend: B) -> Self {
        let catalog = ChartCatalog::new(config.charts.palette.palette(), config.charts.animation_ms)
            .with_mobile_breakpoint(config.charts.mobile_breakpoint_px);

        Self {
            registry: VisualizationRegistry::new(backend),
            selector: DemoSelector::new(),
            catalog,
            resize: Debouncer::new(config.timing.resize_debounce_ms),
            scroll: ScrollSpy::new(
                config.timing.scroll_throttle_ms,
                config.navigation.section_offset_px,
            ),
            reveal: SectionReveal::new(),
            modal: None,
            stakeholder: None,
            export_filename: config.charts.export_filename.clone(),
        }
    }

    /// Build the hero benchmark chart once its canvas is in the page
    pub fn hero_ready(&mut self, viewport_width: f64) -> bool {
        let kind = VisualizationKind::Benchmark;
        let id = kind.mount_id();
        let descriptor = self.catalog.descriptor_for(kind, viewport_width);

        match self.registry.upsert(&id, &descriptor, &id) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Benchmark chart not built");
                false
            }
        }
    }

    /// Switch the demo display to `demo_id`
    pub fn select_demo(&mut self, demo_id: &str) -> Selection {
        match demo_id.parse::<DemoKind>() {
            Ok(kind) => Selection::Panel(self.select_demo_kind(kind)),
            Err(_) => {
                self.release_active_chart(None);
                self.selector.select(demo_id)
            }
        }
    }

    pub fn select_demo_kind(&mut self, kind: DemoKind) -> DemoPanel {
        self.release_active_chart(Some(kind));
        tracing::debug!(demo = %kind, "Demo selected");
        self.selector.select_kind(kind)
    }

    /// The previous demo's canvas is replaced along with its panel
    fn release_active_chart(&mut self, next: Option<DemoKind>) {
        if let Some(previous) = self.selector.active() {
            if Some(previous) != next {
                self.registry.release(&previous.visualization().mount_id());
            }
        }
    }

    /// Build the chart for a demo panel whose canvas is now mounted
    pub fn demo_mount_ready(&mut self, ticket: MountTicket, viewport_width: f64) -> bool {
        match self
            .selector
            .mount_ready(ticket, &mut self.registry, &self.catalog, viewport_width)
        {
            Ok(built) => built,
            Err(err) => {
                tracing::warn!(demo = %ticket.kind(), error = %err, "Demo chart not built");
                false
            }
        }
    }

    /// Record a window resize event
    pub fn notify_resize(&mut self, now: u64) {
        self.resize.notify(now);
    }

    /// Resize all charts if the resize burst has settled
    ///
    /// Returns the number of charts resized when the debouncer fired.
    pub fn poll_resize(&mut self, now: u64) -> Option<usize> {
        if self.resize.poll(now) {
            Some(self.registry.resize_all())
        } else {
            None
        }
    }

    pub fn resize_wait_ms(&self) -> u64 {
        self.resize.wait_ms()
    }

    /// Time left before a pending resize burst settles, if one is pending
    pub fn resize_remaining(&self, now: u64) -> Option<u64> {
        self.resize.remaining(now)
    }

    pub fn on_scroll<F>(&mut self, now: u64, scroll_y: f64, sections: F) -> ScrollUpdate
    where
        F: FnOnce() -> Vec<SectionOffset>,
    {
        self.scroll.observe(now, scroll_y, sections)
    }

    pub fn active_section(&self) -> Option<&str> {
        self.scroll.current()
    }

    /// A section's visibility changed; returns whether to play its reveal
    pub fn on_section_visible(&mut self, section_id: &str, intersecting: bool) -> bool {
        let reveal = self.reveal.observe(section_id, intersecting);
        if reveal {
            tracing::debug!(section = %section_id, "Section revealed");
        }
        reveal
    }

    pub fn open_module(&mut self, kind: ModuleKind) -> &'static ModuleDetail {
        let detail = kind.detail();
        self.modal = Some(detail);
        detail
    }

    /// Open the modal for a module code; unknown codes show the fallback
    pub fn open_module_id(&mut self, code: &str) -> &'static ModuleDetail {
        let detail = ModuleDetail::lookup(code);
        if detail.is_placeholder() {
            tracing::debug!(module = %code, "Unknown module");
        }
        self.modal = Some(detail);
        detail
    }

    /// Returns whether a modal was open
    pub fn close_module(&mut self) -> bool {
        self.modal.take().is_some()
    }

    /// Keyboard shortcuts; returns whether the key was handled
    pub fn on_key(&mut self, key: &str) -> bool {
        match key {
            "Escape" => self.close_module(),
            _ => false,
        }
    }

    pub fn modal(&self) -> Option<&'static ModuleDetail> {
        self.modal
    }

    /// Page scrolling is locked while the modal is open
    pub fn scroll_locked(&self) -> bool {
        self.modal.is_some()
    }

    pub fn select_stakeholder(&mut self, stakeholder: Stakeholder) -> &'static StakeholderInfo {
        self.stakeholder = Some(stakeholder);
        let info = stakeholder.info();
        tracing::info!(stakeholder = %stakeholder.id(), focus = %info.focus, "Showing stakeholder content");
        info
    }

    pub fn stakeholder(&self) -> Option<Stakeholder> {
        self.stakeholder
    }

    pub fn active_demo(&self) -> Option<DemoKind> {
        self.selector.active()
    }

    /// Download a chart as an image using the configured file name
    pub fn export_chart(
        &self,
        kind: VisualizationKind,
        downloader: &mut dyn ImageDownloader,
    ) -> bool {
        self.registry
            .export_as_image(&kind.mount_id(), &self.export_filename, downloader)
    }

    /// Destroy every chart; safe to call repeatedly
    pub fn teardown(&mut self) -> usize {
        self.registry.destroy_all()
    }

    pub fn registry(&self) -> &VisualizationRegistry<B> {
        &self.registry
    }

    pub fn catalog(&self) -> &ChartCatalog {
        &self.catalog
    }
}
