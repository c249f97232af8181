//! Site State
//!
//! Wraps the `siera` page controller for the component tree. The controller
//! is only borrowed inside these methods and every borrow ends before a
//! signal is written, so effects triggered by the write can call back in.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use siera::content::StakeholderInfo;
use siera::nav::{ScrollUpdate, SectionOffset};
use siera::{
    DemoKind, ModuleDetail, ModuleKind, MountTicket, Selection, SiteConfig, SitePage, Stakeholder,
    VisualizationKind,
};
use wasm_bindgen::JsCast;

use crate::chartjs::{BrowserDownloader, ChartJsBackend};

/// Page state provided to all components
#[derive(Clone)]
pub struct SiteState {
    page: Rc<RefCell<SitePage<ChartJsBackend>>>,
    /// What the demo display area shows
    pub selection: RwSignal<Option<Selection>>,
    /// Demo card carrying the highlight ring
    pub active_demo: RwSignal<Option<DemoKind>>,
    /// Section id highlighted in the nav bar
    pub active_section: RwSignal<Option<String>>,
    /// Open module modal
    pub modal: RwSignal<Option<&'static ModuleDetail>>,
    pub stakeholder: RwSignal<Option<Stakeholder>>,
}

/// Provide site state to the component tree
pub fn provide_site_state(config: &SiteConfig) -> SiteState {
    let state = SiteState {
        page: Rc::new(RefCell::new(SitePage::new(config, ChartJsBackend))),
        selection: create_rw_signal(None),
        active_demo: create_rw_signal(None),
        active_section: create_rw_signal(None),
        modal: create_rw_signal(None),
        stakeholder: create_rw_signal(None),
    };

    provide_context(state.clone());
    state
}

impl SiteState {
    /// Hero canvas is in the document
    pub fn hero_ready(&self) {
        self.page.borrow_mut().hero_ready(viewport_width());
    }

    pub fn select_demo(&self, demo_id: &str) {
        let (selection, active) = {
            let mut page = self.page.borrow_mut();
            let selection = page.select_demo(demo_id);
            (selection, page.active_demo())
        };

        self.selection.set(Some(selection));
        self.active_demo.set(active);
    }

    /// A demo panel's canvas is in the document
    pub fn demo_mount_ready(&self, ticket: MountTicket) {
        self.page
            .borrow_mut()
            .demo_mount_ready(ticket, viewport_width());
    }

    /// Returns the quiet period to wait before polling
    pub fn notify_resize(&self) -> u64 {
        let mut page = self.page.borrow_mut();
        page.notify_resize(now());
        page.resize_wait_ms()
    }

    /// Returns how long to wait before polling again if the burst is
    /// still unsettled
    pub fn poll_resize(&self) -> Option<u64> {
        let mut page = self.page.borrow_mut();
        let now = now();
        if let Some(resized) = page.poll_resize(now) {
            tracing::debug!("Resized {} charts", resized);
        }
        page.resize_remaining(now).map(|ms| ms.max(1))
    }

    /// Returns whether the section should play its reveal animation
    pub fn on_section_visible(&self, section_id: &str, intersecting: bool) -> bool {
        self.page
            .borrow_mut()
            .on_section_visible(section_id, intersecting)
    }

    pub fn on_scroll(&self) {
        let scroll_y = window().scroll_y().unwrap_or_default();
        let update = self
            .page
            .borrow_mut()
            .on_scroll(now(), scroll_y, section_offsets);

        if let ScrollUpdate::Changed(section) = update {
            self.active_section.set(section);
        }
    }

    pub fn open_module(&self, kind: ModuleKind) {
        let detail = self.page.borrow_mut().open_module(kind);
        self.modal.set(Some(detail));
    }

    pub fn close_module(&self) {
        if self.page.borrow_mut().close_module() {
            self.modal.set(None);
        }
    }

    pub fn on_key(&self, key: &str) {
        if self.page.borrow_mut().on_key(key) {
            self.modal.set(self.page.borrow().modal());
        }
    }

    /// Lock or unlock page scrolling to match the modal
    pub fn sync_scroll_lock(&self) {
        let locked = self.page.borrow().scroll_locked();
        if let Some(body) = document().body() {
            let overflow = if locked { "hidden" } else { "auto" };
            if let Err(e) = body.style().set_property("overflow", overflow) {
                tracing::warn!("Failed to set body overflow: {:?}", e);
            }
        }
    }

    pub fn select_stakeholder(&self, stakeholder: Stakeholder) -> &'static StakeholderInfo {
        let info = self.page.borrow_mut().select_stakeholder(stakeholder);
        self.stakeholder.set(Some(stakeholder));
        info
    }

    pub fn export_chart(&self, kind: VisualizationKind) {
        let exported = self
            .page
            .borrow()
            .export_chart(kind, &mut BrowserDownloader);
        if !exported {
            tracing::debug!("Nothing to export for {}", kind);
        }
    }

    /// Destroy every chart
    pub fn teardown(&self) {
        let destroyed = self.page.borrow_mut().teardown();
        tracing::debug!("Destroyed {} charts", destroyed);
    }
}

/// Monotonic milliseconds since page load
fn now() -> u64 {
    window()
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now) as u64
}

fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::INFINITY)
}

/// Document offsets of every `<section id=...>`
fn section_offsets() -> Vec<SectionOffset> {
    let Ok(sections) = document().query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..sections.length())
        .filter_map(|i| sections.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|section| SectionOffset::new(section.id(), section.offset_top() as f64))
        .collect()
}
