//! Section Reveal
//!
//! Fades page sections in the first time they scroll into view. The
//! `siera` page decides when a section is revealed; this module only wires
//! an `IntersectionObserver` to it and adds the class.

use siera::config::NavigationConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::state::SiteState;

type RevealCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct SectionRevealer {
    observer: IntersectionObserver,
    // Must outlive the observer
    _callback: RevealCallback,
}

impl SectionRevealer {
    pub fn new(state: SiteState, settings: &NavigationConfig) -> Result<Self, JsValue> {
        let class = settings.reveal_class.clone();
        let callback = RevealCallback::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let section = entry.target();
                    if !state.on_section_visible(&section.id(), entry.is_intersecting()) {
                        continue;
                    }
                    if let Err(e) = section.class_list().add_1(&class) {
                        tracing::warn!("Failed to reveal section {}: {:?}", section.id(), e);
                    }
                    // Revealed sections stay revealed
                    observer.unobserve(&section);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(settings.reveal_threshold));
        options.set_root_margin(&settings.reveal_root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Start watching every `<section>` currently in the document
    pub fn observe_sections(&self) -> u32 {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return 0;
        };
        let Ok(sections) = document.query_selector_all("section") else {
            return 0;
        };

        let mut observed = 0;
        for section in (0..sections.length())
            .filter_map(|i| sections.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        {
            self.observer.observe(&section);
            observed += 1;
        }
        observed
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}
