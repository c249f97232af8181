//! App Root Component
//!
//! Page layout plus the window listeners that drive the page controller.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use siera::SiteConfig;

use crate::components::{Demos, Hero, ModuleModal, Modules, Nav, Stakeholders};
use crate::reveal::SectionRevealer;
use crate::state::{provide_site_state, SiteState};

/// Root application component
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let state = provide_site_state(&config);

    // Window resize: the timer is re-armed on every event and the page
    // decides whether the burst is over when it fires
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
    let resize_state = state.clone();
    let resize = window_event_listener(ev::resize, move |_| {
        let wait = resize_state.notify_resize();
        let poll_state = resize_state.clone();
        let timeout = Timeout::new(wait as u32, move || poll_resize(poll_state));
        // Dropping the previous handle cancels it
        *pending.borrow_mut() = Some(timeout);
    });

    let scroll_state = state.clone();
    let scroll = window_event_listener(ev::scroll, move |_| scroll_state.on_scroll());

    let key_state = state.clone();
    let keydown = window_event_listener(ev::keydown, move |ev| key_state.on_key(&ev.key()));

    // Sections fade in on first sight, once they are in the document
    let revealer = match SectionRevealer::new(state.clone(), &config.navigation) {
        Ok(revealer) => Some(Rc::new(revealer)),
        Err(e) => {
            tracing::warn!("Section reveal unavailable: {:?}", e);
            None
        }
    };
    if let Some(revealer) = revealer.clone() {
        request_animation_frame(move || {
            let observed = revealer.observe_sections();
            tracing::debug!("Watching {} sections for reveal", observed);
        });
    }

    // Body scrolling follows the modal
    let lock_state = state.clone();
    create_effect(move |_| {
        let open = lock_state.modal.get().is_some();
        tracing::debug!("Module modal open: {}", open);
        lock_state.sync_scroll_lock();
    });

    on_cleanup(move || {
        resize.remove();
        scroll.remove();
        keydown.remove();
        if let Some(revealer) = revealer {
            revealer.disconnect();
        }
        state.teardown();
    });

    view! {
        <div class="min-h-screen bg-white text-gray-900 flex flex-col">
            <Nav />

            <main class="flex-1">
                <Hero />
                <Stakeholders />
                <Demos />
                <Modules />
            </main>

            <Footer />

            // Rendered last so it stacks above everything
            <ModuleModal />
        </div>
    }
}

/// Poll the resize debouncer, retrying while the burst is still unsettled
fn poll_resize(state: SiteState) {
    if let Some(retry_ms) = state.poll_resize() {
        set_timeout(move || poll_resize(state), Duration::from_millis(retry_ms));
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-400 py-8">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between text-sm">
                <div class="flex items-center space-x-2">
                    <span class="text-white font-bold">"SIERA"</span>
                    <span>"Healthcare Analytics Platform"</span>
                </div>
                <div>"Sample data for demonstration only"</div>
            </div>
        </footer>
    }
}
