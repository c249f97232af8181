//! Navigation Component
//!
//! Fixed header with in-page links. The link for the section in view is
//! highlighted from the scroll spy.

use leptos::*;

use crate::state::SiteState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="fixed top-0 inset-x-0 z-40 bg-white/90 backdrop-blur border-b border-gray-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <a
                        href="#home"
                        class="flex items-center space-x-3"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("home");
                        }
                    >
                        <i class="fas fa-heartbeat text-2xl text-blue-600" />
                        <span class="text-xl font-bold">"SIERA"</span>
                    </a>

                    // Section links
                    <div class="hidden md:flex items-center space-x-1">
                        <NavLink section="home" label="Home" />
                        <NavLink section="stakeholders" label="Solutions" />
                        <NavLink section="demos" label="Demos" />
                        <NavLink section="modules" label="Modules" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(section: &'static str, label: &'static str) -> impl IntoView {
    let state = use_context::<SiteState>().expect("SiteState not found");
    let active_section = state.active_section;

    let is_active = create_memo(move |_| active_section.get().as_deref() == Some(section));

    view! {
        <a
            href=format!("#{}", section)
            on:click=move |ev| {
                ev.prevent_default();
                scroll_to_section(section);
            }
            class=move || {
                let base = "nav-link px-4 py-2 rounded-lg font-medium transition-colors";
                if is_active.get() {
                    format!("{} text-blue-600", base)
                } else {
                    format!("{} text-gray-600 hover:text-gray-900", base)
                }
            }
        >
            {label}
        </a>
    }
}

/// Smooth-scroll a section to the top of the viewport
pub fn scroll_to_section(id: &str) {
    let Some(section) = document().get_element_by_id(id) else {
        tracing::debug!("No section #{}", id);
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}
