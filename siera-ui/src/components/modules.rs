//! Module Section
//!
//! Product module cards and the detail modal they open.

use leptos::*;
use siera::{ModuleDetail, ModuleKind};

use crate::state::SiteState;

#[component]
pub fn Modules() -> impl IntoView {
    view! {
        <section id="modules" class="py-16 bg-gray-50">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-3">"Platform Modules"</h2>
                <p class="text-gray-600 text-center mb-10">"Select a module for details."</p>

                <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-5 gap-4">
                    {ModuleKind::all()
                        .iter()
                        .map(|&kind| view! { <ModuleCard kind=kind /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ModuleCard(kind: ModuleKind) -> impl IntoView {
    let state = use_context::<SiteState>().expect("SiteState not found");
    let detail = kind.detail();

    view! {
        <button
            on:click=move |_| state.open_module(kind)
            class="bg-white rounded-xl p-6 shadow-sm hover:shadow-md transition text-left"
        >
            <div class=format!("text-2xl font-bold mb-2 {}", detail.accent.text(600))>{kind.code()}</div>
            <p class="text-sm text-gray-600">{detail.summary}</p>
        </button>
    }
}

/// Overlay for the open module; clicking the backdrop closes it
#[component]
pub fn ModuleModal() -> impl IntoView {
    let state = use_context::<SiteState>().expect("SiteState not found");
    let modal = state.modal;

    move || {
        let state = state.clone();
        modal.get().map(|detail| {
            let close_state = state.clone();
            view! {
                <div
                    id="moduleModal"
                    class="fixed inset-0 z-50 bg-black/50 flex items-center justify-center p-4"
                    on:click=move |_| state.close_module()
                >
                    <div
                        class="bg-white rounded-xl shadow-xl max-w-2xl w-full max-h-[90vh] overflow-y-auto p-6"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <div class="flex items-center justify-between mb-4">
                            <h3 id="modalTitle" class="text-2xl font-bold">{detail.title}</h3>
                            <button
                                class="text-gray-400 hover:text-gray-600 text-2xl"
                                on:click=move |_| close_state.close_module()
                            >
                                "×"
                            </button>
                        </div>
                        <ModuleContent detail=detail />
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn ModuleContent(detail: &'static ModuleDetail) -> impl IntoView {
    if detail.is_placeholder() {
        return view! { <p>{detail.summary}</p> }.into_view();
    }

    view! {
        <div id="modalContent" class="space-y-4">
            <p class="text-lg text-gray-700">{detail.summary}</p>

            <h4 class="font-semibold text-lg">{detail.capabilities_heading}</h4>
            <ul class="space-y-2 text-gray-600">
                {detail.capabilities
                    .iter()
                    .map(|capability| view! {
                        <li class="flex items-start">
                            <i class="fas fa-check text-green-500 mt-1 mr-2" />
                            {*capability}
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ul>

            <h4 class="font-semibold text-lg">{detail.closing_heading}</h4>
            <div class=format!("rounded-lg p-3 {}", detail.accent.bg(50))>
                <p class=format!("text-sm {}", detail.accent.text(800))>{detail.closing_text}</p>
            </div>
        </div>
    }
    .into_view()
}
