//! Hero Section
//!
//! Headline copy and the benchmark chart.

use leptos::*;
use siera::VisualizationKind;

use super::nav::scroll_to_section;
use crate::state::SiteState;

#[component]
pub fn Hero() -> impl IntoView {
    let state = use_context::<SiteState>().expect("SiteState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // The canvas exists once loaded but is only attached (and measurable)
    // on the next frame
    let chart_state = state.clone();
    canvas_ref.on_load(move |_| {
        request_animation_frame(move || chart_state.hero_ready());
    });

    let on_export = move |_| state.export_chart(VisualizationKind::Benchmark);

    view! {
        <section id="home" class="pt-28 pb-16 bg-gradient-to-br from-blue-50 via-white to-green-50">
            <div class="container mx-auto px-4 grid lg:grid-cols-2 gap-12 items-center">
                <div>
                    <h1 class="text-4xl md:text-5xl font-bold leading-tight mb-6">
                        "Surgical outcomes, "
                        <span class="text-blue-600">"in context"</span>
                    </h1>
                    <p class="text-xl text-gray-600 mb-8">
                        "SIERA benchmarks every result against the whole sector so each stakeholder can see where performance really stands."
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <button
                            class="bg-blue-600 text-white px-6 py-3 rounded-lg font-medium hover:bg-blue-700 transition-colors"
                            on:click=move |_| scroll_to_section("demos")
                        >
                            "Explore Demos"
                        </button>
                        <button
                            class="border border-blue-600 text-blue-600 px-6 py-3 rounded-lg font-medium hover:bg-blue-50 transition-colors"
                            on:click=move |_| scroll_to_section("modules")
                        >
                            "View Modules"
                        </button>
                    </div>
                </div>

                <div class="bg-white rounded-xl shadow-lg p-6">
                    <div class="flex items-center justify-between mb-4">
                        <h3 class="text-lg font-semibold">"Performance vs Sector Benchmark"</h3>
                        <button
                            class="text-sm text-gray-500 hover:text-gray-700"
                            title="Download as PNG"
                            on:click=on_export
                        >
                            <i class="fas fa-download" />
                        </button>
                    </div>
                    <div class="relative h-72">
                        <canvas id=VisualizationKind::Benchmark.mount_id() node_ref=canvas_ref />
                    </div>
                </div>
            </div>
        </section>
    }
}
