//! Demo Section
//!
//! Demo cards plus the display area for the selected demo. The panel's
//! canvas reports back once it is attached so the chart is only built into
//! a canvas that exists, and only for the latest selection.

use leptos::*;
use siera::content::{ColorTag, MetricTile, KEY_INSIGHTS, RECOMMENDATIONS};
use siera::{DemoKind, DemoPanel, Selection};

use crate::state::SiteState;

#[component]
pub fn Demos() -> impl IntoView {
    view! {
        <section id="demos" class="py-16">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-3">"Interactive Demos"</h2>
                <p class="text-gray-600 text-center mb-10">
                    "Sample dashboards built on representative data."
                </p>

                <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-5 gap-4 mb-10">
                    {DemoKind::all()
                        .iter()
                        .map(|&kind| view! { <DemoCard kind=kind /> })
                        .collect::<Vec<_>>()}
                </div>

                <div id="demoDisplay" class="bg-white rounded-xl shadow-lg p-6 min-h-[24rem]">
                    <DemoDisplay />
                </div>
            </div>
        </section>
    }
}

/// Card that selects a demo
#[component]
fn DemoCard(kind: DemoKind) -> impl IntoView {
    let state = use_context::<SiteState>().expect("SiteState not found");
    let active_demo = state.active_demo;
    let demo = kind.descriptor();

    let on_click = move |_| state.select_demo(kind.id());

    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "demo-card bg-white border border-gray-200 rounded-xl p-5 text-left hover:shadow-md transition";
                if active_demo.get() == Some(kind) {
                    format!("{} {}", base, demo.color.ring())
                } else {
                    base.to_string()
                }
            }
        >
            <i class=format!("{} text-2xl mb-3 {}", demo.icon, demo.color.text(600)) />
            <div class="font-semibold">{demo.title}</div>
            <div class="text-sm text-gray-500">{demo.subtitle}</div>
        </button>
    }
}

#[component]
fn DemoDisplay() -> impl IntoView {
    let state = use_context::<SiteState>().expect("SiteState not found");
    let selection = state.selection;

    move || match selection.get() {
        None => view! {
            <div class="text-center py-20 text-gray-400">
                <i class="fas fa-hand-pointer text-4xl mb-4" />
                <p>"Select a demo above to explore it"</p>
            </div>
        }
        .into_view(),
        Some(Selection::Unavailable { .. }) => view! {
            <div class="text-center py-20">
                <i class="fas fa-exclamation-triangle text-gray-300 text-4xl mb-4" />
                <h3 class="text-xl font-bold text-gray-400 mb-2">"Demo Not Available"</h3>
                <p class="text-gray-500">"This demo is currently being updated"</p>
            </div>
        }
        .into_view(),
        Some(Selection::Panel(panel)) => view! { <DemoPanelView panel=panel /> }.into_view(),
    }
}

#[component]
fn DemoPanelView(panel: DemoPanel) -> impl IntoView {
    let state = use_context::<SiteState>().expect("SiteState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let demo = panel.descriptor;
    let color = demo.color;

    let ticket = panel.ticket;
    let chart_state = state.clone();
    canvas_ref.on_load(move |_| {
        request_animation_frame(move || chart_state.demo_mount_ready(ticket));
    });

    let visualization = panel.visualization();
    let on_export = move |_| state.export_chart(visualization);

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h3 class="text-2xl font-bold text-gray-900 flex items-center">
                        <i class=format!("{} mr-3 {}", demo.icon, color.text(600)) />
                        {demo.title}
                    </h3>
                    <p class="text-gray-600 mt-1">{demo.subtitle}</p>
                </div>
                <button
                    on:click=on_export
                    class=format!(
                        "text-white px-4 py-2 rounded-lg transition-colors text-sm {} hover:{}",
                        color.bg(600),
                        color.bg(700),
                    )
                >
                    "Export Chart"
                </button>
            </div>

            <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                {demo.metrics
                    .iter()
                    .map(|&tile| view! { <MetricTileView tile=tile /> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="bg-white rounded-lg border border-gray-200 p-6">
                <h4 class="text-lg font-semibold mb-4">"Performance Visualization"</h4>
                <div class="relative h-[300px]">
                    <canvas id=panel.mount_id.clone() node_ref=canvas_ref />
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <BulletList heading="Key Insights" items=&KEY_INSIGHTS color=color />
                <BulletList heading="Recommendations" items=&RECOMMENDATIONS color=ColorTag::Gray />
            </div>
        </div>
    }
}

#[component]
fn MetricTileView(tile: MetricTile) -> impl IntoView {
    view! {
        <div class="bg-gray-50 rounded-lg p-4 text-center">
            <div class=format!("text-2xl font-bold mb-1 {}", tile.color.text(600))>{tile.value}</div>
            <div class="text-sm text-gray-600">{tile.label}</div>
        </div>
    }
}

#[component]
fn BulletList(
    heading: &'static str,
    items: &'static [&'static str],
    color: ColorTag,
) -> impl IntoView {
    view! {
        <div class=format!("rounded-lg p-4 {}", color.bg(50))>
            <h5 class=format!("font-semibold mb-2 {}", color.text(900))>{heading}</h5>
            <ul class=format!("text-sm space-y-1 {}", color.text(800))>
                {items
                    .iter()
                    .map(|item| view! { <li>"• " {*item}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
