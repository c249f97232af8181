//! Stakeholder Section
//!
//! One button per audience; the selected audience gets a highlight ring and
//! its focus area and benefits are listed underneath.

use leptos::*;
use siera::Stakeholder;

use crate::state::SiteState;

#[component]
pub fn Stakeholders() -> impl IntoView {
    let state = use_context::<SiteState>().expect("SiteState not found");
    let selected = state.stakeholder;

    view! {
        <section id="stakeholders" class="py-16 bg-gray-50">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-3">"Built for Every Stakeholder"</h2>
                <p class="text-gray-600 text-center mb-10">
                    "One shared evidence base, viewed from each side of the care pathway."
                </p>

                <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                    {Stakeholder::all()
                        .iter()
                        .map(|&stakeholder| view! { <StakeholderButton stakeholder=stakeholder /> })
                        .collect::<Vec<_>>()}
                </div>

                {move || selected.get().map(|stakeholder| {
                    let info = stakeholder.info();
                    view! {
                        <div class=format!("mt-8 rounded-xl p-6 {}", info.color.bg(50))>
                            <h3 class=format!("text-xl font-semibold mb-3 {}", info.color.text(800))>
                                {info.name} " - " {info.focus}
                            </h3>
                            <ul class="grid grid-cols-1 md:grid-cols-4 gap-3">
                                {info.benefits
                                    .iter()
                                    .map(|benefit| view! {
                                        <li class="flex items-center text-gray-700">
                                            <i class=format!("fas fa-check mr-2 {}", info.color.text(500)) />
                                            {*benefit}
                                        </li>
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}

#[component]
fn StakeholderButton(stakeholder: Stakeholder) -> impl IntoView {
    let state = use_context::<SiteState>().expect("SiteState not found");
    let selected = state.stakeholder;
    let info = stakeholder.info();

    let on_click = move |_| {
        state.select_stakeholder(stakeholder);
    };

    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "stakeholder-btn bg-white rounded-xl p-6 shadow-sm hover:shadow-md transition text-center";
                if selected.get() == Some(stakeholder) {
                    format!("{} {}", base, info.color.ring())
                } else {
                    base.to_string()
                }
            }
        >
            <div class=format!("text-lg font-semibold {}", info.color.text(600))>{info.name}</div>
            <div class="text-sm text-gray-500 mt-1">{info.focus}</div>
        </button>
    }
}
