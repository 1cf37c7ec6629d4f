//! "Why choose us" feature grid, revealed once when scrolled into view.

use leptos::*;

use crate::content::FEATURES;
use crate::motion::{reveal, stagger_delay_ms};
use crate::services::reveal_once;
use crate::{APP_NAME, REVEAL_THRESHOLD};

#[component]
pub fn Features() -> impl IntoView {
    let section = create_node_ref::<html::Section>();
    let in_view = reveal_once(section, REVEAL_THRESHOLD);

    view! {
        <section id="features" node_ref=section class="py-20 bg-gray-900">
            <div class="container mx-auto px-4">
                <h2
                    class="text-3xl md:text-4xl font-bold text-center text-white mb-16"
                    style=move || reveal(in_view.get(), 20.0, 500, 0).to_style()
                >
                    "Why Choose " <span class="text-blue-400">{APP_NAME}</span> "?"
                </h2>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! {
                            <div
                                class="bg-gray-800 rounded-xl p-8 hover:shadow-xl"
                                style=move || reveal(in_view.get(), 50.0, 500, stagger_delay_ms(index)).to_style()
                            >
                                <div class="text-4xl mb-4">{feature.icon}</div>
                                <h3 class="text-xl font-semibold text-white mb-2">{feature.title}</h3>
                                <p class="text-gray-400">{feature.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
