//! Customer quotes.

use leptos::*;

use crate::content::TESTIMONIALS;
use crate::motion::{reveal, stagger_delay_ms};
use crate::services::reveal_once;
use crate::REVEAL_THRESHOLD;

#[component]
pub fn Testimonials() -> impl IntoView {
    let section = create_node_ref::<html::Section>();
    let in_view = reveal_once(section, REVEAL_THRESHOLD);

    view! {
        <section id="testimonials" node_ref=section class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <h2
                    class="text-3xl md:text-4xl font-bold text-center text-gray-900 mb-16"
                    style=move || reveal(in_view.get(), 20.0, 500, 0).to_style()
                >
                    "Loved by Students and Creators"
                </h2>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, t)| view! {
                            <figure
                                class="bg-gray-50 rounded-xl p-8 border border-gray-100 shadow-sm"
                                style=move || reveal(in_view.get(), 30.0, 500, stagger_delay_ms(index)).to_style()
                            >
                                <blockquote class="text-gray-700 mb-6">
                                    "“" {t.quote} "”"
                                </blockquote>
                                <figcaption>
                                    <div class="font-semibold text-gray-900">{t.author}</div>
                                    <div class="text-sm text-gray-500">{t.role}</div>
                                </figcaption>
                            </figure>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
