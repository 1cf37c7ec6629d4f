//! Closing call-to-action.

use leptos::*;

use crate::motion::reveal;
use crate::services::reveal_once;
use crate::REVEAL_THRESHOLD;

#[component]
pub fn Cta() -> impl IntoView {
    let section = create_node_ref::<html::Section>();
    let in_view = reveal_once(section, REVEAL_THRESHOLD);

    view! {
        <section id="get-started" node_ref=section class="py-20 bg-gray-900">
            <div class="container mx-auto px-4">
                <div
                    class="max-w-4xl mx-auto text-center rounded-2xl p-12 bg-gradient-to-r from-blue-500 to-purple-600 shadow-xl"
                    style=move || reveal(in_view.get(), 40.0, 600, 0).to_style()
                >
                    <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">
                        "Ready to start your next project?"
                    </h2>
                    <p class="text-lg text-blue-100 mb-8">
                        "Post your brief for free and hear from verified creators within hours."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href="/get-started"
                            class="btn-press px-8 py-3.5 bg-white rounded-full text-blue-600 font-semibold shadow-lg"
                        >
                            "Get Started"
                        </a>
                        <a
                            href="/creators"
                            class="btn-press px-8 py-3.5 border-2 border-white/70 rounded-full text-white font-semibold hover:border-white"
                        >
                            "Become a Creator"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
