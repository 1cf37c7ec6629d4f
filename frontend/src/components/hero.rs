//! Hero section: headline, highlights and the autoplaying image carousel.

use leptos::*;

use crate::content::{slide_caption, HERO_HIGHLIGHTS, SLIDES};
use crate::motion::{fade, indicator_class, reveal, slide};
use crate::services::{after_frames, RepeatingTimer};
use crate::state::Carousel;
use crate::types::FeatureItem;
use crate::{CAROUSEL_INTERVAL, ENTRANCE_SETTLE_FRAMES};

#[component]
pub fn Hero() -> impl IntoView {
    let (carousel, set_carousel) = create_signal(Carousel::new(SLIDES.len(), CAROUSEL_INTERVAL));
    let (mounted, set_mounted) = create_signal(false);
    let autoplay = store_value(None::<RepeatingTimer>);

    let restart_autoplay = move || {
        let timer = RepeatingTimer::start(CAROUSEL_INTERVAL, move || {
            set_carousel.update(|c| {
                c.elapse(CAROUSEL_INTERVAL);
            });
        });
        // Replacing the stored timer drops, and so clears, the previous one
        autoplay.set_value(Some(timer));
    };

    let select_slide = move |index: usize| {
        let mut selected = false;
        set_carousel.update(|c| selected = c.select(index));
        if selected {
            log::debug!("🎠 Slide {} selected, autoplay restarted", index + 1);
            restart_autoplay();
        }
    };

    restart_autoplay();
    log::debug!("🎠 Carousel autoplay started ({:?} per slide)", CAROUSEL_INTERVAL);

    on_cleanup(move || {
        autoplay.try_update_value(|timer| drop(timer.take()));
    });

    // Entrance animations start once the hidden start style is painted
    after_frames(ENTRANCE_SETTLE_FRAMES, move || set_mounted.set(true));

    let is_active = move |index: usize| carousel.with(|c| c.is_active(index));

    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gradient-to-br from-gray-50 to-white pt-28 pb-24">
            // Animated background
            <div
                class="absolute inset-0 bg-gradient-to-r from-blue-400 to-purple-500 rounded-full blur-3xl hero-glow"
                aria-hidden="true"
            ></div>
            <div
                class="absolute top-1/4 left-1/4 w-64 h-64 rounded-full bg-blue-300 opacity-10 blur-xl float-a"
                aria-hidden="true"
            ></div>
            <div
                class="absolute bottom-1/4 right-1/4 w-72 h-72 rounded-full bg-purple-300 opacity-10 blur-xl float-b"
                aria-hidden="true"
            ></div>

            <div class="container mx-auto px-4 relative z-10 flex flex-col lg:flex-row items-center justify-between gap-12">
                // Text content
                <div class="lg:w-1/2">
                    <div class="max-w-2xl" style=move || reveal(mounted.get(), 50.0, 800, 0).to_style()>
                        <h1 class="text-4xl md:text-6xl font-bold mb-6 text-gray-900 hover-grow">
                            <span class="bg-gradient-to-r from-blue-500 to-indigo-600 bg-clip-text text-transparent">
                                "Academic Projects"
                            </span>
                            " "
                            <br class="md:hidden"/>
                            "Made Simple"
                        </h1>

                        <p
                            class="text-lg md:text-xl text-gray-600 mb-8"
                            style=move || fade(mounted.get(), 500, 300).to_style()
                        >
                            "Connect with expert creators to bring your academic visions to life. "
                            "From essays to final-year projects, we've got you covered."
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4 justify-start">
                            <a
                                href="/marketplace"
                                class="btn-press btn-glow-blue px-8 py-3.5 bg-gradient-to-r from-blue-500 to-indigo-600 rounded-full text-white text-center font-semibold shadow-lg"
                            >
                                "Find a Creator"
                            </a>
                            <a
                                href="#features"
                                class="btn-press btn-glow-gray px-8 py-3.5 border-2 border-gray-300 rounded-full text-gray-700 text-center font-semibold hover:border-gray-400"
                            >
                                "Learn More"
                            </a>
                        </div>
                    </div>

                    <div
                        class="mt-12 grid grid-cols-1 sm:grid-cols-3 gap-4"
                        style=move || reveal(mounted.get(), 20.0, 500, 500).to_style()
                    >
                        {HERO_HIGHLIGHTS
                            .iter()
                            .map(|item| view! { <HighlightCard item=*item/> })
                            .collect_view()}
                    </div>
                </div>

                // Carousel
                <div class="lg:w-1/2 relative h-[400px] lg:h-[500px] w-full rounded-2xl overflow-hidden shadow-xl">
                    <div class="relative h-full w-full">
                        {SLIDES
                            .iter()
                            .enumerate()
                            .map(|(index, s)| view! {
                                <div
                                    class="absolute inset-0"
                                    style=move || slide(is_active(index)).to_style()
                                    aria-hidden=move || (!is_active(index)).to_string()
                                >
                                    <img
                                        src=s.image
                                        alt=slide_caption(index)
                                        class="absolute inset-0 h-full w-full object-cover"
                                    />
                                    <div class="absolute bottom-0 left-0 right-0 bg-gradient-to-t from-black/80 to-transparent p-6">
                                        <h3 class="text-xl font-bold text-white">{slide_caption(index)}</h3>
                                        <p class="text-gray-200">{s.category}</p>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>

                    // Indicators
                    <div class="absolute bottom-4 left-0 right-0 flex justify-center gap-2">
                        {(0..SLIDES.len())
                            .map(|index| view! {
                                <button
                                    class=move || indicator_class(is_active(index))
                                    aria-label=format!("Go to slide {}", index + 1)
                                    on:click=move |_| select_slide(index)
                                ></button>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            // Scroll indicator
            <div
                class="absolute bottom-8 left-1/2 flex flex-col items-center scroll-hint bob"
                aria-hidden="true"
            >
                <div class="w-6 h-10 border-2 border-gray-400 rounded-full flex justify-center">
                    <div class="w-1 h-2 bg-gray-500 rounded-full mt-1 bob-small"></div>
                </div>
                <p class="mt-2 text-sm text-gray-500">"Scroll down"</p>
            </div>
        </section>
    }
}

/// Small card in the hero highlight grid.
#[component]
fn HighlightCard(item: FeatureItem) -> impl IntoView {
    view! {
        <div class="lift-on-hover bg-white p-4 rounded-xl shadow-sm border border-gray-100 hover:shadow-md">
            <div class="text-2xl mb-2">{item.icon}</div>
            <h3 class="text-lg font-semibold text-gray-800">{item.title}</h3>
            <p class="text-sm text-gray-600">{item.description}</p>
        </div>
    }
}
