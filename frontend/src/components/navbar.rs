//! Fixed navigation bar with a collapsible mobile menu.

use leptos::*;

use crate::content::NAV_LINKS;
use crate::motion::{collapse, navbar_class};
use crate::services::track_scroll_past;
use crate::state::MenuState;
use crate::{APP_NAME, LOGO_PATH, SCROLL_THRESHOLD_PX};

const MENU_ICON: &str = "M4 6h16M4 12h16M4 18h16";
const CLOSE_ICON: &str = "M6 18L18 6M6 6l12 12";

fn desktop_link_class(primary: bool) -> &'static str {
    if primary {
        "px-6 py-2 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full text-white font-medium hover:shadow-lg transition-all"
    } else {
        "text-gray-300 hover:text-white transition-colors"
    }
}

fn mobile_link_class(primary: bool) -> &'static str {
    if primary {
        "block px-4 py-3 bg-gradient-to-r from-blue-500 to-purple-600 rounded-lg text-white text-center font-medium"
    } else {
        "block px-4 py-3 bg-gray-800 rounded-lg text-white"
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = track_scroll_past(SCROLL_THRESHOLD_PX);
    let (menu, set_menu) = create_signal(MenuState::default());

    let is_open = move || menu.with(MenuState::is_open);
    let close_menu = move |_: ev::MouseEvent| set_menu.update(MenuState::close);

    view! {
        <nav class=move || navbar_class(scrolled.get())>
            <div class="container mx-auto px-4">
                <div class="flex justify-between items-center">
                    <a href="/" class="flex items-center space-x-2">
                        <img src=LOGO_PATH alt=APP_NAME class="h-10 w-10"/>
                        <span class="text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-600 bg-clip-text text-transparent">
                            {APP_NAME}
                        </span>
                    </a>

                    // Desktop navigation
                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! {
                                <a href=link.href class=desktop_link_class(link.primary)>
                                    {link.label}
                                </a>
                            })
                            .collect_view()}
                    </div>

                    // Mobile menu toggle
                    <button
                        class="md:hidden text-gray-300 focus:outline-none"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || is_open().to_string()
                        on:click=move |_| set_menu.update(MenuState::toggle)
                    >
                        <svg class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d=move || if is_open() { CLOSE_ICON } else { MENU_ICON }
                            />
                        </svg>
                    </button>
                </div>

                // Mobile menu: always mounted, collapsed by style
                <div
                    class="md:hidden mt-4 space-y-2"
                    style=move || collapse(is_open())
                    aria-hidden=move || (!is_open()).to_string()
                >
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <a
                                href=link.href
                                class=mobile_link_class(link.primary)
                                on:click=close_menu
                            >
                                {link.label}
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
