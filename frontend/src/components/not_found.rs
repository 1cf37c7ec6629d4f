//! Fallback for paths outside the landing page.

use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="min-h-screen flex flex-col items-center justify-center bg-gray-900 text-center px-4">
            <h1 class="text-5xl font-bold text-white mb-4">"Coming soon"</h1>
            <p class="text-gray-400 mb-8">"This page isn't available yet."</p>
            <a
                href="/"
                class="px-6 py-2 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full text-white font-medium"
            >
                "Back to home"
            </a>
        </section>
    }
}
