//! Project02 - Landing Page (Rust/Leptos)
//!
//! A WebAssembly landing page for the Project02 student-project
//! marketplace.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  HomePage                                                    │
//! │  ├── Navbar (scroll flag, mobile menu)                      │
//! │  ├── Hero (autoplaying carousel)                            │
//! │  ├── Features (one-shot reveal)                             │
//! │  ├── Testimonials (one-shot reveal)                         │
//! │  └── Cta (one-shot reveal)                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  NotFound (any other path)                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sections share nothing: each owns its own piece of view state.
//!
//! # Modules
//!
//! - [`state`] - Per-component view state and its transition rules
//! - [`motion`] - State-to-style functions for transitions
//! - [`content`] - Static marketing copy
//! - [`components`] - UI components
//! - [`services`] - Browser capabilities (scroll, timer, visibility)

use leptos::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod motion;
pub mod content;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Content
    FeatureItem, NavLink, Slide, Testimonial,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🦀 {} landing - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=format!("{} - Academic Projects Made Simple", APP_NAME)/>
        <Meta
            name="description"
            content="Connect with expert creators to bring your academic projects to life."
        />

        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

/// The landing page: every section in fixed vertical order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Navbar/>
        <Hero/>
        <Features/>
        <Testimonials/>
        <Cta/>
    }
}
