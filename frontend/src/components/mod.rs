//! UI Components for the Project02 landing page.
//!
//! # Layout Components
//! - [`Navbar`] - Fixed navigation bar with mobile menu
//! - [`NotFound`] - Fallback page for unknown paths
//!
//! # Sections
//! - [`Hero`] - Headline and autoplaying carousel
//! - [`Features`] - Feature grid with scroll reveal
//! - [`Testimonials`] - Customer quotes
//! - [`Cta`] - Closing call-to-action

mod navbar;
mod hero;
mod features;
mod testimonials;
mod cta;
mod not_found;

pub use navbar::*;
pub use hero::*;
pub use features::*;
pub use testimonials::*;
pub use cta::*;
pub use not_found::*;
