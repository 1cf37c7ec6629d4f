//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Content Types** - static marketing copy rendered by the sections
//! - **Error Types** - browser integration failures

use std::fmt;

// =============================================================================
// Content Types
// =============================================================================

/// A navigation link in the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Rendered as the gradient call-to-action pill instead of a text link.
    pub primary: bool,
}

/// One hero carousel slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    /// Image path, resolved by the static asset pipeline.
    pub image: &'static str,
    /// Project category shown under the caption.
    pub category: &'static str,
}

/// A titled, icon-decorated selling point.
///
/// Used both by the hero highlight grid and the features section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// A customer quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// None of these reach the user: callers log them and degrade.
#[derive(Clone, Debug)]
pub enum AppError {
    /// A browser global or DOM node was not available.
    Dom(String),
    /// An `IntersectionObserver` could not be created.
    Observer(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Dom(msg) => write!(f, "DOM error: {}", msg),
            AppError::Observer(msg) => write!(f, "Observer error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
