//! Browser capabilities used by the components.
//!
//! Each service acquires a browser resource and ties its release to the
//! lifetime of the calling component.
//!
//! # Services
//!
//! - [`frame`] - deferred work after painted frames (hero entrance)
//! - [`scroll`] - window scroll flag (navbar)
//! - [`timer`] - repeating timer (hero carousel autoplay)
//! - [`visibility`] - one-shot viewport reveal (content sections)

pub mod frame;
pub mod scroll;
pub mod timer;
pub mod visibility;

pub use frame::*;
pub use scroll::*;
pub use timer::*;
pub use visibility::*;
