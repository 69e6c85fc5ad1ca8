//! Navtape Widgets Library
//!
//! Reusable controls that draw through the navtape canvas abstraction.

mod button;

pub use button::{ButtonControl, ButtonStyle, ClickCallback};
