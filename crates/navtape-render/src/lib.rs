//! Navtape Render Library
//!
//! Canvas abstraction and the slider draw pipeline for the navtape
//! navigation bar. The canvas is a trait so hosts can back it with any
//! drawing surface; a recording implementation is provided for headless
//! tests.

mod canvas;
mod slider;
mod style;

pub use canvas::{Brush, Canvas, DrawOp, Font, Icon, IconAnchor, IconKind, Pen, RecordingCanvas};
pub use slider::SliderRenderer;
pub use style::{
    BearingIcons, NavBarSettings, NavSliderLook, Reachability, RenderQuirks, StyleError,
    TurnpointIconRenderer,
};
