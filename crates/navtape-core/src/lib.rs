//! Navtape Core Library
//!
//! Platform-agnostic geometry and data model for the navtape navigation bar:
//! the chevron-shaped slider outline, clip visibility classification, the
//! per-item display model and unit-aware value formatting.

pub mod bearing;
pub mod entry;
pub mod format;
pub mod input;
pub mod localize;
pub mod shape;
pub mod visibility;

pub use bearing::{classify_bearing, normalize_delta, BearingDirection, BearingTier};
pub use entry::{Decoration, SlideEntry, TaskFactory, TaskMode, Waypoint, WaypointKind};
pub use format::{
    format_distance, format_glide_ratio, format_relative_altitude, AltitudeUnit, DistanceUnit,
    UnitSettings,
};
pub use input::{Key, KeyEvent};
pub use localize::{NoTranslation, Translate};
pub use shape::{ShapeMetrics, SliderShape};
pub use visibility::VisibilityLevel;
