//! Style context, user settings and host render quirks.
//!
//! The look is an explicit read-only object handed to the renderer, never an
//! ambient singleton, so the draw path stays testable in isolation.

use std::fs;
use std::path::Path;

use kurbo::{Point, Size};
use navtape_core::bearing::{BearingDirection, BearingTier};
use navtape_core::entry::Waypoint;
use navtape_core::format::UnitSettings;
use navtape_core::shape::ShapeMetrics;
use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::canvas::{Brush, Canvas, Font, Icon, IconKind, Pen};

/// Settings errors.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// The eight tiered bearing icons, four intensity levels per side.
#[derive(Debug, Clone, Copy)]
pub struct BearingIcons {
    left: [Icon; 4],
    right: [Icon; 4],
}

impl BearingIcons {
    const TIERS: [BearingTier; 4] = [
        BearingTier::One,
        BearingTier::Two,
        BearingTier::Three,
        BearingTier::Four,
    ];

    /// Build the icon set with one size shared by all tiers.
    pub fn uniform(size: Size) -> Self {
        let left = Self::TIERS.map(|tier| Icon::new(IconKind::BearingLeft(tier), size));
        let right = Self::TIERS.map(|tier| Icon::new(IconKind::BearingRight(tier), size));
        Self { left, right }
    }

    /// The icon for a classified bearing.
    ///
    /// # Panics
    ///
    /// Panics when called with `BearingDirection::None`; classify first.
    pub fn icon(&self, direction: BearingDirection, tier: BearingTier) -> Icon {
        match direction {
            BearingDirection::Left => self.left[tier.index()],
            BearingDirection::Right => self.right[tier.index()],
            BearingDirection::None => panic!("no bearing icon for the dead band"),
        }
    }

    /// The largest icon footprint, used for shape layout.
    pub fn max_size(&self) -> Size {
        self.left
            .iter()
            .chain(self.right.iter())
            .fold(Size::ZERO, |acc, icon| {
                Size::new(acc.width.max(icon.size.width), acc.height.max(icon.size.height))
            })
    }
}

/// Read-only style context for the navigation strip.
#[derive(Debug, Clone)]
pub struct NavSliderLook {
    /// Type label and altitude font.
    pub small_font: Font,
    /// Distance font.
    pub medium_font: Font,
    /// Item name font.
    pub large_font: Font,

    /// Item background.
    pub background_brush: Brush,
    /// Background of the selected item.
    pub selected_background_brush: Brush,
    /// Brush for clearing the strip outside the first/last item.
    pub clear_brush: Brush,

    pub text_color: Color,
    pub selected_text_color: Color,

    /// Border pen for unselected items.
    pub border_pen: Pen,
    /// Border pen for the selected item.
    pub wide_border_pen: Pen,
    /// Pen for the compensating top border on e-ink hosts.
    pub top_border_pen: Pen,
    /// Pen used around the background fill.
    pub fill_edge_pen: Pen,

    pub bearing_icons: BearingIcons,
    pub checkmark_icon: Icon,
    pub target_icon: Icon,
    pub teammate_icon: Icon,

    /// Display scale factor.
    pub scale: f64,
}

impl NavSliderLook {
    /// A neutral look with sizes derived from the display scale.
    pub fn default_for_scale(scale: f64) -> Self {
        let white = Color::from_rgba8(255, 255, 255, 255);
        let black = Color::from_rgba8(0, 0, 0, 255);
        let border = Color::from_rgba8(60, 60, 60, 255);
        let selected = Color::from_rgba8(216, 232, 255, 255);

        Self {
            small_font: Font::with_height(12.0 * scale),
            medium_font: Font::with_height(16.0 * scale),
            large_font: Font::with_height(22.0 * scale),
            background_brush: Brush::solid(white),
            selected_background_brush: Brush::solid(selected),
            clear_brush: Brush::solid(white),
            text_color: black,
            selected_text_color: black,
            border_pen: Pen::new(1.0 * scale, border),
            wide_border_pen: Pen::new(3.0 * scale, border),
            top_border_pen: Pen::new(2.0 * scale, border),
            fill_edge_pen: Pen::hairline(white),
            bearing_icons: BearingIcons::uniform(Size::new(26.0 * scale, 13.0 * scale)),
            checkmark_icon: Icon::new(IconKind::Checkmark, Size::new(16.0 * scale, 16.0 * scale)),
            target_icon: Icon::new(IconKind::Target, Size::new(16.0 * scale, 16.0 * scale)),
            teammate_icon: Icon::new(IconKind::Teammate, Size::new(16.0 * scale, 16.0 * scale)),
            scale,
        }
    }

    /// Border pen for an item.
    pub fn border_pen(&self, wide: bool) -> Pen {
        if wide {
            self.wide_border_pen
        } else {
            self.border_pen
        }
    }

    /// Background brush for an item.
    pub fn background_brush(&self, selected: bool) -> Brush {
        if selected {
            self.selected_background_brush
        } else {
            self.background_brush
        }
    }

    /// Text color for an item.
    pub fn text_color(&self, selected: bool) -> Color {
        if selected {
            self.selected_text_color
        } else {
            self.text_color
        }
    }

    /// The measurements the shape layout is derived from.
    pub fn shape_metrics(&self) -> ShapeMetrics {
        ShapeMetrics {
            small_font_height: self.small_font.height,
            medium_font_height: self.medium_font.height,
            large_font_height: self.large_font.height,
            bearing_icon_size: self.bearing_icons.max_size(),
            scale: self.scale,
        }
    }
}

/// User settings consumed by the draw path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavBarSettings {
    /// Append the bracketed glide-ratio suffix to the distance field.
    pub enable_glide_ratio: bool,
    /// Show the leg type label ("Start", "TP 2", ...) on the top line.
    pub enable_leg_labels: bool,
    /// Unit selections for the formatted fields.
    pub units: UnitSettings,
}

impl Default for NavBarSettings {
    fn default() -> Self {
        Self {
            enable_glide_ratio: true,
            enable_leg_labels: true,
            units: UnitSettings::default(),
        }
    }
}

impl NavBarSettings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, StyleError> {
        let json = fs::read_to_string(path)
            .map_err(|e| StyleError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&json)
            .map_err(|e| StyleError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Save settings to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), StyleError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| StyleError::Parse(e.to_string()))?;
        fs::write(path, json)
            .map_err(|e| StyleError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}

/// Host capability flags replacing platform-conditional drawing branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderQuirks {
    /// E-ink hosts without anti-aliased edges need an explicit top border
    /// line, and a wider clamp margin for dithered wide pens.
    pub needs_extra_top_border: bool,
    /// Hosts that do not clear the strip background before the items draw.
    pub needs_manual_background_clear: bool,
    /// Hosts whose line joins misrender the segmented border; draw one
    /// closed polygon instead.
    pub outline_as_closed_polygon: bool,
}

/// Whether a turnpoint is reachable in glide from the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    ReachableTerrain,
    Unreachable,
}

/// External renderer for waypoint category icons.
///
/// The strip hands over the waypoint and a center position; the host decides
/// how the icon looks.
pub trait TurnpointIconRenderer {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        waypoint: &Waypoint,
        center: Point,
        reachability: Reachability,
    );
}
