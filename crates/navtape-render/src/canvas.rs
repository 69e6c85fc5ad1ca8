//! Canvas abstraction for widget drawing.
//!
//! The strip is a pure client of an externally supplied drawing surface.
//! The surface keeps a current pen, brush, font and text color, selected
//! ahead of the primitives that use them, and reports its clip rectangle so
//! callers can skip work that would land outside it.

use kurbo::{Point, Rect, Size};
use navtape_core::bearing::{BearingDirection, BearingTier};
use peniko::Color;

/// Stroke settings for lines and polygon borders.
#[derive(Debug, Clone, Copy)]
pub struct Pen {
    pub width: f64,
    pub color: Color,
}

impl Pen {
    pub fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }

    /// A one-pixel pen.
    pub fn hairline(color: Color) -> Self {
        Self::new(1.0, color)
    }
}

/// Fill settings for polygons and rectangles.
#[derive(Debug, Clone, Copy)]
pub struct Brush {
    pub color: Color,
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Self { color }
    }
}

/// A font handle; the layout only ever consumes its height, widths are
/// measured through the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub height: f64,
}

impl Font {
    pub fn with_height(height: f64) -> Self {
        Self { height }
    }
}

/// Identity of a themed icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Checkmark,
    Target,
    Teammate,
    BearingLeft(BearingTier),
    BearingRight(BearingTier),
}

impl IconKind {
    /// The bearing icon for a direction and tier.
    pub fn bearing(direction: BearingDirection, tier: BearingTier) -> Option<Self> {
        match direction {
            BearingDirection::Left => Some(Self::BearingLeft(tier)),
            BearingDirection::Right => Some(Self::BearingRight(tier)),
            BearingDirection::None => None,
        }
    }
}

/// A themed icon with its pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    pub kind: IconKind,
    pub size: Size,
}

impl Icon {
    pub fn new(kind: IconKind, size: Size) -> Self {
        Self { kind, size }
    }
}

/// How an icon position is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconAnchor {
    /// Position is the icon's upper-left corner.
    UpperLeft,
    /// Position is the icon's center.
    Center,
}

/// The drawing surface consumed by the strip.
///
/// Text origins are the upper-left corner of the text box.
pub trait Canvas {
    /// The current clip rectangle in canvas coordinates.
    fn clip(&self) -> Rect;

    fn select_pen(&mut self, pen: Pen);
    fn select_brush(&mut self, brush: Brush);
    fn select_font(&mut self, font: Font);
    fn set_text_color(&mut self, color: Color);

    /// Fill a closed polygon with the current brush and stroke its border
    /// with the current pen.
    fn draw_polygon(&mut self, points: &[Point]);

    /// Stroke a line with the current pen.
    fn draw_line(&mut self, from: Point, to: Point);

    /// Stroke two connected segments with the current pen.
    fn draw_two_lines(&mut self, first: Point, middle: Point, last: Point) {
        self.draw_line(first, middle);
        self.draw_line(middle, last);
    }

    /// Fill a rectangle with the given brush.
    fn fill_rect(&mut self, rect: Rect, brush: Brush);

    /// Width of `text` in the currently selected font.
    fn text_width(&self, text: &str) -> f64;

    /// Draw text clipped to the canvas.
    fn draw_text(&mut self, origin: Point, text: &str);

    /// Draw text clipped to `max_width` (and to the canvas).
    fn draw_text_clipped(&mut self, origin: Point, max_width: f64, text: &str);

    /// Draw an icon at `position`, interpreted per `anchor`.
    fn draw_icon(&mut self, icon: Icon, position: Point, anchor: IconAnchor);
}

fn rgba(color: Color) -> [u8; 4] {
    let c = color.to_rgba8();
    [c.r, c.g, c.b, c.a]
}

/// One recorded drawing command, with the selection state it consumed.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Polygon {
        points: Vec<Point>,
        pen_width: f64,
        pen_color: [u8; 4],
        brush: [u8; 4],
    },
    Line {
        from: Point,
        to: Point,
        pen_width: f64,
    },
    FilledRect {
        rect: Rect,
        brush: [u8; 4],
    },
    Text {
        origin: Point,
        text: String,
        max_width: Option<f64>,
        font_height: f64,
        color: [u8; 4],
    },
    Icon {
        kind: IconKind,
        position: Point,
        anchor: IconAnchor,
    },
}

/// A canvas that records commands instead of rasterizing.
///
/// Text widths are deterministic: half the selected font height per
/// character. Useful for headless tests and for hosts that replay commands
/// onto a real surface.
#[derive(Debug)]
pub struct RecordingCanvas {
    clip: Rect,
    ops: Vec<DrawOp>,
    pen: Pen,
    brush: Brush,
    font: Font,
    text_color: Color,
}

impl RecordingCanvas {
    pub fn new(clip: Rect) -> Self {
        Self {
            clip,
            ops: Vec::new(),
            pen: Pen::hairline(Color::from_rgba8(0, 0, 0, 255)),
            brush: Brush::solid(Color::from_rgba8(255, 255, 255, 255)),
            font: Font::with_height(12.0),
            text_color: Color::from_rgba8(0, 0, 0, 255),
        }
    }

    /// All recorded commands, in draw order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// The recorded text strings, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The recorded icon kinds, in draw order.
    pub fn icons(&self) -> Vec<IconKind> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Icon { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn clip(&self) -> Rect {
        self.clip
    }

    fn select_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    fn select_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    fn select_font(&mut self, font: Font) {
        self.font = font;
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    fn draw_polygon(&mut self, points: &[Point]) {
        self.ops.push(DrawOp::Polygon {
            points: points.to_vec(),
            pen_width: self.pen.width,
            pen_color: rgba(self.pen.color),
            brush: rgba(self.brush.color),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            pen_width: self.pen.width,
        });
    }

    fn fill_rect(&mut self, rect: Rect, brush: Brush) {
        self.ops.push(DrawOp::FilledRect {
            rect,
            brush: rgba(brush.color),
        });
    }

    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.font.height * 0.5
    }

    fn draw_text(&mut self, origin: Point, text: &str) {
        self.ops.push(DrawOp::Text {
            origin,
            text: text.to_string(),
            max_width: None,
            font_height: self.font.height,
            color: rgba(self.text_color),
        });
    }

    fn draw_text_clipped(&mut self, origin: Point, max_width: f64, text: &str) {
        self.ops.push(DrawOp::Text {
            origin,
            text: text.to_string(),
            max_width: Some(max_width),
            font_height: self.font.height,
            color: rgba(self.text_color),
        });
    }

    fn draw_icon(&mut self, icon: Icon, position: Point, anchor: IconAnchor) {
        self.ops.push(DrawOp::Icon {
            kind: icon.kind,
            position,
            anchor,
        });
    }
}
