//! Chevron outline layout for one slider item.
//!
//! The slider item reads as a segment of a horizontal tape: a flat top and
//! bottom edge with pointed left and right tips. The tips keep a true 45°
//! angle at any width, so only the four interior vertices move when the
//! shape stretches to fill the available map width.

use kurbo::{Point, Size};

/// Tip bluntness in pixels. Zero keeps the tips as true points.
const ARROW_POINT_BLUNTNESS: f64 = 0.0;

/// Nominal (unstretched) shape width in unscaled pixels.
const NOMINAL_WIDTH: f64 = 360.0;

/// Font and icon measurements the layout is derived from.
///
/// All fixed pixel constants in the layout are multiplied by `scale`, the
/// display DPI factor supplied by the host.
#[derive(Debug, Clone, Copy)]
pub struct ShapeMetrics {
    /// Height of the small (type label / altitude) font.
    pub small_font_height: f64,
    /// Height of the medium (distance) font.
    pub medium_font_height: f64,
    /// Height of the large (name) font.
    pub large_font_height: f64,
    /// Size of the largest bearing icon.
    pub bearing_icon_size: Size,
    /// Display scale factor.
    pub scale: f64,
}

impl ShapeMetrics {
    /// Sum of all three font heights, used by hosts to size the enclosing
    /// list row.
    pub fn sum_font_heights(&self) -> f64 {
        self.small_font_height + self.medium_font_height + self.large_font_height
    }
}

/// Vertex layout of one chevron-shaped slider item.
///
/// The eight points run clockwise from the top-left corner:
///
/// ```text
///        0 ______________ 1
///       /                 \
///    7 <                   > 2,3
///       \ _______________ /
///        5                4
/// ```
///
/// Points 6,7 form the left tip and 2,3 the right tip (coincident pairs
/// while the bluntness is zero). The layout is a plain value: recompute it
/// whenever the available width changes and thread it into the draw calls.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderShape {
    points: [Point; 8],
    hint_width: f64,
    total_height: f64,
    line_one_y: f64,
    line_two_y: f64,
}

impl SliderShape {
    /// Lay out the shape for the given available width.
    ///
    /// The height is driven by the large and medium fonts (they overlap by
    /// two scaled pixels) and floored by the bearing icon, the tip
    /// half-width is half the height (45° tips) and floored by half the
    /// bearing icon width, and the interior vertices stretch to fill
    /// `available_width` minus the tip margins.
    pub fn layout(metrics: &ShapeMetrics, available_width: f64) -> Self {
        let nominal_width = NOMINAL_WIDTH * metrics.scale;

        let mut total_height =
            metrics.large_font_height + metrics.medium_font_height - 2.0 * metrics.scale;
        total_height = total_height.max(metrics.bearing_icon_size.height);

        let mut hint_width = (total_height - ARROW_POINT_BLUNTNESS) / 2.0;
        hint_width = hint_width.max(metrics.bearing_icon_size.width / 2.0);

        // Keep the 45° geometry consistent when the icon floor won.
        total_height = total_height.max(hint_width * 2.0 + ARROW_POINT_BLUNTNESS);

        let line_one_y = 0.0;
        let line_two_y = total_height - metrics.large_font_height - 1.0;

        let mut points = [Point::ZERO; 8];

        // top edge
        points[0] = Point::new(hint_width, 0.0);
        points[1] = Point::new(nominal_width - hint_width, 0.0);

        // right tip
        points[2] = Point::new(nominal_width, (total_height - ARROW_POINT_BLUNTNESS) / 2.0);
        points[3] = Point::new(nominal_width, (total_height + ARROW_POINT_BLUNTNESS) / 2.0);

        // bottom edge
        points[4] = Point::new(points[1].x, total_height);
        points[5] = Point::new(points[0].x, total_height);

        // left tip
        points[6] = Point::new(0.0, points[3].y);
        points[7] = Point::new(0.0, points[2].y);

        // Stretch the non-left-tip vertices rightward, never past the point
        // where the flat top and bottom edges would invert.
        let mut grow_x = available_width - hint_width * 2.0 - nominal_width - 1.0;
        let min_grow_x = points[5].x - points[4].x;
        grow_x = grow_x.max(min_grow_x);

        for point in &mut points[1..=4] {
            point.x += grow_x;
        }

        Self {
            points,
            hint_width,
            total_height,
            line_one_y,
            line_two_y,
        }
    }

    /// The vertex at `index` (0..8), in shape-local coordinates.
    pub fn point(&self, index: usize) -> Point {
        self.points[index]
    }

    /// All eight vertices in shape-local coordinates.
    pub fn points(&self) -> &[Point; 8] {
        &self.points
    }

    /// A copy of the vertices translated by the given offsets.
    pub fn offset_points(&self, x_offset: f64, y_offset: f64) -> [Point; 8] {
        let mut points = self.points;
        for point in &mut points {
            point.x += x_offset;
            point.y += y_offset;
        }
        points
    }

    /// Half-width of the triangular tip; the horizontal margin adjacent
    /// shapes overlap into.
    pub fn hint_width(&self) -> f64 {
        self.hint_width
    }

    /// Total width from left tip to right tip.
    pub fn width(&self) -> f64 {
        self.points[2].x
    }

    /// Total height of the shape.
    pub fn height(&self) -> f64 {
        self.total_height
    }

    /// Y offset of the first text line (type label, altitude, distance).
    pub fn line_one_y(&self) -> f64 {
        self.line_one_y
    }

    /// Y offset of the second text line (item name).
    pub fn line_two_y(&self) -> f64 {
        self.line_two_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> ShapeMetrics {
        ShapeMetrics {
            small_font_height: 10.0,
            medium_font_height: 15.0,
            large_font_height: 20.0,
            bearing_icon_size: Size::new(26.0, 13.0),
            scale: 1.0,
        }
    }

    #[test]
    fn test_layout_heights() {
        let shape = SliderShape::layout(&metrics(), 500.0);
        // large + medium - 2
        assert_eq!(shape.height(), 33.0);
        assert_eq!(shape.hint_width(), 16.5);
        assert_eq!(shape.line_one_y(), 0.0);
        assert_eq!(shape.line_two_y(), 12.0);
    }

    #[test]
    fn test_layout_fills_available_width() {
        let shape = SliderShape::layout(&metrics(), 500.0);
        // shape spans the available width minus the two overlap margins
        assert_eq!(shape.width(), 500.0 - 2.0 * shape.hint_width() - 1.0);
    }

    #[test]
    fn test_tips_are_45_degrees() {
        let shape = SliderShape::layout(&metrics(), 500.0);
        // left tip: run from x=0 to the top-left corner equals the rise
        assert_eq!(shape.point(0).x, shape.point(7).y);
        // right tip mirrors it
        assert_eq!(shape.point(2).x - shape.point(1).x, shape.point(2).y);
    }

    #[test]
    fn test_clockwise_order_from_top_left() {
        let shape = SliderShape::layout(&metrics(), 500.0);
        let p = shape.points();
        assert!(p[0].x < p[1].x && p[0].y == p[1].y); // top edge
        assert!(p[2].x > p[1].x); // right tip beyond top edge
        assert!(p[4].x > p[5].x && p[4].y == p[5].y); // bottom edge
        assert_eq!(p[6].x, 0.0);
        assert_eq!(p[7].x, 0.0);
    }

    #[test]
    fn test_left_tip_invariant_under_width() {
        let narrow = SliderShape::layout(&metrics(), 400.0);
        let wide = SliderShape::layout(&metrics(), 800.0);
        assert_eq!(narrow.point(6), wide.point(6));
        assert_eq!(narrow.point(7), wide.point(7));
        assert_eq!(narrow.point(0), wide.point(0));
        assert_eq!(narrow.point(5), wide.point(5));
    }

    #[test]
    fn test_interior_points_grow_with_width() {
        let narrow = SliderShape::layout(&metrics(), 400.0);
        let wide = SliderShape::layout(&metrics(), 800.0);
        for i in 1..=4 {
            assert!(wide.point(i).x > narrow.point(i).x, "point {i} did not grow");
        }
        assert_eq!(wide.point(1).x - narrow.point(1).x, 400.0);
    }

    #[test]
    fn test_right_tip_pinned_to_extreme() {
        for width in [300.0, 450.0, 600.0, 1200.0] {
            let shape = SliderShape::layout(&metrics(), width);
            let max_x = shape.points().iter().map(|p| p.x).fold(f64::MIN, f64::max);
            assert_eq!(shape.point(2).x, max_x);
            assert_eq!(shape.point(3).x, max_x);
        }
    }

    #[test]
    fn test_tip_y_invariant_under_width() {
        let narrow = SliderShape::layout(&metrics(), 400.0);
        let wide = SliderShape::layout(&metrics(), 1000.0);
        assert_eq!(narrow.point(2).y, wide.point(2).y);
        assert_eq!(narrow.point(3).y, wide.point(3).y);
    }

    #[test]
    fn test_narrow_width_never_inverts_flat_edges() {
        // far below the nominal width: top/bottom edges clamp to zero length
        let shape = SliderShape::layout(&metrics(), 10.0);
        assert!(shape.point(1).x >= shape.point(0).x - f64::EPSILON);
        assert!(shape.point(4).x >= shape.point(5).x - f64::EPSILON);
        assert_eq!(shape.point(1).x, shape.point(0).x);
    }

    #[test]
    fn test_bearing_icon_floors_height_and_hint() {
        let m = ShapeMetrics {
            small_font_height: 4.0,
            medium_font_height: 5.0,
            large_font_height: 6.0,
            bearing_icon_size: Size::new(40.0, 16.0),
            scale: 1.0,
        };
        let shape = SliderShape::layout(&m, 500.0);
        // fonts give 9.0; icon height floors to 16, icon width floors hint to 20,
        // and the hint floor re-floors the height to 40
        assert_eq!(shape.hint_width(), 20.0);
        assert_eq!(shape.height(), 40.0);
    }

    #[test]
    fn test_offset_points() {
        let shape = SliderShape::layout(&metrics(), 500.0);
        let moved = shape.offset_points(100.0, 7.0);
        for (a, b) in shape.points().iter().zip(moved.iter()) {
            assert_eq!(b.x, a.x + 100.0);
            assert_eq!(b.y, a.y + 7.0);
        }
    }

    #[test]
    fn test_sum_font_heights() {
        assert_eq!(metrics().sum_font_heights(), 45.0);
    }
}
