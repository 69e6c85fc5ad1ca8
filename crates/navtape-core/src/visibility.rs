//! Clip visibility classification for the slider outline.

use kurbo::{Point, Rect};

/// How much of a slider shape falls inside the current clip rectangle.
///
/// Items at the edge of the strip are only partially visible; the draw path
/// picks a cheaper border strategy for tip-only cases to avoid emitting
/// segments that would alias at the clip boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityLevel {
    /// Both tips inside the clip rectangle.
    Full,
    /// Some or all of the left tip, but none of the body.
    LeftTip,
    /// The left tip and at least the left end of the body.
    LeftTipAndBody,
    /// Some or all of the right tip, but none of the body.
    RightTip,
    /// The right tip and at least the right end of the body.
    RightTipAndBody,
    /// No part of the shape is inside the clip rectangle.
    NotVisible,
}

impl VisibilityLevel {
    /// Classify the outline against `clip`.
    ///
    /// `points` are the unclamped shape vertices in canvas coordinates, so
    /// the result reflects the true geometry rather than any clamping the
    /// draw path applies. The body probes sit one scaled pixel inside the
    /// top corners.
    pub fn classify(clip: Rect, points: &[Point; 8], scale: f64) -> Self {
        let left_tip = points[7];
        let left_body = Point::new(points[5].x + scale, points[5].y);

        let right_tip = points[2];
        let right_body = Point::new(points[1].x - scale, points[1].y);

        if clip.contains(left_tip) && clip.contains(right_tip) {
            Self::Full
        } else if clip.contains(left_tip) {
            if clip.contains(left_body) {
                Self::LeftTipAndBody
            } else {
                Self::LeftTip
            }
        } else if clip.contains(right_tip) {
            if clip.contains(right_body) {
                Self::RightTipAndBody
            } else {
                Self::RightTip
            }
        } else {
            Self::NotVisible
        }
    }
}
