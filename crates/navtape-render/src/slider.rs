//! The slider draw pipeline.
//!
//! One renderer call draws one chevron-shaped item of the navigation strip:
//! background and border first, then the formatted text fields and icons,
//! positioned and clipped to the horizontal space the item actually has.
//! Content that would land off canvas is skipped silently.

use kurbo::{Point, Rect, Size};
use navtape_core::bearing::{classify_bearing, BearingDirection};
use navtape_core::entry::{Decoration, SlideEntry, TaskMode};
use navtape_core::format::{format_distance, format_glide_ratio, format_relative_altitude};
use navtape_core::localize::Translate;
use navtape_core::shape::SliderShape;
use navtape_core::visibility::VisibilityLevel;

use crate::canvas::{Canvas, IconAnchor};
use crate::style::{
    NavBarSettings, NavSliderLook, Reachability, RenderQuirks, TurnpointIconRenderer,
};

/// Draws slider items onto a borrowed canvas.
///
/// The renderer owns nothing: look, settings and translator are borrowed
/// read-only contexts, the shape layout is computed by the host per width
/// change and threaded into every call.
pub struct SliderRenderer<'a> {
    look: &'a NavSliderLook,
    settings: &'a NavBarSettings,
    translator: &'a dyn Translate,
    quirks: RenderQuirks,
    turnpoint_icons: Option<&'a dyn TurnpointIconRenderer>,
}

impl<'a> SliderRenderer<'a> {
    pub fn new(
        look: &'a NavSliderLook,
        settings: &'a NavBarSettings,
        translator: &'a dyn Translate,
    ) -> Self {
        Self {
            look,
            settings,
            translator,
            quirks: RenderQuirks::default(),
            turnpoint_icons: None,
        }
    }

    /// Set the host capability flags.
    pub fn with_quirks(mut self, quirks: RenderQuirks) -> Self {
        self.quirks = quirks;
        self
    }

    /// Set the external waypoint-icon renderer.
    pub fn with_turnpoint_icons(mut self, renderer: &'a dyn TurnpointIconRenderer) -> Self {
        self.turnpoint_icons = Some(renderer);
        self
    }

    /// The text rectangle inside the shape, clear of both tip margins.
    fn inner_rect(shape: &SliderShape, rc_outer: Rect) -> Rect {
        let margin = 3.0 * shape.hint_width() / 2.0;
        Rect::new(
            rc_outer.x0 + margin,
            rc_outer.y0,
            rc_outer.x1 - margin,
            rc_outer.y1,
        )
    }

    /// Draw background and border for one item.
    ///
    /// Returns false when no part of the shape is inside the clip
    /// rectangle, in which case nothing was drawn and the caller skips the
    /// whole entry. The polygon fill uses the currently selected brush.
    pub fn draw_outline(
        &self,
        canvas: &mut dyn Canvas,
        shape: &SliderShape,
        rc: Rect,
        use_wide_pen: bool,
    ) -> bool {
        let clip = canvas.clip();
        let pen_width = self.look.border_pen(use_wide_pen).width;

        // Dithered wide pens center odd widths within half a pixel, and
        // lines with square ends poke one pixel past their endpoints; the
        // clamped copy must stay strictly inside the canvas.
        let (width_offset, top_line_offset) = if self.quirks.needs_extra_top_border {
            (1.0, 2.0)
        } else {
            (0.0, 1.0)
        };

        let raw = shape.offset_points(rc.x0, rc.y0);
        let mut clamped = raw;
        for point in &mut clamped {
            point.x = point
                .x
                .max(clip.x0 + pen_width / 2.0 + width_offset)
                .min(clip.x1 - pen_width / 2.0 - 1.0);
            point.y = point
                .y
                .max(clip.y0 + top_line_offset)
                .min(clip.y1 - pen_width / 2.0 - 1.0);
        }

        // Classify from the unclamped points so the outcome reflects the
        // true geometry, not the clamp.
        let visibility = VisibilityLevel::classify(clip, &raw, self.look.scale);
        if visibility == VisibilityLevel::NotVisible {
            return false;
        }

        if self.quirks.outline_as_closed_polygon {
            canvas.select_pen(self.look.border_pen(use_wide_pen));
            canvas.draw_polygon(&clamped);
            return true;
        }

        match visibility {
            VisibilityLevel::Full
            | VisibilityLevel::LeftTipAndBody
            | VisibilityLevel::RightTipAndBody => {
                self.draw_background_all(canvas, &clamped);
                self.draw_outline_all(canvas, &clamped, use_wide_pen);
            }

            // Tip only: fill the whole polygon (cheaper than clipping it)
            // and stroke just the two visible tip segments, so no border
            // aliases at the clip boundary.
            VisibilityLevel::LeftTip | VisibilityLevel::RightTip => {
                canvas.select_pen(self.look.fill_edge_pen);
                canvas.draw_polygon(&clamped);
                canvas.select_pen(self.look.border_pen(use_wide_pen));
                if visibility == VisibilityLevel::LeftTip {
                    canvas.draw_two_lines(clamped[0], clamped[6], clamped[5]);
                } else {
                    canvas.draw_two_lines(clamped[1], clamped[2], clamped[4]);
                }
            }

            VisibilityLevel::NotVisible => unreachable!("handled above"),
        }

        true
    }

    fn draw_background_all(&self, canvas: &mut dyn Canvas, poly: &[Point; 8]) {
        canvas.select_pen(self.look.fill_edge_pen);
        canvas.draw_polygon(poly);
        if self.quirks.needs_extra_top_border {
            let y = self.look.top_border_pen.width;
            canvas.select_pen(self.look.top_border_pen);
            canvas.draw_line(Point::new(poly[0].x, y), Point::new(poly[1].x, y));
        }
    }

    fn draw_outline_all(&self, canvas: &mut dyn Canvas, poly: &[Point; 8], use_wide_pen: bool) {
        // right side, bottom and left side; the top edge is drawn by the
        // adjacent widget or the top-border quirk
        canvas.select_pen(self.look.border_pen(use_wide_pen));
        canvas.draw_two_lines(poly[1], poly[2], poly[3]);
        canvas.draw_two_lines(poly[3], poly[4], poly[5]);
        canvas.draw_two_lines(poly[5], poly[6], poly[7]);
        canvas.draw_line(poly[7], poly[0]);
    }

    /// Clear the strip left of the first and right of the last item, on
    /// hosts that do not clear the background themselves.
    pub fn paint_background(
        &self,
        canvas: &mut dyn Canvas,
        shape: &SliderShape,
        rc: Rect,
        index: usize,
        list_length: usize,
    ) {
        if !self.quirks.needs_manual_background_clear {
            return;
        }
        if index == 0 {
            let left_mid = shape.point(7);
            canvas.fill_rect(
                Rect::new(0.0, 0.0, rc.x0 + left_mid.x, rc.y1),
                self.look.clear_brush,
            );
        }
        if index + 1 == list_length {
            let right_mid = shape.point(3);
            canvas.fill_rect(
                Rect::new(
                    rc.x0 + right_mid.x,
                    0.0,
                    rc.x0 + right_mid.x + shape.hint_width() + 1.0,
                    rc.y1,
                ),
                self.look.clear_brush,
            );
        }
    }

    /// Placeholder for an entry that is not navigable: outline plus a
    /// centered "Click to navigate" hint.
    pub fn draw_invalid(
        &self,
        canvas: &mut dyn Canvas,
        shape: &SliderShape,
        rc_outer: Rect,
        entry: &SlideEntry,
        use_wide_pen: bool,
    ) {
        let rc = Self::inner_rect(shape, rc_outer);
        let font = self.look.medium_font;

        canvas.set_text_color(self.look.text_color(entry.selected));
        canvas.select_brush(self.look.background_brush(entry.selected));
        self.draw_outline(canvas, shape, rc_outer, use_wide_pen);

        canvas.select_font(font);
        let text = self.translator.tr("Click to navigate");
        let width = canvas.text_width(&text);
        let left = rc.x0 + (rc.width() - width) / 2.0;
        if left > 0.0 {
            canvas.draw_text(
                Point::new(left, rc.y0 + (rc.height() - font.height) / 2.0),
                &text,
            );
        }

        self.paint_background(canvas, shape, rc_outer, entry.index, 1);
    }

    /// Draw one complete slider item.
    pub fn draw(
        &self,
        canvas: &mut dyn Canvas,
        shape: &SliderShape,
        rc_outer: Rect,
        entry: &SlideEntry,
        use_wide_pen: bool,
    ) {
        let rc = Self::inner_rect(shape, rc_outer);

        if !entry.valid {
            self.draw_invalid(canvas, shape, rc_outer, entry, use_wide_pen);
            return;
        }

        canvas.set_text_color(self.look.text_color(entry.selected));
        canvas.select_brush(self.look.background_brush(entry.selected));
        if !self.draw_outline(canvas, shape, rc_outer, use_wide_pen) {
            log::debug!("slider item {} fully outside the clip, skipped", entry.index);
            return;
        }

        let list_length = if entry.task_mode == TaskMode::Goto {
            1
        } else {
            entry.task_size
        };
        self.paint_background(canvas, shape, rc_outer, entry.index, list_length);

        let line_one_y = rc_outer.y0 + shape.line_one_y();
        let line_two_y = rc_outer.y0 + shape.line_two_y();

        // measured now, drawn only if the distance field leaves room
        let type_label = entry.type_label(self.translator);
        canvas.select_font(self.look.small_font);
        let label_width = canvas.text_width(&type_label);

        // arrival altitude, right-aligned on the top line
        let mut altitude_width = 0.0;
        if let Some(difference) = entry.altitude_difference {
            canvas.select_font(self.look.small_font);
            let text = format_relative_altitude(difference, &self.settings.units);
            altitude_width = canvas.text_width(&text);
            let left = rc.x1 - altitude_width;
            if left > 0.0 {
                canvas.draw_text(Point::new(left, line_one_y), &text);
            }
        }

        let bearing_delta = entry.bearing_delta_if_applicable();

        // distance, with the optional target prefix and glide-ratio suffix
        let mut distance_text = String::new();
        if entry.navigate_to_target
            && entry.task_size > 0
            && !entry.is_start()
            && !entry.is_finish()
        {
            distance_text = format!("{}: ", self.translator.tr("Target"));
        }
        if let Some(distance) = entry.distance {
            distance_text.push_str(&format_distance(distance, &self.settings.units));
        }
        let glide_ratio_shown = entry.glide_ratio.is_some() && self.settings.enable_glide_ratio;
        if glide_ratio_shown {
            let ratio = entry.glide_ratio.unwrap_or_default();
            distance_text.push_str(&format!(" [{}]", format_glide_ratio(ratio)));
        }

        let mut bearing_direction = BearingDirection::None;
        if entry.distance.is_some() || glide_ratio_shown {
            canvas.select_font(self.look.medium_font);
            let distance_width = canvas.text_width(&distance_text);

            // the label shows only when label, distance and altitude fit
            // side by side with margin to spare
            let fits = distance_width + altitude_width
                < rc.width() - label_width - 15.0 * self.look.scale;
            if fits && self.settings.enable_leg_labels && !type_label.is_empty() && rc.x0 > 0.0 {
                canvas.select_font(self.look.small_font);
                canvas.draw_text(Point::new(rc.x0, line_one_y), &type_label);
            }

            canvas.select_font(self.look.medium_font);
            let left = rc.x0 + (rc.width() - distance_width) / 2.0;
            if left > 0.0 {
                canvas.draw_text(Point::new(left, line_one_y), &distance_text);
            }

            if let Some(delta) = bearing_delta {
                bearing_direction = self.draw_bearing(canvas, shape, rc_outer, delta);
            }
        } else if self.settings.enable_leg_labels && !type_label.is_empty() {
            canvas.select_font(self.look.small_font);
            canvas.draw_text(Point::new(rc.x0, line_one_y), &type_label);
        }

        // item name, centered when it fits, left-pinned and clipped when
        // it overflows
        canvas.select_font(self.look.large_font);
        let decoration = entry.decoration();
        let icon_size = match decoration {
            Decoration::Checkmark => self.look.checkmark_icon.size,
            Decoration::Teammate => self.look.teammate_icon.size,
            // the target icon footprint also reserves the space consumed by
            // the external turnpoint renderer
            Decoration::Target | Decoration::Turnpoint => self.look.target_icon.size,
            Decoration::None => Size::ZERO,
        };

        let mut rc_name = Rect::new(
            rc_outer.x0 + shape.hint_width(),
            rc_outer.y0,
            rc_outer.x1 - shape.hint_width(),
            rc_outer.y1,
        );

        let name_width = canvas.text_width(entry.name) + icon_size.width;
        let left_icon = if name_width > rc_name.width() {
            // overflow: trade margin with the bearing icon side
            if entry.is_current && bearing_direction != BearingDirection::Right {
                rc_name.x1 += shape.hint_width() / 2.0;
            }
            if entry.is_current && bearing_direction == BearingDirection::Right {
                rc_name.x1 -= 5.0 * self.look.scale;
            }
            rc_name.x0
        } else {
            rc_name.x0 + (rc_name.width() - name_width) / 2.0
        };

        canvas.draw_text_clipped(
            Point::new(left_icon + icon_size.width, line_two_y),
            rc_name.width() - icon_size.width / 2.0,
            entry.name,
        );

        if decoration != Decoration::None {
            self.draw_decoration(canvas, entry, decoration, icon_size, left_icon, line_two_y, rc);
        }
    }

    /// Draw the one decoration icon next to the name.
    #[allow(clippy::too_many_arguments)]
    fn draw_decoration(
        &self,
        canvas: &mut dyn Canvas,
        entry: &SlideEntry,
        decoration: Decoration,
        icon_size: Size,
        left_icon: f64,
        line_two_y: f64,
        rc: Rect,
    ) {
        // center in the space below the name line, staying above the
        // bottom edge
        let offset_y = if line_two_y + icon_size.height <= rc.y1 {
            line_two_y + (rc.y1 - line_two_y - icon_size.height) / 2.0 - self.look.scale
        } else {
            rc.y1 - icon_size.height - self.look.scale
        };

        let upper_left = Point::new(left_icon, offset_y);
        let lower_right = Point::new(
            upper_left.x + icon_size.width,
            upper_left.y + icon_size.height,
        );
        let clip = canvas.clip();
        if !clip.contains(upper_left) || !clip.contains(lower_right) {
            return;
        }

        if decoration == Decoration::Checkmark {
            canvas.draw_icon(self.look.checkmark_icon, upper_left, IconAnchor::UpperLeft);
            return;
        }

        let mut center = upper_left;
        center.y += self.look.large_font.height / 4.0;

        match decoration {
            Decoration::Target => {
                canvas.draw_icon(self.look.target_icon, center, IconAnchor::Center);
            }
            Decoration::Teammate => {
                canvas.draw_icon(self.look.teammate_icon, center, IconAnchor::Center);
            }
            Decoration::Turnpoint => {
                if let (Some(renderer), Some(waypoint)) = (self.turnpoint_icons, entry.waypoint) {
                    let reachability = if entry.altitude_difference.is_some_and(|d| d > 0.0) {
                        Reachability::ReachableTerrain
                    } else {
                        Reachability::Unreachable
                    };
                    renderer.draw(canvas, waypoint, center, reachability);
                }
            }
            Decoration::Checkmark | Decoration::None => unreachable!("handled by the caller"),
        }
    }

    /// Draw the tiered bearing chevron icon, pinned to the inner margin of
    /// its side and vertically centered on the right-tip vertex.
    ///
    /// Returns the direction even when the icon did not fit on canvas, so
    /// the name layout can still reserve the margin.
    pub fn draw_bearing(
        &self,
        canvas: &mut dyn Canvas,
        shape: &SliderShape,
        rc_outer: Rect,
        delta_degrees: f64,
    ) -> BearingDirection {
        let Some((direction, tier)) = classify_bearing(delta_degrees) else {
            return BearingDirection::None;
        };
        let icon = self.look.bearing_icons.icon(direction, tier);
        let size = icon.size;

        let x_offset = if direction == BearingDirection::Left {
            1.0
        } else {
            shape.width() - size.width
        };
        let upper_left = Point::new(
            rc_outer.x0 + x_offset,
            rc_outer.y0 + shape.point(2).y - size.height / 2.0,
        );
        let lower_right = Point::new(upper_left.x + size.width, upper_left.y + size.height);

        let clip = canvas.clip();
        if clip.contains(upper_left) && clip.contains(lower_right) {
            canvas.draw_icon(icon, upper_left, IconAnchor::UpperLeft);
        }
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, IconKind, RecordingCanvas};
    use navtape_core::bearing::BearingTier;
    use navtape_core::entry::{TaskFactory, Waypoint, WaypointKind};
    use navtape_core::localize::NoTranslation;
    use std::cell::RefCell;

    fn look() -> NavSliderLook {
        NavSliderLook::default_for_scale(1.0)
    }

    fn shape_for(look: &NavSliderLook, available_width: f64) -> SliderShape {
        SliderShape::layout(&look.shape_metrics(), available_width)
    }

    fn ordered(index: usize, task_size: usize) -> SlideEntry<'static> {
        SlideEntry::new(index, task_size, "MEIRINGEN", TaskMode::Ordered)
    }

    struct StubTurnpointIcons {
        calls: RefCell<Vec<(String, Reachability)>>,
    }

    impl StubTurnpointIcons {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl TurnpointIconRenderer for StubTurnpointIcons {
        fn draw(
            &self,
            _canvas: &mut dyn Canvas,
            waypoint: &Waypoint,
            _center: Point,
            reachability: Reachability,
        ) {
            self.calls
                .borrow_mut()
                .push((waypoint.name.clone(), reachability));
        }
    }

    #[test]
    fn test_invalid_entry_renders_placeholder_only() {
        let look = look();
        let settings = NavBarSettings::default();
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let mut entry = ordered(2, 4);
        entry.valid = false;
        entry.distance = Some(10_000.0);
        entry.altitude_difference = Some(100.0);

        renderer.draw(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), &entry, false);

        assert_eq!(canvas.texts(), vec!["Click to navigate"]);
        assert!(canvas.icons().is_empty());
    }

    #[test]
    fn test_off_clip_entry_draws_nothing() {
        let look = look();
        let settings = NavBarSettings::default();
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let mut entry = ordered(2, 4);
        entry.distance = Some(10_000.0);
        renderer.draw(
            &mut canvas,
            &shape,
            Rect::new(2000.0, 0.0, 2800.0, 36.0),
            &entry,
            false,
        );

        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn test_full_outline_omits_top_edge() {
        let look = look();
        let settings = NavBarSettings::default();
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let drawn =
            renderer.draw_outline(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), false);

        assert!(drawn);
        let lines: Vec<_> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        // three two-segment polylines plus the closing left-tip edge
        assert_eq!(lines.len(), 7);
        // no horizontal segment runs along the (clamped) top edge
        assert!(lines
            .iter()
            .all(|(from, to)| !(from.y == to.y && from.y <= 1.0)));
    }

    #[test]
    fn test_tip_only_outline_uses_two_segments() {
        let look = look();
        let settings = NavBarSettings::default();
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        // clip so narrow that only the left tip is visible
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 15.0, 50.0));

        let drawn =
            renderer.draw_outline(&mut canvas, &shape, Rect::new(1.0, 0.0, 801.0, 36.0), false);

        assert!(drawn);
        let polygons = canvas
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::Polygon { .. }))
            .count();
        let lines = canvas
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count();
        assert_eq!(polygons, 1);
        assert_eq!(lines, 2);
    }

    #[test]
    fn test_wide_pen_reaches_border_segments() {
        let look = look();
        let settings = NavBarSettings::default();
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        renderer.draw_outline(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), true);

        let wide = look.wide_border_pen.width;
        assert!(canvas.ops().iter().any(
            |op| matches!(op, DrawOp::Line { pen_width, .. } if *pen_width == wide)
        ));
    }

    #[test]
    fn test_top_border_quirk_adds_line() {
        let look = look();
        let settings = NavBarSettings::default();
        let quirks = RenderQuirks {
            needs_extra_top_border: true,
            ..Default::default()
        };
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation).with_quirks(quirks);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        renderer.draw_outline(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), false);

        let top = look.top_border_pen.width;
        assert!(canvas.ops().iter().any(|op| matches!(
            op,
            DrawOp::Line { from, to, pen_width } if from.y == top && to.y == top && *pen_width == top
        )));
    }

    #[test]
    fn test_closed_polygon_quirk_short_circuits() {
        let look = look();
        let settings = NavBarSettings::default();
        let quirks = RenderQuirks {
            outline_as_closed_polygon: true,
            ..Default::default()
        };
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation).with_quirks(quirks);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        renderer.draw_outline(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), false);

        assert_eq!(canvas.ops().len(), 1);
        assert!(matches!(canvas.ops()[0], DrawOp::Polygon { .. }));
    }

    #[test]
    fn test_content_fields_with_room_for_label() {
        let look = look();
        let settings = NavBarSettings::default();
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let mut entry = ordered(2, 4);
        entry.distance = Some(12_340.0);
        entry.altitude_difference = Some(320.0);
        entry.glide_ratio = Some(50.2);

        renderer.draw(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), &entry, false);

        let texts = canvas.texts();
        assert!(texts.contains(&"+320 m"));
        assert!(texts.contains(&"TP 2"));
        assert!(texts.contains(&"12.3 km [50.2]"));
        assert!(texts.contains(&"MEIRINGEN"));
    }

    #[test]
    fn test_label_suppressed_when_too_narrow() {
        let look = look();
        let settings = NavBarSettings::default();
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 220.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 220.0, 50.0));

        let mut entry = ordered(2, 4);
        entry.distance = Some(12_340.0);
        entry.altitude_difference = Some(320.0);
        entry.glide_ratio = Some(50.2);

        renderer.draw(&mut canvas, &shape, Rect::new(0.0, 0.0, 220.0, 36.0), &entry, false);

        let texts = canvas.texts();
        // the distance stays, centered; the type label gives way
        assert!(texts.contains(&"12.3 km [50.2]"));
        assert!(!texts.contains(&"TP 2"));
        assert_eq!(texts.len(), 3);
    }

    #[test]
    fn test_target_prefix_on_distance() {
        let look = look();
        let settings = NavBarSettings::default();
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let mut entry = ordered(2, 4);
        entry.task_factory = TaskFactory::Aat;
        entry.navigate_to_target = true;
        entry.distance = Some(12_340.0);

        renderer.draw(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), &entry, false);

        assert!(canvas.texts().contains(&"Target: 12.3 km"));
    }

    #[test]
    fn test_label_only_when_no_distance() {
        let look = look();
        let settings = NavBarSettings::default();
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let entry = ordered(1, 4);
        renderer.draw(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), &entry, false);

        let texts = canvas.texts();
        assert!(texts.contains(&"TP 1"));
        assert!(texts.contains(&"MEIRINGEN"));
        assert_eq!(texts.len(), 2);
    }

    #[test]
    fn test_leg_labels_can_be_disabled() {
        let look = look();
        let settings = NavBarSettings {
            enable_leg_labels: false,
            ..Default::default()
        };
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let mut entry = ordered(1, 4);
        entry.distance = Some(5_000.0);
        renderer.draw(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), &entry, false);

        let texts = canvas.texts();
        assert!(!texts.contains(&"TP 1"));
        assert!(texts.contains(&"5.0 km"));
    }

    #[test]
    fn test_glide_ratio_suffix_can_be_disabled() {
        let look = look();
        let settings = NavBarSettings {
            enable_glide_ratio: false,
            ..Default::default()
        };
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let mut entry = ordered(1, 4);
        entry.distance = Some(5_000.0);
        entry.glide_ratio = Some(31.0);
        renderer.draw(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), &entry, false);

        assert!(canvas.texts().contains(&"5.0 km"));
    }

    #[test]
    fn test_bearing_icon_tier_and_position() {
        let look = look();
        let settings = NavBarSettings::default();
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let mut entry = ordered(2, 4);
        entry.is_current = true;
        entry.distance = Some(12_340.0);
        entry.delta_bearing = Some(25.0);

        renderer.draw(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), &entry, false);

        assert!(canvas
            .icons()
            .contains(&IconKind::BearingRight(BearingTier::Three)));
        let pos = canvas
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Icon { kind: IconKind::BearingRight(_), position, .. } => Some(*position),
                _ => None,
            })
            .unwrap();
        // pinned to the right inner margin
        let icon_width = look.bearing_icons.max_size().width;
        assert_eq!(pos.x, shape.width() - icon_width);
    }

    #[test]
    fn test_bearing_skipped_for_non_current_ordered_item() {
        let look = look();
        let settings = NavBarSettings::default();
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let mut entry = ordered(2, 4);
        entry.distance = Some(12_340.0);
        entry.delta_bearing = Some(25.0);

        renderer.draw(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), &entry, false);

        assert!(canvas.icons().is_empty());
    }

    #[test]
    fn test_checkmark_beats_target_icon() {
        let look = look();
        let settings = NavBarSettings::default();
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let waypoint = Waypoint::new("BERN", WaypointKind::Airfield);
        let mut entry = ordered(2, 4);
        entry.waypoint = Some(&waypoint);
        entry.task_factory = TaskFactory::Aat;
        entry.navigate_to_target = true;
        entry.has_entered = true;

        renderer.draw(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), &entry, false);

        assert_eq!(canvas.icons(), vec![IconKind::Checkmark]);
    }

    #[test]
    fn test_target_icon_center_anchored() {
        let look = look();
        let settings = NavBarSettings::default();
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let mut entry = ordered(2, 4);
        entry.task_factory = TaskFactory::Aat;
        entry.navigate_to_target = true;

        renderer.draw(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), &entry, false);

        assert!(canvas.ops().iter().any(|op| matches!(
            op,
            DrawOp::Icon { kind: IconKind::Target, anchor: IconAnchor::Center, .. }
        )));
    }

    #[test]
    fn test_turnpoint_icon_via_external_renderer() {
        let look = look();
        let settings = NavBarSettings::default();
        let stub = StubTurnpointIcons::new();
        let renderer =
            SliderRenderer::new(&look, &settings, &NoTranslation).with_turnpoint_icons(&stub);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let waypoint = Waypoint::new("BERN", WaypointKind::Airfield);
        let mut entry = ordered(2, 4);
        entry.waypoint = Some(&waypoint);
        entry.altitude_difference = Some(150.0);

        renderer.draw(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), &entry, false);

        let calls = stub.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "BERN");
        assert_eq!(calls[0].1, Reachability::ReachableTerrain);
    }

    #[test]
    fn test_turnpoint_unreachable_without_altitude_margin() {
        let look = look();
        let settings = NavBarSettings::default();
        let stub = StubTurnpointIcons::new();
        let renderer =
            SliderRenderer::new(&look, &settings, &NoTranslation).with_turnpoint_icons(&stub);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let waypoint = Waypoint::new("BERN", WaypointKind::Airfield);
        let mut entry = ordered(2, 4);
        entry.waypoint = Some(&waypoint);
        entry.altitude_difference = Some(-40.0);

        renderer.draw(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), &entry, false);

        assert_eq!(stub.calls.borrow()[0].1, Reachability::Unreachable);
    }

    #[test]
    fn test_manual_background_clear_quirk() {
        let look = look();
        let settings = NavBarSettings::default();
        let quirks = RenderQuirks {
            needs_manual_background_clear: true,
            ..Default::default()
        };
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation).with_quirks(quirks);
        let shape = shape_for(&look, 400.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let mut entry = ordered(0, 1);
        entry.distance = Some(5_000.0);
        renderer.draw(
            &mut canvas,
            &shape,
            Rect::new(100.0, 0.0, 500.0, 36.0),
            &entry,
            false,
        );

        // first and last item of a single-entry list: both sides cleared
        let fills = canvas
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::FilledRect { .. }))
            .count();
        assert_eq!(fills, 2);
    }

    #[test]
    fn test_name_centered_when_it_fits() {
        let look = look();
        let settings = NavBarSettings::default();
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let entry = ordered(1, 4);
        renderer.draw(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), &entry, false);

        let name_op = canvas
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { origin, text, .. } if text == "MEIRINGEN" => Some(*origin),
                _ => None,
            })
            .unwrap();
        // "MEIRINGEN" in the large font is 99 wide; centered in 18..782
        let name_width = 9.0 * look.large_font.height * 0.5;
        let expected = shape.hint_width() + (800.0 - 2.0 * shape.hint_width() - name_width) / 2.0;
        assert_eq!(name_op.x, expected);
        assert_eq!(name_op.y, shape.line_two_y());
    }

    #[test]
    fn test_overflowing_name_left_pinned_and_clipped() {
        let look = look();
        let settings = NavBarSettings::default();
        let renderer = SliderRenderer::new(&look, &settings, &NoTranslation);
        let shape = shape_for(&look, 800.0);
        let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 50.0));

        let long_name = "A VERY LONG TURNPOINT NAME THAT CANNOT POSSIBLY FIT THE AVAILABLE ROW WIDTH";
        let mut entry = SlideEntry::new(1, 4, long_name, TaskMode::Ordered);
        entry.is_current = true;

        renderer.draw(&mut canvas, &shape, Rect::new(0.0, 0.0, 800.0, 36.0), &entry, false);

        let (origin, max_width) = canvas
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { origin, text, max_width, .. } if text == long_name => {
                    Some((*origin, *max_width))
                }
                _ => None,
            })
            .unwrap();
        assert_eq!(origin.x, shape.hint_width());
        // no bearing icon: the name rectangle gains half a hint width
        let expected = (800.0 - 2.0 * shape.hint_width()) + shape.hint_width() / 2.0;
        assert_eq!(max_width, Some(expected));
    }
}
