//! Push-button control.

use kurbo::{Point, Rect};
use navtape_core::input::Key;
use navtape_render::{Brush, Canvas, Font, Pen};
use peniko::Color;

/// Callback invoked when the button is activated.
pub type ClickCallback = Box<dyn FnMut()>;

/// Style configuration for a button face.
#[derive(Debug, Clone, Copy)]
pub struct ButtonStyle {
    pub background: Brush,
    pub border_pen: Pen,
    pub text_color: Color,
    pub font: Font,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            background: Brush::solid(Color::from_rgba8(230, 230, 230, 255)),
            border_pen: Pen::hairline(Color::from_rgba8(60, 60, 60, 255)),
            text_color: Color::from_rgba8(0, 0, 0, 255),
            font: Font::with_height(16.0),
        }
    }
}

/// A clickable control with a caption.
///
/// Activation comes in through the host's input routing: the accept key
/// (Enter), an optional host-configured alternate key for faster hardware
/// navigation, or a direct `click`. A button without a callback tolerates
/// activation silently and reports the event as unhandled so the host can
/// route it elsewhere.
pub struct ButtonControl {
    rect: Rect,
    caption: String,
    on_click: Option<ClickCallback>,
    alternate_accept: Option<Key>,
}

impl ButtonControl {
    pub fn new(rect: Rect, caption: impl Into<String>) -> Self {
        Self {
            rect,
            caption: caption.into(),
            on_click: None,
            alternate_accept: None,
        }
    }

    /// Register the click callback.
    pub fn with_on_click(mut self, callback: ClickCallback) -> Self {
        self.on_click = Some(callback);
        self
    }

    /// Map an additional key onto the accept path.
    pub fn with_alternate_accept(mut self, key: Key) -> Self {
        self.alternate_accept = Some(key);
        self
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    pub fn set_on_click(&mut self, callback: Option<ClickCallback>) {
        self.on_click = callback;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Activate the button. Returns true when a callback handled the click.
    pub fn click(&mut self) -> bool {
        match &mut self.on_click {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Whether this control wants the given key.
    pub fn key_check(&self, key: Key) -> bool {
        key == Key::Enter
    }

    /// Handle a key press. Unhandled keys fall back to the host's default
    /// routing.
    pub fn key_down(&mut self, key: Key) -> bool {
        if key == Key::Enter || self.alternate_accept == Some(key) {
            return self.click();
        }
        false
    }

    /// Draw the button face: filled background and the caption centered in
    /// both axes, skipped when it would start off canvas.
    pub fn draw(&self, canvas: &mut dyn Canvas, style: &ButtonStyle) {
        canvas.fill_rect(self.rect, style.background);
        canvas.select_pen(style.border_pen);
        let corners = [
            Point::new(self.rect.x0, self.rect.y0),
            Point::new(self.rect.x1, self.rect.y0),
            Point::new(self.rect.x1, self.rect.y1),
            Point::new(self.rect.x0, self.rect.y1),
        ];
        canvas.draw_line(corners[0], corners[1]);
        canvas.draw_line(corners[1], corners[2]);
        canvas.draw_line(corners[2], corners[3]);
        canvas.draw_line(corners[3], corners[0]);

        canvas.select_font(style.font);
        canvas.set_text_color(style.text_color);
        let width = canvas.text_width(&self.caption);
        let left = self.rect.x0 + (self.rect.width() - width) / 2.0;
        if left > 0.0 {
            canvas.draw_text(
                Point::new(
                    left,
                    self.rect.y0 + (self.rect.height() - style.font.height) / 2.0,
                ),
                &self.caption,
            );
        }
    }
}
