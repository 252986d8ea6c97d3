//! Text widgets - read-only labels and single-line input labels

use std::borrow::Cow;

use crate::platform::{KeyCode, KeyEvent, Surface};
use crate::types::{Color, PixelRect};

use super::Widget;

/// Character drawn in place of each character of a password
pub const MASK_CHAR: char = '*';

/// Characters an input label accepts. Space is deliberately absent.
const ALLOWED_CHARS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789\
                             {}[]-_=+`~!@#$%^&*()\\|'\";:/?.>,<";

/// Text size and colors
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Font size as a fraction of the rectangle height
    pub scale: f64,
    pub base_color: Color,
    pub hover_color: Color,
}

impl LabelStyle {
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            base_color: Color::WHITE,
            hover_color: Color::ORANGE,
        }
    }

    pub fn with_colors(mut self, base_color: Color, hover_color: Color) -> Self {
        self.base_color = base_color;
        self.hover_color = hover_color;
        self
    }

    /// Font size in pixels for a rectangle of the given height
    pub fn font_size(&self, height: i32) -> i32 {
        (self.scale * height as f64) as i32
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self::new(0.8)
    }
}

/// State shared by both label variants
struct TextBody {
    identifier: String,
    contents: String,
    password: bool,
    style: LabelStyle,
    color: Color,
    visible: bool,
}

impl TextBody {
    fn new(identifier: String, contents: String, style: LabelStyle) -> Self {
        Self {
            identifier,
            contents,
            password: false,
            color: style.base_color,
            style,
            visible: true,
        }
    }

    fn display_text(&self) -> Cow<'_, str> {
        if self.password {
            Cow::Owned(
                std::iter::repeat(MASK_CHAR)
                    .take(self.contents.chars().count())
                    .collect(),
            )
        } else {
            Cow::Borrowed(&self.contents)
        }
    }

    fn paint(&self, surface: &mut dyn Surface, rect: PixelRect) {
        if !self.visible {
            return;
        }
        let text = self.display_text();
        if text.is_empty() {
            return;
        }
        let font_size = self.style.font_size(rect.height);
        surface.draw_text(
            &text,
            rect.x,
            rect.y.saturating_add(font_size),
            font_size,
            self.color,
        );
    }
}

/// Read-only text; ignores all keyboard input
pub struct Label {
    body: TextBody,
}

impl Label {
    pub fn new(identifier: impl Into<String>, text: impl Into<String>, style: LabelStyle) -> Self {
        Self {
            body: TextBody::new(identifier.into(), text.into(), style),
        }
    }

    pub fn text(&self) -> &str {
        &self.body.contents
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.body.contents = text.into();
    }

    /// Current draw color (base or hover)
    pub fn color(&self) -> Color {
        self.body.color
    }
}

impl Widget for Label {
    fn paint(&mut self, surface: &mut dyn Surface, rect: PixelRect) {
        self.body.paint(surface, rect);
    }

    fn identifier(&self) -> &str {
        &self.body.identifier
    }

    fn visible(&self) -> bool {
        self.body.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.body.visible = visible;
    }

    fn pointer_enter(&mut self, _x: i32, _y: i32) {
        self.body.color = self.body.style.hover_color;
    }

    fn pointer_leave(&mut self) {
        self.body.color = self.body.style.base_color;
    }
}

/// Editable single-line text, optionally masked as a password
pub struct InputLabel {
    body: TextBody,
}

impl InputLabel {
    pub fn new(identifier: impl Into<String>, style: LabelStyle) -> Self {
        Self {
            body: TextBody::new(identifier.into(), String::new(), style),
        }
    }

    pub fn with_password(mut self, password: bool) -> Self {
        self.body.password = password;
        self
    }

    pub fn contents(&self) -> &str {
        &self.body.contents
    }

    pub fn set_contents(&mut self, contents: impl Into<String>) {
        self.body.contents = contents.into();
    }

    pub fn is_password(&self) -> bool {
        self.body.password
    }

    pub fn set_password(&mut self, password: bool) {
        self.body.password = password;
    }

    pub fn color(&self) -> Color {
        self.body.color
    }

    /// Whether a typed character is appended to the contents
    pub fn accepts(ch: char) -> bool {
        ALLOWED_CHARS.contains(ch)
    }
}

impl Widget for InputLabel {
    fn paint(&mut self, surface: &mut dyn Surface, rect: PixelRect) {
        self.body.paint(surface, rect);
    }

    fn identifier(&self) -> &str {
        &self.body.identifier
    }

    fn visible(&self) -> bool {
        self.body.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.body.visible = visible;
    }

    fn pointer_enter(&mut self, _x: i32, _y: i32) {
        self.body.color = self.body.style.hover_color;
    }

    fn pointer_leave(&mut self) {
        self.body.color = self.body.style.base_color;
    }

    fn key_typed(&mut self, event: &KeyEvent) {
        if let Some(ch) = event.ch.filter(|&ch| Self::accepts(ch)) {
            self.body.contents.push(ch);
        }
    }

    fn key_released(&mut self, event: &KeyEvent) {
        if matches!(event.code, KeyCode::Backspace | KeyCode::Delete) {
            self.body.contents.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCall, RecordingSurface};

    fn type_all(input: &mut InputLabel, text: &str) {
        for ch in text.chars() {
            input.key_typed(&KeyEvent::typed(ch));
        }
    }

    #[test]
    fn test_space_is_rejected() {
        let mut input = InputLabel::new("user", LabelStyle::default());
        type_all(&mut input, "a1 ");
        assert_eq!(input.contents(), "a1");
    }

    #[test]
    fn test_punctuation_accepted() {
        let mut input = InputLabel::new("user", LabelStyle::default());
        type_all(&mut input, "x_@\\\"<>é\t");
        assert_eq!(input.contents(), "x_@\\\"<>");
    }

    #[test]
    fn test_backspace_on_release_only() {
        let mut input = InputLabel::new("user", LabelStyle::default());
        input.set_contents("abc");

        input.key_pressed(&KeyEvent::key(KeyCode::Backspace));
        assert_eq!(input.contents(), "abc");

        input.key_released(&KeyEvent::key(KeyCode::Backspace));
        input.key_released(&KeyEvent::key(KeyCode::Delete));
        assert_eq!(input.contents(), "a");

        input.key_released(&KeyEvent::key(KeyCode::Delete));
        input.key_released(&KeyEvent::key(KeyCode::Delete));
        assert_eq!(input.contents(), "");
    }

    #[test]
    fn test_password_paints_mask() {
        let mut input = InputLabel::new("pass", LabelStyle::new(0.5)).with_password(true);
        input.set_contents("ab");

        let mut surface = RecordingSurface::default();
        input.paint(&mut surface, PixelRect::new(10, 20, 200, 40));

        assert_eq!(
            surface.calls,
            vec![DrawCall::Text {
                text: "**".to_string(),
                x: 10,
                baseline: 40,
                size: 20,
                color: Color::WHITE,
            }]
        );
    }

    #[test]
    fn test_hover_color_switch() {
        let mut label = Label::new("title", "Hello", LabelStyle::new(1.0));
        assert_eq!(label.color(), Color::WHITE);

        label.pointer_enter(0, 0);
        assert_eq!(label.color(), Color::ORANGE);

        let mut surface = RecordingSurface::default();
        label.paint(&mut surface, PixelRect::new(0, 0, 100, 12));
        assert_eq!(
            surface.calls,
            vec![DrawCall::Text {
                text: "Hello".to_string(),
                x: 0,
                baseline: 12,
                size: 12,
                color: Color::ORANGE,
            }]
        );

        label.pointer_leave();
        assert_eq!(label.color(), Color::WHITE);
    }

    #[test]
    fn test_baseline_clamps_in_oversized_rect() {
        let mut label = Label::new("title", "Hi", LabelStyle::new(1.0));
        let mut surface = RecordingSurface::default();
        label.paint(&mut surface, PixelRect::new(0, 10, 100, i32::MAX));

        match surface.calls[0] {
            DrawCall::Text { baseline, size, .. } => {
                assert_eq!(size, i32::MAX);
                assert_eq!(baseline, i32::MAX);
            }
            ref other => panic!("unexpected call {:?}", other),
        }
    }

    #[test]
    fn test_label_ignores_keys() {
        let mut label = Label::new("title", "Hi", LabelStyle::default());
        label.key_typed(&KeyEvent::typed('x'));
        label.key_released(&KeyEvent::key(KeyCode::Backspace));
        assert_eq!(label.text(), "Hi");
    }

    #[test]
    fn test_invisible_or_empty_draws_nothing() {
        let mut input = InputLabel::new("user", LabelStyle::default());
        let mut surface = RecordingSurface::default();
        input.paint(&mut surface, PixelRect::new(0, 0, 10, 10));
        assert!(surface.calls.is_empty());

        input.set_contents("abc");
        input.set_visible(false);
        input.paint(&mut surface, PixelRect::new(0, 0, 10, 10));
        assert!(surface.calls.is_empty());
    }
}
