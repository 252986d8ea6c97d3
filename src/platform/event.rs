//! Platform-neutral input events
//!
//! The host translates its native window messages into these types and feeds
//! them to [`RenderPanel::handle_event`](crate::panel::RenderPanel::handle_event).

/// Keys the panel and widgets act on (values match Win32 virtual key codes)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum KeyCode {
    Backspace = 0x08,
    Tab = 0x09,
    Enter = 0x0D,
    Space = 0x20,
    Delete = 0x2E,

    /// Any other key (letters, digits, punctuation, navigation)
    Unknown = 0,
}

/// A single keyboard event
///
/// Typed events carry the translated character in `ch`; pressed/released
/// events carry the key code and usually no character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub ch: Option<char>,
}

impl KeyEvent {
    /// A key-code event (pressed/released)
    pub fn key(code: KeyCode) -> Self {
        Self { code, ch: None }
    }

    /// A character event (typed)
    pub fn typed(ch: char) -> Self {
        let code = if ch == ' ' {
            KeyCode::Space
        } else {
            KeyCode::Unknown
        };
        Self { code, ch: Some(ch) }
    }
}

/// Host events the panel understands
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Pointer button pressed at panel coordinates
    PointerPress { x: i32, y: i32 },
    /// Pointer moved to panel coordinates
    PointerMove { x: i32, y: i32 },
    /// Character typed (after keyboard translation)
    KeyTyped(KeyEvent),
    /// Key pressed
    KeyPressed(KeyEvent),
    /// Key released
    KeyReleased(KeyEvent),
    /// Panel resized to a new pixel size
    Resize { width: i32, height: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes_match_virtual_keys() {
        assert_eq!(KeyCode::Tab as u32, 0x09);
        assert_eq!(KeyCode::Backspace as u32, 0x08);
        assert_eq!(KeyEvent::key(KeyCode::Enter).ch, None);
    }

    #[test]
    fn test_typed_space_maps_to_space_key() {
        assert_eq!(KeyEvent::typed(' ').code, KeyCode::Space);
        assert_eq!(KeyEvent::typed('a').ch, Some('a'));
    }
}
