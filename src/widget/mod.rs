//! Widget system
//!
//! Widgets are created by the host, shared with a
//! [`RenderPanel`](crate::panel::RenderPanel) through [`SharedWidget`]
//! handles, and placed by the panel's layout. Every widget is painted into the
//! pixel rectangle the layout resolves for its identifier.

pub mod image;
pub mod image_button;
pub mod label;

use std::cell::RefCell;
use std::rc::Rc;

use crate::platform::{KeyEvent, Surface};
use crate::types::PixelRect;

pub use image::{Image, PaintHook};
pub use image_button::{HoverPhase, ImageButton, ShimmerStyle};
pub use label::{InputLabel, Label, LabelStyle, MASK_CHAR};

/// A widget handle shared between the host and the panel
pub type SharedWidget = Rc<RefCell<dyn Widget>>;

/// Wrap a widget for registration while keeping a typed handle
///
/// ```ignore
/// let input = widget::shared(InputLabel::new("username", LabelStyle::new(0.8)));
/// panel.register(input.clone());
/// assert_eq!(input.borrow().contents(), "");
/// ```
pub fn shared<W: Widget + 'static>(widget: W) -> Rc<RefCell<W>> {
    Rc::new(RefCell::new(widget))
}

/// Widget trait for panel-managed UI components
///
/// Pointer coordinates passed to widgets are local to the widget's rectangle.
/// Keyboard callbacks are only invoked on the panel's selected widget.
pub trait Widget {
    /// Draw within `rect`, doing nothing while invisible
    fn paint(&mut self, surface: &mut dyn Surface, rect: PixelRect);

    /// Identifier matched against layout entries
    fn identifier(&self) -> &str;

    fn visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// The pointer is over this widget (topmost hit)
    fn pointer_enter(&mut self, _x: i32, _y: i32) {}

    /// The pointer is somewhere else
    fn pointer_leave(&mut self) {}

    /// A pointer press landed on this widget
    fn pointer_click(&mut self, _x: i32, _y: i32) {}

    /// The widget wasn't rendered this pass; drop transient state
    fn off_screen(&mut self) {}

    fn key_typed(&mut self, _event: &KeyEvent) {}

    fn key_pressed(&mut self, _event: &KeyEvent) {}

    fn key_released(&mut self, _event: &KeyEvent) {}

    /// Enter was pressed while this widget was selected and its layout
    /// entry is enterable
    fn activate(&mut self) {}
}
