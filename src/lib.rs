//! Flexlayout - layered, percentage-based widget layout
//!
//! A [`RenderPanel`](panel::RenderPanel) paints a set of shared widgets
//! (images, image buttons, labels and input labels) according to a
//! [`LayoutDescription`](layout::LayoutDescription), and routes pointer and
//! keyboard input to them. Drawing and image decoding are left to the host
//! through the traits in [`platform`].

// Include the log module first so the log! macro works everywhere
#[macro_use]
pub mod log;

pub mod animation;
pub mod config;
pub mod layout;
pub mod panel;
pub mod platform;
pub mod types;
pub mod widget;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ConfigError, PanelConfig};
pub use layout::{LayoutDescription, LayoutError, LayoutProperties};
pub use panel::{RenderPanel, WidgetHandle};
pub use platform::{Bitmap, Event, ImageLoader, KeyCode, KeyEvent, RenderQuality, Surface};
pub use types::{Color, PixelRect};
pub use widget::{Image, ImageButton, InputLabel, Label, LabelStyle, SharedWidget, Widget};
