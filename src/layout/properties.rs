//! Normalized placement of one widget

use crate::types::PixelRect;

/// Position, size, layer and keyboard flag for one layout identifier
///
/// Positions and sizes are fractions of the panel size (0.0-1.0). Higher
/// layers are painted later, on top of lower ones.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutProperties {
    pos_x: f64,
    pos_y: f64,
    width: f64,
    height: f64,
    layer: i32,
    enterable: bool,
}

impl LayoutProperties {
    pub fn new(pos_x: f64, pos_y: f64, width: f64, height: f64, layer: i32, enterable: bool) -> Self {
        Self {
            pos_x,
            pos_y,
            width,
            height,
            layer,
            enterable,
        }
    }

    pub fn pos_x(&self) -> f64 {
        self.pos_x
    }

    pub fn pos_y(&self) -> f64 {
        self.pos_y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn layer(&self) -> i32 {
        self.layer
    }

    /// Whether Enter activates the widget while it is selected
    pub fn enterable(&self) -> bool {
        self.enterable
    }

    /// Map to pixels for a panel of the given size, truncating toward zero
    pub fn resolve(&self, panel_width: i32, panel_height: i32) -> PixelRect {
        PixelRect::new(
            (panel_width as f64 * self.pos_x) as i32,
            (panel_height as f64 * self.pos_y) as i32,
            (panel_width as f64 * self.width) as i32,
            (panel_height as f64 * self.height) as i32,
        )
    }
}
