//! Image button - an image with a hover shimmer

use std::path::Path;
use std::time::{Duration, Instant};

use crate::animation::{Easing, Tween};
use crate::platform::{Bitmap, ImageLoader, Surface};
use crate::types::{Color, PixelRect};

use super::{Image, Widget};

/// Hover animation state
#[derive(Clone, Debug, PartialEq)]
pub enum HoverPhase {
    /// No shimmer; the next hover starts one
    Idle,
    /// Shimmer started when the pointer arrived
    Running(Tween),
}

impl HoverPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, HoverPhase::Running(_))
    }
}

/// Look of the shimmer band
#[derive(Clone, Debug, PartialEq)]
pub struct ShimmerStyle {
    pub duration: Duration,
    pub easing: Easing,
    pub color: Color,
    /// Band width as a fraction of the button width
    pub band_fraction: f64,
}

impl Default for ShimmerStyle {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(600),
            easing: Easing::EASE_OUT_QUART,
            color: Color::rgba(255, 255, 255, 96),
            band_fraction: 0.25,
        }
    }
}

impl ShimmerStyle {
    /// The band rectangle at `progress` (0.0-1.0) across `rect`
    ///
    /// The band starts flush with the left edge and ends flush with the right.
    pub fn band(&self, rect: PixelRect, progress: f32) -> Option<PixelRect> {
        if rect.width <= 0 || rect.height <= 0 {
            return None;
        }
        let band = ((rect.width as f64 * self.band_fraction) as i32).clamp(1, rect.width);
        let travel = rect.width - band;
        let left = rect
            .x
            .saturating_add((travel as f32 * progress.clamp(0.0, 1.0)) as i32);
        Some(PixelRect::new(left, rect.y, band, rect.height))
    }
}

/// A button image that shimmers once each time the pointer enters it
pub struct ImageButton {
    image: Image,
    shimmer: ShimmerStyle,
    phase: HoverPhase,
    hovered: bool,
}

impl ImageButton {
    pub fn new(identifier: impl Into<String>, bitmap: Bitmap) -> Self {
        Self::from_image(Image::new(identifier, bitmap))
    }

    /// Load the bitmap through the host's loader; failures leave it empty
    pub fn load(identifier: impl Into<String>, path: &Path, loader: &dyn ImageLoader) -> Self {
        Self::from_image(Image::load(identifier, path, loader))
    }

    pub fn from_image(image: Image) -> Self {
        Self {
            image,
            shimmer: ShimmerStyle::default(),
            phase: HoverPhase::Idle,
            hovered: false,
        }
    }

    pub fn with_shimmer(mut self, shimmer: ShimmerStyle) -> Self {
        self.shimmer = shimmer;
        self
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut Image {
        &mut self.image
    }

    pub fn hover_phase(&self) -> &HoverPhase {
        &self.phase
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    fn reset_hover(&mut self) {
        self.phase = HoverPhase::Idle;
        self.hovered = false;
    }
}

impl Widget for ImageButton {
    fn paint(&mut self, surface: &mut dyn Surface, rect: PixelRect) {
        let phase = &self.phase;
        let shimmer = &self.shimmer;
        self.image.paint_with(surface, rect, |surface, rect| {
            let HoverPhase::Running(tween) = phase else {
                return;
            };
            let now = Instant::now();
            if tween.is_complete_at(now) {
                return;
            }
            if let Some(band) = shimmer.band(rect, tween.value_at(now)) {
                surface.fill_rect(band, shimmer.color);
            }
        });
    }

    fn identifier(&self) -> &str {
        self.image.identifier()
    }

    fn visible(&self) -> bool {
        self.image.visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.image.set_visible(visible);
    }

    fn pointer_enter(&mut self, _x: i32, _y: i32) {
        // Only the not-hovered -> hovered transition starts a shimmer
        if !self.hovered && !self.phase.is_running() {
            self.phase = HoverPhase::Running(Tween::sweep(
                self.shimmer.duration,
                self.shimmer.easing,
            ));
        }
        self.hovered = true;
    }

    fn pointer_leave(&mut self) {
        self.reset_hover();
    }

    fn off_screen(&mut self) {
        self.reset_hover();
    }
}
