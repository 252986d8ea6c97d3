//! Image widget - a bitmap stretched to its layout rectangle

use std::path::Path;

use crate::platform::{Bitmap, ImageLoader, Surface};
use crate::types::PixelRect;

use super::Widget;

/// Post-paint hook, run after the bitmap is drawn
pub type PaintHook = Box<dyn FnMut(&mut dyn Surface, PixelRect)>;

/// A widget that draws a fixed bitmap
///
/// An image without a bitmap (for example after a failed load) still takes
/// part in layout and hit-testing; it just draws nothing of its own.
pub struct Image {
    identifier: String,
    bitmap: Option<Bitmap>,
    visible: bool,
    after_paint: Option<PaintHook>,
}

impl Image {
    pub fn new(identifier: impl Into<String>, bitmap: Bitmap) -> Self {
        Self {
            identifier: identifier.into(),
            bitmap: Some(bitmap),
            visible: true,
            after_paint: None,
        }
    }

    /// An image with no backing bitmap yet
    pub fn empty(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            bitmap: None,
            visible: true,
            after_paint: None,
        }
    }

    /// Load the bitmap through the host's loader
    ///
    /// Load failures are logged and leave the image empty.
    pub fn load(identifier: impl Into<String>, path: &Path, loader: &dyn ImageLoader) -> Self {
        let mut image = Self::empty(identifier);
        match loader.load(path) {
            Ok(bitmap) => image.bitmap = Some(bitmap),
            Err(e) => {
                crate::log!(
                    "Image '{}' failed to load {:?}: {}",
                    image.identifier,
                    path,
                    e
                );
            }
        }
        image
    }

    /// Run `hook` after every paint, on top of the bitmap
    pub fn with_after_paint(
        mut self,
        hook: impl FnMut(&mut dyn Surface, PixelRect) + 'static,
    ) -> Self {
        self.after_paint = Some(Box::new(hook));
        self
    }

    pub fn bitmap(&self) -> Option<&Bitmap> {
        self.bitmap.as_ref()
    }

    pub fn set_bitmap(&mut self, bitmap: Bitmap) {
        self.bitmap = Some(bitmap);
    }

    /// Paint the bitmap, then `overlay`, then the user hook
    pub(crate) fn paint_with(
        &mut self,
        surface: &mut dyn Surface,
        rect: PixelRect,
        overlay: impl FnOnce(&mut dyn Surface, PixelRect),
    ) {
        if !self.visible {
            return;
        }
        if let Some(ref bitmap) = self.bitmap {
            surface.draw_bitmap(bitmap, rect);
        }
        overlay(surface, rect);
        if let Some(hook) = self.after_paint.as_mut() {
            hook(surface, rect);
        }
    }
}

impl Widget for Image {
    fn paint(&mut self, surface: &mut dyn Surface, rect: PixelRect) {
        self.paint_with(surface, rect, |_, _| {});
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::rc::Rc;

    use super::*;
    use crate::platform::ImageError;
    use crate::testing::{DrawCall, RecordingSurface};
    use crate::types::Color;

    struct FailingLoader;

    impl ImageLoader for FailingLoader {
        fn load(&self, path: &Path) -> Result<Bitmap, ImageError> {
            Err(ImageError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            })
        }
    }

    struct SolidLoader;

    impl ImageLoader for SolidLoader {
        fn load(&self, _path: &Path) -> Result<Bitmap, ImageError> {
            Ok(Bitmap::solid(4, 4, Color::WHITE))
        }
    }

    #[test]
    fn test_paint_stretches_bitmap() {
        let mut image = Image::new("logo", Bitmap::solid(2, 2, Color::BLACK));
        let mut surface = RecordingSurface::default();
        let rect = PixelRect::new(5, 5, 100, 50);

        image.paint(&mut surface, rect);

        assert_eq!(surface.calls, vec![DrawCall::Bitmap { rect, width: 2, height: 2 }]);
    }

    #[test]
    fn test_invisible_paints_nothing() {
        let hook_runs = Rc::new(Cell::new(0));
        let counter = hook_runs.clone();
        let mut image = Image::new("logo", Bitmap::solid(1, 1, Color::BLACK))
            .with_after_paint(move |_, _| counter.set(counter.get() + 1));
        image.set_visible(false);

        let mut surface = RecordingSurface::default();
        image.paint(&mut surface, PixelRect::new(0, 0, 10, 10));

        assert!(surface.calls.is_empty());
        assert_eq!(hook_runs.get(), 0);
    }

    #[test]
    fn test_after_paint_runs_on_top() {
        let mut image = Image::new("tile", Bitmap::solid(1, 1, Color::BLACK))
            .with_after_paint(|surface, rect| surface.fill_rect(rect, Color::ORANGE));
        let mut surface = RecordingSurface::default();
        let rect = PixelRect::new(0, 0, 10, 10);

        image.paint(&mut surface, rect);

        assert_eq!(surface.calls.len(), 2);
        assert_eq!(surface.calls[1], DrawCall::Fill { rect, color: Color::ORANGE });
    }

    #[test]
    fn test_failed_load_degrades_to_empty() {
        let image = Image::load("logo", &PathBuf::from("missing.png"), &FailingLoader);
        assert!(image.bitmap().is_none());
        assert_eq!(image.identifier(), "logo");

        let mut image = image;
        let mut surface = RecordingSurface::default();
        image.paint(&mut surface, PixelRect::new(0, 0, 10, 10));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_load_success() {
        let image = Image::load("logo", &PathBuf::from("logo.png"), &SolidLoader);
        assert_eq!(image.bitmap().map(|b| b.width()), Some(4));
    }
}
