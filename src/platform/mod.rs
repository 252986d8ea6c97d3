//! Host abstraction layer
//!
//! The panel never talks to a window system directly. A host supplies a
//! [`Surface`] to draw on, an optional [`ImageLoader`] to decode bitmaps, and
//! forwards input as [`Event`]s.

pub mod event;

use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Color, PixelRect};

pub use event::{Event, KeyCode, KeyEvent};

/// Rendering quality hint passed through to the surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderQuality {
    Low,
    #[default]
    Medium,
    High,
}

/// Image interpolation used when a bitmap is stretched
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interpolation {
    NearestNeighbor,
    Bilinear,
    Bicubic,
}

/// Concrete drawing options a quality level stands for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderHints {
    pub antialias: bool,
    pub text_antialias: bool,
    pub interpolation: Interpolation,
    pub dithering: bool,
    pub fractional_metrics: bool,
}

impl RenderQuality {
    /// The drawing options a surface should apply for this quality level
    pub fn hints(self) -> RenderHints {
        match self {
            RenderQuality::Low => RenderHints {
                antialias: false,
                text_antialias: false,
                interpolation: Interpolation::NearestNeighbor,
                dithering: false,
                fractional_metrics: false,
            },
            RenderQuality::Medium => RenderHints {
                antialias: false,
                text_antialias: true,
                interpolation: Interpolation::Bilinear,
                dithering: false,
                fractional_metrics: true,
            },
            RenderQuality::High => RenderHints {
                antialias: true,
                text_antialias: true,
                interpolation: Interpolation::Bicubic,
                dithering: true,
                fractional_metrics: true,
            },
        }
    }
}

/// Error types for bitmap construction and loading
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("failed to read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image: {0}")]
    Decode(String),
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    Dimensions { expected: usize, actual: usize },
}

/// Decoded RGBA8 pixels, cheap to clone
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Rc<[u8]>,
}

impl Bitmap {
    /// Wrap an RGBA8 buffer of exactly `width * height * 4` bytes
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ImageError::Dimensions {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: pixels.into(),
        })
    }

    /// A bitmap filled with one color
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        let argb = color.to_u32();
        let rgba = [
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        ];
        let pixels: Vec<u8> = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            pixels: pixels.into(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Decodes image files into bitmaps (provided by the host)
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<Bitmap, ImageError>;
}

/// 2D drawing target provided by the host
pub trait Surface {
    /// Apply a rendering quality hint for the rest of the paint pass
    fn set_quality(&mut self, quality: RenderQuality);

    /// Blit a bitmap, stretched to fill `rect`
    fn draw_bitmap(&mut self, bitmap: &Bitmap, rect: PixelRect);

    /// Draw a string with its baseline starting at (`x`, `baseline`)
    fn draw_text(&mut self, text: &str, x: i32, baseline: i32, font_size: i32, color: Color);

    /// Fill a rectangle with a (possibly translucent) color
    fn fill_rect(&mut self, rect: PixelRect, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_rejects_wrong_length() {
        let err = Bitmap::new(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            ImageError::Dimensions {
                expected: 16,
                actual: 15
            }
        ));
        assert!(Bitmap::new(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn test_solid_bitmap_layout() {
        let bitmap = Bitmap::solid(2, 1, Color::rgb(255, 0, 0));
        assert_eq!(bitmap.pixels(), &[255, 0, 0, 255, 255, 0, 0, 255]);
    }

    #[test]
    fn test_quality_hints() {
        assert!(!RenderQuality::Low.hints().text_antialias);
        assert_eq!(
            RenderQuality::Medium.hints().interpolation,
            Interpolation::Bilinear
        );
        assert!(RenderQuality::High.hints().antialias);
        assert_eq!(RenderQuality::default(), RenderQuality::Medium);
    }
}
