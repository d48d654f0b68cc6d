//! Framebuffer-backed raster surface.

use std::path::Path;

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::PixelPoint;
use crate::output::PngEncoder;
use crate::render::{draw_line_aa, draw_text};
use crate::surface::{PathCmd, StrokeStyle, Surface, TextStyle};

/// Raster drawing surface over an RGBA [`Framebuffer`].
///
/// Paths are stroked with anti-aliased lines; labels are rendered with
/// the built-in bitmap glyphs. `clear_rect` restores the background
/// color.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    fb: Framebuffer,
    background: Rgba,
    path: Vec<PathCmd>,
}

impl RasterSurface {
    /// Create a white-background surface.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_background(width, height, Rgba::WHITE)
    }

    /// Create a surface with an explicit background color.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn with_background(width: u32, height: u32, background: Rgba) -> Result<Self> {
        let mut fb = Framebuffer::new(width, height)?;
        fb.clear(background);
        Ok(Self { fb, background, path: Vec::new() })
    }

    /// The underlying framebuffer.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Consume the surface, yielding the framebuffer.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.fb
    }

    /// Write the surface contents to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PngEncoder::write_to_file(&self.fb, path)
    }

    /// Encode the surface contents as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        PngEncoder::to_bytes(&self.fb)
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.fb.width()
    }

    fn height(&self) -> u32 {
        self.fb.height()
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: PixelPoint) {
        self.path.push(PathCmd::MoveTo(p));
    }

    fn line_to(&mut self, p: PixelPoint) {
        self.path.push(PathCmd::LineTo(p));
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        let mut pen: Option<PixelPoint> = None;
        for cmd in &self.path {
            match *cmd {
                PathCmd::MoveTo(p) => pen = Some(p),
                PathCmd::LineTo(p) => {
                    if let Some(prev) = pen {
                        draw_line_aa(&mut self.fb, prev.x, prev.y, p.x, p.y, style.color);
                    }
                    pen = Some(p);
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, p: PixelPoint, style: &TextStyle) {
        draw_text(&mut self.fb, text, p.x, p.y, style.size, style.color);
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        // The far edge comes from the un-clamped origin, so a negative
        // x/y shrinks the cleared region instead of shifting it.
        let x0 = x.max(0.0).round() as u32;
        let y0 = y.max(0.0).round() as u32;
        let x1 = (x + w).max(0.0).round() as u32;
        let y1 = (y + h).max(0.0).round() as u32;
        self.fb.fill_rect(
            x0,
            y0,
            x1.saturating_sub(x0),
            y1.saturating_sub(y0),
            self.background,
        );
    }
}
