//! Drawing surface capability.
//!
//! The engine draws through the [`Surface`] trait: a pixel-dimensioned
//! target accepting path, stroke, text and clear primitives. Two
//! implementations ship with the crate: a raster framebuffer surface and
//! an SVG document recorder.

mod raster;
mod svg;

pub use raster::RasterSurface;
pub use svg::{SvgElement, SvgSurface};

use crate::color::Rgba;
use crate::geometry::PixelPoint;

/// How stroked segments are joined at path vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Sharp corner.
    #[default]
    Miter,
    /// Rounded corner (used for curves).
    Round,
}

/// Stroke styling for a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Rgba,
    /// Join behavior at vertices.
    pub join: LineJoin,
}

/// Text styling for labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Fill color.
    pub color: Rgba,
    /// Glyph height in pixels.
    pub size: f32,
}

/// One recorded path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    /// Start a new subpath at the point.
    MoveTo(PixelPoint),
    /// Extend the current subpath to the point.
    LineTo(PixelPoint),
}

/// A 2D drawing target with canvas-like path semantics: commands
/// accumulate from `begin_path` until the next `begin_path`, and `stroke`
/// renders everything accumulated so far.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Discard the accumulated path.
    fn begin_path(&mut self);

    /// Start a new subpath.
    fn move_to(&mut self, p: PixelPoint);

    /// Extend the current subpath.
    fn line_to(&mut self, p: PixelPoint);

    /// Render the accumulated path.
    fn stroke(&mut self, style: &StrokeStyle);

    /// Render `text` with its baseline at `p`.
    fn fill_text(&mut self, text: &str, p: PixelPoint, style: &TextStyle);

    /// Clear a rectangular region back to the background.
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}
