//! Data-space to pixel-space coordinate transform.
//!
//! A [`PlotTransform`] maps the bounding box of a sampled point set onto a
//! fixed-size surface with a uniform pixel margin. When a net (grid) has
//! been plotted, its transform can be locked and handed back in, so a
//! curve sampled over a different point set reuses the grid's vertical
//! origin and reserved height and lands on the same coordinate frame.

use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::geometry::{Bounds, PixelPoint, Point};

/// Spans below this are treated as degenerate and widened.
const MIN_SPAN: f64 = 1e-12;

/// Affine transform from data space to surface space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotTransform {
    /// Data units per horizontal pixel.
    pub scale_x: f64,
    /// Data units per vertical pixel.
    pub scale_y: f64,
    /// Data-space x mapped to the left edge of the drawable area.
    pub origin_x: f64,
    /// Data-space y mapped to the drawable origin.
    pub origin_y: f64,
    /// Vertical pixel span reserved to keep a locked grid's frame.
    pub reserved_height: f64,
    /// Surface height in pixels.
    height: f64,
    /// Pixel inset on all sides.
    margin: f64,
}

impl PlotTransform {
    /// Compute the transform for `points` on a `width` x `height` surface.
    ///
    /// Without a locked transform the point bounding box is inset by the
    /// configured margin on all sides. With `locked`, the vertical origin
    /// is taken from the lock and enough height is reserved that the
    /// locked grid's span keeps its pixel extent.
    ///
    /// A degenerate span (constant x or y over the point set) is widened
    /// to one data unit instead of producing a non-finite scale, so a
    /// constant formula still lands on well-defined pixels.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyData`] when `points` is empty and
    /// [`Error::InvalidDimensions`] when the surface cannot fit the margin
    /// twice over.
    pub fn compute(
        points: &[Point],
        width: u32,
        height: u32,
        locked: Option<&PlotTransform>,
        config: &PlotConfig,
    ) -> Result<Self> {
        let bounds = Bounds::of(points).ok_or(Error::EmptyData)?;

        let w = f64::from(width);
        let h = f64::from(height);
        let margin = f64::from(config.margin);
        if w <= 2.0 * margin || h <= 2.0 * margin {
            return Err(Error::InvalidDimensions { width, height });
        }

        let x_span = widen_degenerate(bounds.x_span());
        let y_span = widen_degenerate(bounds.y_span());

        let (reserved_height, ratio_offset, origin_y) = match locked {
            Some(lock) => (h - y_span / lock.scale_y, 0.0, lock.origin_y),
            None => (0.0, 2.0 * margin, bounds.min_y),
        };

        Ok(Self {
            scale_x: x_span / (w - 2.0 * margin),
            scale_y: y_span / (h - reserved_height - ratio_offset),
            origin_x: bounds.min_x,
            origin_y,
            reserved_height,
            height: h,
            margin,
        })
    }

    /// Translate a data-space point into surface space.
    ///
    /// With `invert_y` the math-up axis is flipped to pixel-down (used for
    /// curves and label placement); without it y grows downward with the
    /// data (used for net line endpoints).
    #[must_use]
    pub fn to_pixel(&self, point: Point, invert_y: bool) -> PixelPoint {
        let x = (point.x - self.origin_x) / self.scale_x + self.margin;
        let y = if invert_y {
            self.height - (point.y - self.origin_y) / self.scale_y - self.margin
        } else {
            (point.y - self.origin_y) / self.scale_y + self.margin
        };
        PixelPoint::new(x as f32, y as f32)
    }

    /// Pixel inset this transform was computed with.
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }
}

fn widen_degenerate(span: f64) -> f64 {
    if span.abs() < MIN_SPAN {
        1.0
    } else {
        span
    }
}
