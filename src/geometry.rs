//! Geometric primitives shared by the sampling and rendering layers.
//!
//! Data-space coordinates are `f64` to match formula evaluation; surface
//! coordinates are `f32`, origin top-left, y increasing downward.

/// A 2D point in data space (the plane the formula's variable and result
/// live in).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate (variable value).
    pub x: f64,
    /// Y coordinate (formula result).
    pub y: f64,
}

impl Point {
    /// Create a new data-space point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 2D point in surface space (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    /// Horizontal pixel coordinate.
    pub x: f32,
    /// Vertical pixel coordinate, increasing downward.
    pub y: f32,
}

impl PixelPoint {
    /// Create a new surface-space point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a set of data-space points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum x over the point set.
    pub min_x: f64,
    /// Maximum x over the point set.
    pub max_x: f64,
    /// Minimum y over the point set.
    pub min_y: f64,
    /// Maximum y over the point set.
    pub max_y: f64,
}

impl Bounds {
    /// Compute the bounding box of `points`, or `None` when empty.
    #[must_use]
    pub fn of(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut bounds = Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for p in points {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    /// Horizontal span of the box.
    #[must_use]
    pub fn x_span(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical span of the box.
    #[must_use]
    pub fn y_span(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// A single net (grid) line in data space.
///
/// Either vertical (constant x, marking one sampled variable value) or
/// horizontal (constant y, marking one "round" result value).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetLine {
    /// Start of the line.
    pub from: Point,
    /// End of the line.
    pub to: Point,
}

impl NetLine {
    /// Create a net line between two data-space points.
    #[must_use]
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// True when the line marks a sampled x-value.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }

    /// True when the line marks a round y-value.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_of_points() {
        let points = [Point::new(-1.0, 2.0), Point::new(3.0, -4.0), Point::new(0.0, 0.0)];
        let b = Bounds::of(&points).unwrap();
        assert_eq!(b.min_x, -1.0);
        assert_eq!(b.max_x, 3.0);
        assert_eq!(b.min_y, -4.0);
        assert_eq!(b.max_y, 2.0);
        assert_eq!(b.x_span(), 4.0);
        assert_eq!(b.y_span(), 6.0);
    }

    #[test]
    fn test_bounds_empty() {
        assert!(Bounds::of(&[]).is_none());
    }

    #[test]
    fn test_net_line_orientation() {
        let vertical = NetLine::new(Point::new(1.0, 0.0), Point::new(1.0, 5.0));
        assert!(vertical.is_vertical());
        assert!(!vertical.is_horizontal());

        let horizontal = NetLine::new(Point::new(0.0, 2.0), Point::new(5.0, 2.0));
        assert!(horizontal.is_horizontal());
        assert!(!horizontal.is_vertical());
    }
}
