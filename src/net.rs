//! Net (grid) line derivation.
//!
//! Builds the reference lines a viewer reads coordinates from: one
//! vertical line per stepped variable value, spanning the observed
//! y-range, and horizontal lines at "round" y-values, spanning the
//! variable range. Round values are integer multiples of a power of ten
//! chosen so the line count stays within the configured capacity.

use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::formula::{Context, Formula, SampleRange, Variable};
use crate::geometry::{Bounds, NetLine, Point};
use crate::sample::StepValues;

/// Round y-values covering `[min_y, max_y]`.
///
/// Starting from a denominator of 1, the denominator is multiplied by 10
/// until the span divided by it fits the capacity; the result is every
/// integer multiple of the denominator from `floor(min_y)` to
/// `ceil(max_y)` in denominator units.
#[must_use]
pub fn round_values(min_y: f64, max_y: f64, capacity: u32) -> Vec<f64> {
    let mut denominator = 1.0;
    while (max_y - min_y) / denominator > f64::from(capacity) {
        denominator *= 10.0;
    }

    // Count-based iteration: at large magnitudes incrementing the
    // multiple itself by 1.0 stops advancing, so the index is driven by
    // an integer instead.
    let first = (min_y / denominator).floor();
    let last = (max_y / denominator).ceil();
    let count = (last - first) as u64;

    let mut values = Vec::with_capacity(count as usize + 1);
    for index in 0..=count {
        values.push((index as f64 + first) * denominator);
    }
    values
}

/// Build the net lines for `points` over the given stepping ranges.
///
/// Vertical lines follow the same stepping and top-inclusion rule as the
/// sampler; horizontal lines sit at [`round_values`] and span the hull of
/// the ranges. Validation runs before any line is produced.
///
/// # Errors
///
/// [`Error::EmptyData`] when `points` or `ranges` is empty, plus the
/// range validation errors.
pub fn build_net(
    points: &[Point],
    ranges: &[SampleRange],
    config: &PlotConfig,
) -> Result<Vec<NetLine>> {
    let bounds = Bounds::of(points).ok_or(Error::EmptyData)?;
    if ranges.is_empty() {
        return Err(Error::EmptyData);
    }
    for range in ranges {
        range.validate(config)?;
    }

    let mut lines = Vec::new();

    for range in ranges {
        for value in StepValues::new(range.bottom, range.top, range.step, config.epsilon) {
            lines.push(NetLine::new(
                Point::new(value, bounds.min_y),
                Point::new(value, bounds.max_y),
            ));
        }
    }

    let hull_bottom = ranges.iter().map(|r| r.bottom).fold(f64::INFINITY, f64::min);
    let hull_top = ranges.iter().map(|r| r.top).fold(f64::NEG_INFINITY, f64::max);
    for value in round_values(bounds.min_y, bounds.max_y, config.net_capacity) {
        lines.push(NetLine::new(
            Point::new(hull_bottom, value),
            Point::new(hull_top, value),
        ));
    }

    Ok(lines)
}

/// Bounding point set for a net: the formula evaluated at the range's top
/// and bottom for each variable.
///
/// Establishes the net's bounding box with two evaluations per variable
/// instead of a full sweep. Each driven binding is restored before the
/// next variable is touched.
///
/// # Errors
///
/// [`Error::UnknownVariable`] when a variable has no slot in `ctx`.
pub fn bounding_points<F: Formula + ?Sized>(
    formula: &F,
    ctx: &mut Context,
    variables: &[Variable],
    range: &SampleRange,
) -> Result<Vec<Point>> {
    let mut points = Vec::with_capacity(variables.len() * 2);
    for variable in variables {
        let original = ctx.set(&variable.name, range.top)?;
        points.push(Point::new(range.top, formula.evaluate(ctx)));

        ctx.set(&variable.name, range.bottom)?;
        points.push(Point::new(range.bottom, formula.evaluate(ctx)));

        ctx.set(&variable.name, original)?;
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cfg() -> PlotConfig {
        PlotConfig::default()
    }

    #[test]
    fn test_round_values_unit_denominator() {
        let values = round_values(0.3, 4.7, 40);
        assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_round_values_scale_up() {
        // Span 1000 forces the denominator to 100.
        let values = round_values(0.0, 1000.0, 40);
        assert_eq!(values.first(), Some(&0.0));
        assert_eq!(values.last(), Some(&1000.0));
        assert_eq!(values.len(), 11);
    }

    #[test]
    fn test_round_values_negative_range() {
        let values = round_values(-2.5, 2.5, 40);
        assert_eq!(values, vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_round_values_extreme_magnitude_bounded() {
        // Above 2^53 a value plus 1.0 equals itself; the count-driven
        // loop must still terminate with a capacity-bounded result.
        let values = round_values(1e17, 1e17 + 2.0, 40);
        assert!(!values.is_empty());
        assert!(values.len() <= 42);
        assert!(values.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_build_net_line_families() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        let range = SampleRange::new(0.0, 10.0, 1.0);
        let lines = build_net(&points, &[range], &cfg()).unwrap();

        let vertical: Vec<_> = lines.iter().filter(|l| l.is_vertical()).collect();
        let horizontal: Vec<_> = lines.iter().filter(|l| l.is_horizontal()).collect();

        // One vertical per stepped value, spanning the observed y-range.
        assert_eq!(vertical.len(), 11);
        for line in &vertical {
            assert_eq!(line.from.y, 0.0);
            assert_eq!(line.to.y, 10.0);
        }

        // Horizontal lines at integers 0..=10, spanning the x-range.
        assert_eq!(horizontal.len(), 11);
        for line in &horizontal {
            assert_eq!(line.from.x, 0.0);
            assert_eq!(line.to.x, 10.0);
        }
    }

    #[test]
    fn test_build_net_validates_before_producing() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        let reversed = SampleRange::new(10.0, 0.0, 1.0);
        assert!(matches!(
            build_net(&points, &[reversed], &cfg()),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_build_net_empty_inputs() {
        let range = SampleRange::new(0.0, 10.0, 1.0);
        assert!(matches!(build_net(&[], &[range], &cfg()), Err(Error::EmptyData)));

        let points = [Point::new(0.0, 0.0)];
        assert!(matches!(build_net(&points, &[], &cfg()), Err(Error::EmptyData)));
    }

    #[test]
    fn test_bounding_points_two_per_variable() {
        let formula = |ctx: &Context| ctx.get("x").unwrap_or(f64::NAN) * 2.0;
        let mut ctx = Context::new().with("x", 5.0);
        let range = SampleRange::new(1.0, 3.0, 1.0);
        let vars = [Variable::new("x", 1.0, 3.0, 1.0)];

        let points = bounding_points(&formula, &mut ctx, &vars, &range).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Point::new(3.0, 6.0));
        assert_eq!(points[1], Point::new(1.0, 2.0));
        assert_eq!(ctx.get("x"), Some(5.0));
    }

    proptest! {
        #[test]
        fn prop_horizontal_count_bounded(
            min_y in -1e12f64..1e12,
            span_exp in 0i32..12,
        ) {
            // Spans sweeping many orders of magnitude never blow up the
            // line count; the denominator sweep keeps it near capacity
            // (the flooring/ceiling endpoints can add two).
            let span = 10f64.powi(span_exp);
            let values = round_values(min_y, min_y + span, 40);
            prop_assert!(values.len() <= 42);
            prop_assert!(values.len() >= 2);
        }
    }
}
