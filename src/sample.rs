//! Formula sampling over a stepped variable range.
//!
//! Walks a variable's range and evaluates the formula at each stepped
//! value, producing ordered data-space points. Stepped values are derived
//! from an index (`bottom + index * step`) rather than repeated addition,
//! so float drift never compounds; the top of the range is still included
//! under the configured tolerance.

use crate::config::PlotConfig;
use crate::error::Result;
use crate::formula::{Context, Formula, Variable};
use crate::geometry::Point;

/// Iterator over the stepped values of a range, top-inclusive.
///
/// Yields `bottom`, `bottom + step`, ... and includes the final value when
/// it lands on or within `epsilon` of `top`.
#[derive(Debug, Clone)]
pub struct StepValues {
    bottom: f64,
    top: f64,
    step: f64,
    epsilon: f64,
    index: u64,
}

impl StepValues {
    /// Step over `[bottom, top]` by `step` with the given top tolerance.
    #[must_use]
    pub fn new(bottom: f64, top: f64, step: f64, epsilon: f64) -> Self {
        Self { bottom, top, step, epsilon, index: 0 }
    }
}

impl Iterator for StepValues {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = self.step.mul_add(self.index as f64, self.bottom);
        if value <= self.top || (value - self.top).abs() <= self.epsilon {
            self.index += 1;
            Some(value)
        } else {
            None
        }
    }
}

/// Sample `formula` over `variable`'s range.
///
/// Returns one point per stepped value, ascending in x. The variable's
/// binding in `ctx` is driven through the range and restored to its prior
/// value before returning; no other binding is touched. Validation runs
/// before the first mutation, so a failed call leaves `ctx` untouched.
///
/// # Errors
///
/// Propagates the range validation errors ([`crate::Error::InvalidRange`],
/// [`crate::Error::InvalidStep`], [`crate::Error::CapacityExceeded`]) and
/// [`crate::Error::UnknownVariable`] when `ctx` has no slot for the
/// variable.
pub fn sample<F: Formula + ?Sized>(
    formula: &F,
    ctx: &mut Context,
    variable: &Variable,
    config: &PlotConfig,
) -> Result<Vec<Point>> {
    let range = &variable.range;
    range.validate(config)?;

    let original = ctx.set(&variable.name, range.bottom)?;

    let mut points = Vec::with_capacity(config.net_capacity as usize + 1);
    for value in StepValues::new(range.bottom, range.top, range.step, config.epsilon) {
        ctx.set(&variable.name, value)?;
        points.push(Point::new(value, formula.evaluate(ctx)));
    }

    ctx.set(&variable.name, original)?;
    Ok(points)
}
