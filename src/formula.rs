//! Formula capability and variable bindings.
//!
//! A [`Formula`] evaluates to a number given a [`Context`] of named
//! bindings. The engine never parses expressions itself; callers supply
//! anything implementing the trait (closures work out of the box).

use crate::color::Rgba;
use crate::config::PlotConfig;
use crate::error::{Error, Result};

/// Capability consumed by the sampler: evaluate to a number under the
/// given variable bindings.
pub trait Formula {
    /// Evaluate the formula against the current bindings.
    fn evaluate(&self, ctx: &Context) -> f64;
}

impl<F> Formula for F
where
    F: Fn(&Context) -> f64,
{
    fn evaluate(&self, ctx: &Context) -> f64 {
        self(ctx)
    }
}

/// A named numeric slot inside a [`Context`].
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// Variable identifier.
    pub name: String,
    /// Current value.
    pub value: f64,
}

/// Mutable table of variable bindings, owned by the caller and borrowed
/// by the engine.
///
/// The sampler drives exactly one binding at a time and always restores
/// its prior value before returning, so repeated calls on the same
/// context never observe a leaked mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    bindings: Vec<Binding>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a binding, replacing any existing one with the same name.
    pub fn bind(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.bindings.iter_mut().find(|b| b.name == name) {
            Some(binding) => binding.value = value,
            None => self.bindings.push(Binding { name, value }),
        }
    }

    /// Builder-style [`bind`](Self::bind).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.bind(name, value);
        self
    }

    /// Look up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.iter().find(|b| b.name == name).map(|b| b.value)
    }

    /// Overwrite the value bound to `name`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVariable`] if no such binding exists.
    pub fn set(&mut self, name: &str, value: f64) -> Result<f64> {
        let binding = self
            .bindings
            .iter_mut()
            .find(|b| b.name == name)
            .ok_or_else(|| Error::UnknownVariable(name.to_string()))?;
        let previous = binding.value;
        binding.value = value;
        Ok(previous)
    }

    /// All bindings, in insertion order.
    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }
}

/// The stepped interval a variable is swept over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    /// Lower bound (first sampled value).
    pub bottom: f64,
    /// Upper bound (always sampled, within the stepping tolerance).
    pub top: f64,
    /// Distance between consecutive samples.
    pub step: f64,
}

impl SampleRange {
    /// Create a range from its bounds and step.
    #[must_use]
    pub const fn new(bottom: f64, top: f64, step: f64) -> Self {
        Self { bottom, top, step }
    }

    /// Range span (`top - bottom`).
    #[must_use]
    pub fn span(&self) -> f64 {
        self.top - self.bottom
    }

    /// Check the range invariants against the configured capacity.
    ///
    /// Validation order: bounds first, then step, then capacity.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] when `bottom >= top`, [`Error::InvalidStep`]
    /// when the step is not a positive finite value below `top - bottom`,
    /// [`Error::CapacityExceeded`] when the stepped value count would
    /// exceed `config.net_capacity`.
    pub fn validate(&self, config: &PlotConfig) -> Result<()> {
        if self.bottom >= self.top {
            return Err(Error::InvalidRange { bottom: self.bottom, top: self.top });
        }

        // A non-positive or NaN step would never advance toward top; the
        // capacity check below cannot catch it (span / step <= 0).
        if !self.step.is_finite() || self.step <= 0.0 || self.step >= self.span() {
            return Err(Error::InvalidStep { step: self.step, span: self.span() });
        }

        let required = self.span() / self.step;
        if required > f64::from(config.net_capacity) {
            return Err(Error::CapacityExceeded {
                required,
                capacity: config.net_capacity,
            });
        }

        Ok(())
    }
}

/// A plottable variable: an identifier, the range it is swept over, and
/// the color its curve is stroked in.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Identifier looked up in the evaluation context.
    pub name: String,
    /// Sweep range.
    pub range: SampleRange,
    /// Curve stroke color.
    pub color: Rgba,
}

impl Variable {
    /// Create a variable with the default (blue) curve color.
    #[must_use]
    pub fn new(name: impl Into<String>, bottom: f64, top: f64, step: f64) -> Self {
        Self {
            name: name.into(),
            range: SampleRange::new(bottom, top, step),
            color: Rgba::BLUE,
        }
    }

    /// Set the curve color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }
}
