//! Plotting session over a drawing surface.
//!
//! A [`Session`] owns a surface and carries the transform state between
//! drawing calls. Drawing a coordinate net locks the grid transform so
//! curves plotted afterwards land on the same scale, until the session
//! is cleared or rebound.

use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::formula::{Context, Formula, SampleRange, Variable};
use crate::geometry::Point;
use crate::net::{bounding_points, build_net};
use crate::render::{draw_curve, draw_net};
use crate::sample::sample;
use crate::surface::Surface;
use crate::transform::PlotTransform;

/// Stateful plotting session bound to a drawing surface.
#[derive(Debug)]
pub struct Session<S: Surface> {
    surface: S,
    config: PlotConfig,
    transform: Option<PlotTransform>,
    locked: Option<PlotTransform>,
}

impl<S: Surface> Session<S> {
    /// Bind a session to a surface with the default configuration.
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, PlotConfig::default())
    }

    /// Bind a session to a surface with an explicit configuration.
    pub fn with_config(surface: S, config: PlotConfig) -> Self {
        Self { surface, config, transform: None, locked: None }
    }

    /// Swap in a new surface, discarding all transform state.
    pub fn rebind(&mut self, surface: S) {
        self.surface = surface;
        self.transform = None;
        self.locked = None;
    }

    /// Borrow the bound surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the session, returning the surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// True once a net has been drawn and its grid transform retained.
    #[must_use]
    pub fn is_grid_locked(&self) -> bool {
        self.locked.is_some()
    }

    /// Transform used by the most recent drawing call, if any.
    #[must_use]
    pub fn current_transform(&self) -> Option<&PlotTransform> {
        self.transform.as_ref()
    }

    /// Sample `formula` over each variable's range and stroke the
    /// resulting curves.
    ///
    /// The sampled points of all variables are returned. With a locked
    /// grid in place the curve is fitted to the grid's vertical scale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] for more than one variable, a
    /// validation error if a range is malformed, or
    /// [`Error::UnknownVariable`] if a variable is not bound in `ctx`.
    /// Nothing is drawn when an error is returned.
    pub fn plot<F: Formula + ?Sized>(
        &mut self,
        formula: &F,
        ctx: &mut Context,
        variables: &[Variable],
    ) -> Result<Vec<Point>> {
        let Some(variable) = variables.first() else {
            return Err(Error::EmptyData);
        };
        if variables.len() > 1 {
            return Err(Error::Unsupported("multi-variable surface plotting"));
        }

        let points = sample(formula, ctx, variable, &self.config)?;
        let transform = PlotTransform::compute(
            &points,
            self.surface.width(),
            self.surface.height(),
            self.locked.as_ref(),
            &self.config,
        )?;

        draw_curve(&mut self.surface, &points, &transform, variable.color);
        self.transform = Some(transform);
        Ok(points)
    }

    /// Build and draw a coordinate net sized to the formula's extremes
    /// over `range`, then lock the grid transform for later curves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] when no variables are given, a
    /// validation error if `range` is malformed, or
    /// [`Error::UnknownVariable`] if a variable is not bound in `ctx`.
    /// Nothing is drawn when an error is returned.
    pub fn plot_net<F: Formula + ?Sized>(
        &mut self,
        formula: &F,
        ctx: &mut Context,
        variables: &[Variable],
        range: &SampleRange,
    ) -> Result<()> {
        if variables.is_empty() {
            return Err(Error::EmptyData);
        }
        range.validate(&self.config)?;

        let points = bounding_points(formula, ctx, variables, range)?;
        let lines = build_net(&points, &[*range], &self.config)?;
        let transform = PlotTransform::compute(
            &points,
            self.surface.width(),
            self.surface.height(),
            self.locked.as_ref(),
            &self.config,
        )?;

        draw_net(&mut self.surface, &lines, &transform);
        self.locked = Some(transform);
        self.transform = Some(transform);
        Ok(())
    }

    /// Erase the surface and drop all transform state.
    #[allow(clippy::cast_precision_loss)]
    pub fn clear(&mut self) {
        let (w, h) = (self.surface.width() as f32, self.surface.height() as f32);
        self.surface.clear_rect(0.0, 0.0, w, h);
        self.transform = None;
        self.locked = None;
    }
}
