//! # Plotnet
//!
//! Formula-driven curve plotting with coordinate nets, rendered in pure Rust.
//!
//! Plotnet samples a formula over a variable's range, maps the samples into
//! surface space, and strokes the curve onto a drawing surface. A coordinate
//! net (grid) sized to the formula's extremes can be drawn first; its grid
//! transform is then locked so subsequent curves share the same scale.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plotnet::prelude::*;
//!
//! let surface = RasterSurface::new(400, 300)?;
//! let mut session = Session::new(surface);
//!
//! let mut ctx = Context::new().with("x", 0.0);
//! let square = |ctx: &Context| ctx.get("x").unwrap_or(0.0).powi(2);
//! let vars = [Variable::new("x", -5.0, 5.0, 0.5)];
//!
//! session.plot_net(&square, &mut ctx, &vars, &SampleRange::new(-5.0, 5.0, 0.5))?;
//! session.plot(&square, &mut ctx, &vars)?;
//! session.into_surface().write_png("square.png")?;
//! ```
//!
//! ## Outputs
//!
//! - **PNG**: [`surface::RasterSurface`] rasterizes with Wu anti-aliased
//!   strokes and encodes through the `png` crate.
//! - **SVG**: [`surface::SvgSurface`] records elements and serializes to an
//!   SVG document.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and hex parsing.
pub mod color;

/// Tunable plotting parameters.
pub mod config;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, bounds, net lines).
pub mod geometry;

/// Formulas, variable bindings, and sample ranges.
pub mod formula;

/// Formula sampling over a stepped range.
pub mod sample;

/// Data-space to surface-space mapping.
pub mod transform;

/// Coordinate net construction.
pub mod net;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Curve and net rendering plus rasterization primitives.
pub mod render;

/// Drawing surface abstraction and backends.
pub mod surface;

/// Output encoders (PNG).
pub mod output;

/// Stateful plotting sessions.
pub mod session;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for plotnet operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::PlotConfig;
    pub use crate::error::{Error, Result};
    pub use crate::formula::{Context, Formula, SampleRange, Variable};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Bounds, NetLine, PixelPoint, Point};
    pub use crate::session::Session;
    pub use crate::surface::{RasterSurface, Surface, SvgSurface};
    pub use crate::transform::PlotTransform;
}
