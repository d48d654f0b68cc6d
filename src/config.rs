//! Engine configuration.

/// Tunable engine constants.
///
/// Defaults: a 12 px inset on all sides, at most 40 samples/net lines per
/// range, and a 1e-14 tolerance for including the top of a stepped range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotConfig {
    /// Pixel inset reserved on all sides of the drawable area.
    pub margin: f32,
    /// Maximum number of samples (and net lines) per range.
    pub net_capacity: u32,
    /// Tolerance for including a range's top value despite float drift.
    pub epsilon: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self { margin: 12.0, net_capacity: 40, epsilon: 1e-14 }
    }
}
