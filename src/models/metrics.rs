//! Derived display metrics.

use serde::Serialize;

/// Physical and CSS measurements derived from the current simulator inputs.
///
/// A `DisplayMetrics` is a pure recomputation, not an entity: it has no
/// identity, is never persisted, and is rebuilt from scratch on every input
/// change. All fields stay full-precision; rounding happens only at the
/// display boundary via [`Self::rounded`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayMetrics {
    /// Resolved pixel density of the simulated device
    pub ppi: f64,
    /// Physical width of the simulated device in inches
    pub width_in: f64,
    /// Physical height of the simulated device in inches
    pub height_in: f64,
    /// CSS pixel width of the simulation box on the viewing display
    pub css_width_px: f64,
    /// CSS pixel height of the simulation box on the viewing display
    pub css_height_px: f64,
    /// Millimeters covered by one simulated device pixel
    pub mm_per_px: f64,
}

impl DisplayMetrics {
    /// Returns a copy with every field rounded for display.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            ppi: round2(self.ppi),
            width_in: round2(self.width_in),
            height_in: round2(self.height_in),
            css_width_px: round2(self.css_width_px),
            css_height_px: round2(self.css_height_px),
            mm_per_px: round2(self.mm_per_px),
        }
    }
}

/// Rounds to two decimals, half-up, with an epsilon nudge so values sitting
/// exactly on a .xx5 boundary after floating-point error round upward.
#[must_use]
pub fn round2(value: f64) -> f64 {
    ((value + f64::EPSILON) * 100.0).round() / 100.0
}
