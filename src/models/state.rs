//! Current simulator input state.

use crate::constants::DEFAULT_CALIBRATION_DPI;
use crate::models::DeviceProfile;
use serde::{Deserialize, Serialize};

/// The current set of simulator inputs.
///
/// This is the single explicit application-state struct that every
/// computation reads from: manual field edits and preset selection both land
/// here, and the calculator derives metrics from it. The calculator itself
/// assumes positive inputs, so all clamping of unusable values happens in
/// [`Self::sanitized`] before anything downstream runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulatorInputs {
    /// Horizontal resolution of the simulated device in device pixels
    pub width_px: f64,
    /// Vertical resolution of the simulated device in device pixels
    pub height_px: f64,
    /// Physical diagonal in inches, if supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagonal_in: Option<f64>,
    /// Manually entered density, overrides the diagonal when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_ppi: Option<f64>,
    /// Assumed density of the display running the simulation
    pub calibration_dpi: f64,
    /// Whether the preview should be scaled down to fit the viewport
    #[serde(default)]
    pub fit_to_viewport: bool,
}

impl Default for SimulatorInputs {
    fn default() -> Self {
        Self {
            width_px: 1080.0,
            height_px: 1920.0,
            diagonal_in: None,
            manual_ppi: None,
            calibration_dpi: DEFAULT_CALIBRATION_DPI,
            fit_to_viewport: true,
        }
    }
}

impl SimulatorInputs {
    /// Creates inputs for the given resolution with default calibration.
    #[must_use]
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
            ..Self::default()
        }
    }

    /// Returns a copy with every field clamped into the calculator's domain.
    ///
    /// - width/height: non-finite or < 1 becomes 1
    /// - calibration: non-finite becomes the 96 default, otherwise clamped to ≥ 1
    /// - diagonal/density: non-finite or ≤ 0 becomes absent, never zero
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            width_px: clamp_dimension(self.width_px),
            height_px: clamp_dimension(self.height_px),
            diagonal_in: self.diagonal_in.filter(|v| v.is_finite() && *v > 0.0),
            manual_ppi: self.manual_ppi.filter(|v| v.is_finite() && *v > 0.0),
            calibration_dpi: if self.calibration_dpi.is_finite() {
                self.calibration_dpi.max(1.0)
            } else {
                DEFAULT_CALIBRATION_DPI
            },
            fit_to_viewport: self.fit_to_viewport,
        }
    }

    /// Copies a preset's fields into this input state.
    ///
    /// Calibration and the fit toggle describe the viewing machine, not the
    /// simulated device, so they are left untouched.
    pub fn apply_profile(&mut self, profile: &DeviceProfile) {
        self.width_px = profile.width_px;
        self.height_px = profile.height_px;
        self.manual_ppi = profile.density_ppi;
        self.diagonal_in = profile.diagonal_in;
    }

    /// Builds an input state from a preset.
    #[must_use]
    pub fn from_profile(profile: &DeviceProfile, calibration_dpi: f64) -> Self {
        let mut inputs = Self {
            calibration_dpi,
            ..Self::default()
        };
        inputs.apply_profile(profile);
        inputs
    }

    /// Returns a copy with width and height swapped (portrait/landscape flip).
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            width_px: self.height_px,
            height_px: self.width_px,
            ..*self
        }
    }
}

fn clamp_dimension(value: f64) -> f64 {
    if value.is_finite() {
        value.max(1.0)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_clamps_resolution() {
        let inputs = SimulatorInputs {
            width_px: 0.0,
            height_px: -50.0,
            ..SimulatorInputs::default()
        };
        let clean = inputs.sanitized();
        assert_eq!(clean.width_px, 1.0);
        assert_eq!(clean.height_px, 1.0);
    }

    #[test]
    fn test_sanitized_drops_zero_density_and_diagonal() {
        let inputs = SimulatorInputs {
            diagonal_in: Some(0.0),
            manual_ppi: Some(-10.0),
            ..SimulatorInputs::default()
        };
        let clean = inputs.sanitized();
        assert_eq!(clean.diagonal_in, None);
        assert_eq!(clean.manual_ppi, None);
    }

    #[test]
    fn test_sanitized_clamps_calibration() {
        let inputs = SimulatorInputs {
            calibration_dpi: 0.5,
            ..SimulatorInputs::default()
        };
        assert_eq!(inputs.sanitized().calibration_dpi, 1.0);

        let inputs = SimulatorInputs {
            calibration_dpi: f64::NAN,
            ..SimulatorInputs::default()
        };
        assert_eq!(inputs.sanitized().calibration_dpi, 96.0);
    }

    #[test]
    fn test_apply_profile_preserves_calibration() {
        let profile = DeviceProfile::new("zelos", 1080.0, 1920.0).with_density(401.0);
        let mut inputs = SimulatorInputs {
            calibration_dpi: 110.0,
            diagonal_in: Some(24.0),
            ..SimulatorInputs::default()
        };
        inputs.apply_profile(&profile);

        assert_eq!(inputs.width_px, 1080.0);
        assert_eq!(inputs.manual_ppi, Some(401.0));
        assert_eq!(inputs.diagonal_in, None);
        assert_eq!(inputs.calibration_dpi, 110.0);
    }

    #[test]
    fn test_rotated_swaps_dimensions() {
        let inputs = SimulatorInputs::new(1920.0, 1080.0);
        let rotated = inputs.rotated();
        assert_eq!(rotated.width_px, 1080.0);
        assert_eq!(rotated.height_px, 1920.0);
    }
}
