//! Physical-metric calculator.
//!
//! Pure conversions between a device's pixel resolution, its physical size,
//! and the CSS pixel box used to simulate it on the viewing display. The
//! functions here assume inputs already normalized by
//! [`SimulatorInputs::sanitized`]; they are total over that domain and never
//! fail, log, or retry.

use crate::constants::{FALLBACK_PPI, FIT_MARGIN_HORIZONTAL, FIT_MARGIN_VERTICAL, MM_PER_INCH};
use crate::models::{DisplayMetrics, SimulatorInputs};

/// Resolves the pixel density of the simulated device.
///
/// Resolution order, first match wins:
/// 1. a positive manually entered density
/// 2. the Pythagorean diagonal pixel count divided by the physical diagonal
/// 3. a fixed 96 PPI fallback
#[must_use]
pub fn resolve_density(
    width_px: f64,
    height_px: f64,
    diagonal_in: Option<f64>,
    manual_ppi: Option<f64>,
) -> f64 {
    if let Some(ppi) = manual_ppi {
        if ppi > 0.0 {
            return ppi;
        }
    }
    if let Some(diagonal) = diagonal_in {
        if diagonal > 0.0 {
            let diagonal_px = width_px.hypot(height_px);
            return diagonal_px / diagonal;
        }
    }
    FALLBACK_PPI
}

/// Derives the full metric set from the current inputs.
///
/// The CSS box is sized so that its CSS pixel extent equals the target
/// device's physical extent as if the viewing display had exactly
/// `calibration_dpi` pixels per inch: CSS pixels stand in for physical units
/// once calibrated. All outputs stay full-precision; round only for display.
#[must_use]
pub fn derive_metrics(inputs: &SimulatorInputs) -> DisplayMetrics {
    let ppi = resolve_density(
        inputs.width_px,
        inputs.height_px,
        inputs.diagonal_in,
        inputs.manual_ppi,
    );
    let width_in = inputs.width_px / ppi;
    let height_in = inputs.height_px / ppi;

    DisplayMetrics {
        ppi,
        width_in,
        height_in,
        css_width_px: width_in * inputs.calibration_dpi,
        css_height_px: height_in * inputs.calibration_dpi,
        mm_per_px: MM_PER_INCH / ppi,
    }
}

/// Margins reserved around a fitted preview, in CSS pixels of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitMargins {
    /// Total horizontal space kept free (padding on both sides)
    pub horizontal: f64,
    /// Total vertical space kept free (controls above the preview)
    pub vertical: f64,
}

impl Default for FitMargins {
    fn default() -> Self {
        Self {
            horizontal: FIT_MARGIN_HORIZONTAL,
            vertical: FIT_MARGIN_VERTICAL,
        }
    }
}

/// Computes the uniform scale that fits the CSS box into the viewport.
///
/// Never exceeds 1: a box smaller than the viewport is shown at natural size.
/// The scale is a visual transform only; the underlying CSS dimensions used
/// for metrics reporting are never altered by it.
#[must_use]
pub fn fit_scale(
    css_width: f64,
    css_height: f64,
    viewport_width: f64,
    viewport_height: f64,
    margins: FitMargins,
) -> f64 {
    let sx = (viewport_width - margins.horizontal) / css_width;
    let sy = (viewport_height - margins.vertical) / css_height;
    1.0_f64.min(sx).min(sy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_ppi_wins_over_diagonal() {
        let ppi = resolve_density(1080.0, 1920.0, Some(5.5), Some(400.0));
        assert_eq!(ppi, 400.0);
    }

    #[test]
    fn test_diagonal_density() {
        let ppi = resolve_density(1080.0, 1920.0, Some(5.5), None);
        let expected = (1080.0_f64 * 1080.0 + 1920.0 * 1920.0).sqrt() / 5.5;
        assert!((ppi - expected).abs() < 1e-9);
        assert!((ppi - 401.05).abs() < 0.1);
    }

    #[test]
    fn test_fallback_density() {
        assert_eq!(resolve_density(1080.0, 1920.0, None, None), 96.0);
        assert_eq!(resolve_density(1.0, 1.0, None, None), 96.0);
    }

    #[test]
    fn test_degenerate_resolution_is_finite() {
        let ppi = resolve_density(1.0, 1.0, Some(0.1), None);
        assert!(ppi.is_finite());
        assert!(ppi > 0.0);
    }

    #[test]
    fn test_mm_per_px_inverts_ppi() {
        for ppi in [96.0, 150.0, 401.05, 529.0] {
            let inputs = SimulatorInputs {
                manual_ppi: Some(ppi),
                ..SimulatorInputs::new(1080.0, 1920.0)
            };
            let metrics = derive_metrics(&inputs);
            assert!((metrics.mm_per_px * metrics.ppi - 25.4).abs() < 1e-9);
        }
    }

    #[test]
    fn test_css_box_scales_linearly_with_calibration() {
        let base = SimulatorInputs {
            manual_ppi: Some(400.0),
            calibration_dpi: 96.0,
            ..SimulatorInputs::new(1080.0, 1920.0)
        };
        let doubled = SimulatorInputs {
            calibration_dpi: 192.0,
            ..base
        };

        let m1 = derive_metrics(&base);
        let m2 = derive_metrics(&doubled);

        assert!((m2.css_width_px - 2.0 * m1.css_width_px).abs() < 1e-9);
        assert!((m2.css_height_px - 2.0 * m1.css_height_px).abs() < 1e-9);
        // Physical size is a property of the device, not the viewing display
        assert_eq!(m1.width_in, m2.width_in);
    }

    #[test]
    fn test_fit_scale_capped_at_one() {
        let scale = fit_scale(100.0, 100.0, 5000.0, 5000.0, FitMargins::default());
        assert_eq!(scale, 1.0);
    }

    #[test]
    fn test_fit_scale_monotone_in_viewport() {
        let margins = FitMargins::default();
        let mut last = f64::INFINITY;
        for viewport in [2000.0, 1600.0, 1200.0, 800.0, 500.0] {
            let scale = fit_scale(1000.0, 800.0, viewport, viewport, margins);
            assert!(scale <= 1.0);
            assert!(scale <= last);
            last = scale;
        }
    }
}
