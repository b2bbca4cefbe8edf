//! Integration tests for the physical-metric calculator.

use screensim::metrics::{derive_metrics, fit_scale, resolve_density, FitMargins};
use screensim::models::{round2, SimulatorInputs};

#[test]
fn test_manual_ppi_always_wins() {
    for diagonal in [None, Some(5.5), Some(27.0)] {
        let ppi = resolve_density(1080.0, 1920.0, diagonal, Some(320.0));
        assert_eq!(ppi, 320.0);
    }
}

#[test]
fn test_diagonal_resolution_matches_pythagoras() {
    let ppi = resolve_density(1080.0, 1920.0, Some(5.5), None);
    assert!((ppi - 401.05).abs() < 0.1);
}

#[test]
fn test_fallback_is_exactly_96() {
    assert_eq!(resolve_density(800.0, 600.0, None, None), 96.0);
}

#[test]
fn test_zero_inputs_are_clamped_before_derivation() {
    let inputs = SimulatorInputs {
        width_px: 0.0,
        height_px: -3.0,
        diagonal_in: Some(0.0),
        manual_ppi: Some(0.0),
        calibration_dpi: 0.0,
        fit_to_viewport: false,
    }
    .sanitized();

    let metrics = derive_metrics(&inputs);
    // 1x1 at the 96 fallback with calibration clamped to 1
    assert_eq!(metrics.ppi, 96.0);
    assert!(metrics.css_width_px > 0.0);
    assert!(metrics.css_width_px.is_finite());
}

#[test]
fn test_mm_per_px_times_ppi_is_one_inch() {
    for (w, h, diag) in [(1080.0, 1920.0, 5.5), (2560.0, 1440.0, 27.0)] {
        let inputs = SimulatorInputs {
            diagonal_in: Some(diag),
            ..SimulatorInputs::new(w, h)
        };
        let metrics = derive_metrics(&inputs);
        assert!((metrics.mm_per_px * metrics.ppi - 25.4).abs() < 1e-9);
    }
}

#[test]
fn test_calibration_doubles_css_box() {
    let base = SimulatorInputs {
        diagonal_in: Some(6.0),
        calibration_dpi: 96.0,
        ..SimulatorInputs::new(1440.0, 2960.0)
    };
    let doubled = SimulatorInputs {
        calibration_dpi: 192.0,
        ..base
    };

    let m1 = derive_metrics(&base);
    let m2 = derive_metrics(&doubled);
    assert!((m2.css_width_px - 2.0 * m1.css_width_px).abs() < 1e-9);
    assert!((m2.css_height_px - 2.0 * m1.css_height_px).abs() < 1e-9);
}

#[test]
fn test_css_box_equals_physical_inches_times_calibration() {
    // 1080x1920 at 401 ppi on a 96 dpi viewing display
    let inputs = SimulatorInputs {
        manual_ppi: Some(401.0),
        ..SimulatorInputs::new(1080.0, 1920.0)
    };
    let metrics = derive_metrics(&inputs);

    assert!((metrics.width_in - 1080.0 / 401.0).abs() < 1e-9);
    assert!((metrics.css_width_px - metrics.width_in * 96.0).abs() < 1e-9);
}

#[test]
fn test_fit_scale_never_exceeds_one() {
    let margins = FitMargins::default();
    for viewport in [10_000.0, 2000.0, 1000.0, 400.0] {
        let scale = fit_scale(500.0, 900.0, viewport, viewport, margins);
        assert!(scale <= 1.0);
    }
}

#[test]
fn test_fit_scale_shrinks_with_viewport() {
    let margins = FitMargins::default();
    let wide = fit_scale(2000.0, 1200.0, 1600.0, 1000.0, margins);
    let narrow = fit_scale(2000.0, 1200.0, 1200.0, 1000.0, margins);
    assert!(narrow <= wide);
}

#[test]
fn test_fit_scale_does_not_alter_metrics() {
    let inputs = SimulatorInputs {
        manual_ppi: Some(401.0),
        fit_to_viewport: true,
        ..SimulatorInputs::new(1080.0, 1920.0)
    };
    let before = derive_metrics(&inputs);
    let _ = fit_scale(
        before.css_width_px,
        before.css_height_px,
        800.0,
        600.0,
        FitMargins::default(),
    );
    let after = derive_metrics(&inputs);
    assert_eq!(before, after);
}

#[test]
fn test_display_rounding_is_two_decimals_half_up() {
    assert_eq!(round2(401.0545), 401.05);
    assert_eq!(round2(0.125), 0.13);
    assert_eq!(round2(1.005), 1.01);
}
