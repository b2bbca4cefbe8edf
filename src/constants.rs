//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the unit-conversion anchors the
//! calculator is built on.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Screen Simulator";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "screensim";

/// Density assumed when neither a manual PPI nor a diagonal is supplied.
pub const FALLBACK_PPI: f64 = 96.0;

/// Default density assumed for the display actually running the simulation.
pub const DEFAULT_CALIBRATION_DPI: f64 = 96.0;

/// Millimeters in one inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Horizontal CSS pixels reserved around a fitted preview (wrap padding plus margin).
pub const FIT_MARGIN_HORIZONTAL: f64 = 64.0;

/// Vertical CSS pixels reserved above a fitted preview for the controls area.
pub const FIT_MARGIN_VERTICAL: f64 = 300.0;

/// Maximum number of rows the px-box sheet renders from one snippet.
pub const MAX_PX_BOX_ROWS: usize = 50;
