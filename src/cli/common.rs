//! Shared CLI plumbing: error type, result alias, device flags.

use clap::Args;
use std::fmt;

use crate::config::Config;
use crate::models::SimulatorInputs;

/// Result alias for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// CLI failure categories, mapped to distinct exit codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// File system or serialization failure
    Io(String),
    /// Rejected input or configuration
    Validation(String),
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 1,
            Self::Io(_) => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) | Self::Validation(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Device flags shared by every subcommand that derives metrics.
#[derive(Debug, Clone, Args)]
pub struct DeviceOpts {
    /// Device width in pixels
    #[arg(long, value_name = "PX", default_value_t = 1080.0)]
    pub width: f64,

    /// Device height in pixels
    #[arg(long, value_name = "PX", default_value_t = 1920.0)]
    pub height: f64,

    /// Physical diagonal in inches
    #[arg(long, value_name = "IN")]
    pub diagonal: Option<f64>,

    /// Manual pixel density; overrides the diagonal when present
    #[arg(long, value_name = "PPI")]
    pub ppi: Option<f64>,

    /// Density assumed for the viewing display (defaults to the configured value)
    #[arg(long, value_name = "DPI")]
    pub calibration_dpi: Option<f64>,
}

impl DeviceOpts {
    /// Builds sanitized simulator inputs, with configuration filling the
    /// calibration default.
    #[must_use]
    pub fn to_inputs(&self, config: &Config) -> SimulatorInputs {
        SimulatorInputs {
            width_px: self.width,
            height_px: self.height,
            diagonal_in: self.diagonal,
            manual_ppi: self.ppi,
            calibration_dpi: self
                .calibration_dpi
                .unwrap_or(config.display.calibration_dpi),
            fit_to_viewport: config.display.fit_preview,
        }
        .sanitized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code(), 1);
        assert_eq!(CliError::io("disk").exit_code(), 2);
    }

    #[test]
    fn test_device_opts_to_inputs() {
        let opts = DeviceOpts {
            width: 0.0,
            height: 1920.0,
            diagonal: Some(5.5),
            ppi: None,
            calibration_dpi: None,
        };
        let inputs = opts.to_inputs(&Config::default());

        // Sanitized on the way in
        assert_eq!(inputs.width_px, 1.0);
        assert_eq!(inputs.diagonal_in, Some(5.5));
        assert_eq!(inputs.calibration_dpi, 96.0);
    }
}
