//! Data models for device profiles, derived metrics, and simulator state.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of UI and business logic.

pub mod device;
pub mod metrics;
pub mod state;

// Re-export all model types
pub use device::{DeviceProfile, PresetCollection, PresetSource};
pub use metrics::{round2, DisplayMetrics};
pub use state::SimulatorInputs;
