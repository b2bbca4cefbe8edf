//! Parsing for preset documents and pasted snippets.
//!
//! This module handles extracting device presets from free-form text and
//! scanning pasted code for literal pixel values.

pub mod presets;
pub mod px_scan;

// Re-export commonly used functions
pub use presets::{parse_number, parse_presets};
pub use px_scan::extract_px_values;
