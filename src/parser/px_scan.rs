//! Literal `px` value extraction from pasted code.

use regex::Regex;
use std::cmp::Ordering;

/// Scans a snippet for literal pixel values (`100px`, `50.5 px`).
///
/// Only the `px` unit suffix is matched; em/rem/viewport units are out of
/// scope. Values are de-duplicated and returned in ascending order; zero
/// values are dropped since they render nothing.
#[must_use]
pub fn extract_px_values(code: &str) -> Vec<f64> {
    let px_re = Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*px\b").unwrap();

    let mut values: Vec<f64> = Vec::new();
    for caps in px_re.captures_iter(code) {
        if let Ok(value) = caps[1].parse::<f64>() {
            if value > 0.0 && !values.contains(&value) {
                values.push(value);
            }
        }
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    values
}
