//! Tiled pixel-pattern sheet.

use crate::models::DisplayMetrics;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write;

/// The fixed set of tile patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    /// One-pixel grid lines every cell
    #[default]
    Grid,
    /// Checkerboard of cell-sized squares
    Checker,
    /// One-pixel horizontal lines every cell
    BarsH,
    /// One-pixel vertical lines every cell
    BarsV,
    /// Flat fill, for subpixel inspection
    Solid,
}

impl PatternKind {
    /// All patterns, in selector order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Grid,
            Self::Checker,
            Self::BarsH,
            Self::BarsV,
            Self::Solid,
        ]
    }

    /// The identifier used in selectors and the readout line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Checker => "checker",
            Self::BarsH => "bars-h",
            Self::BarsV => "bars-v",
            Self::Solid => "solid",
        }
    }

    /// CSS `background` value for this pattern at the given cell size.
    fn background(self, cell_px: f64) -> String {
        match self {
            Self::Grid => "linear-gradient(to right, rgba(0,0,0,0.25) 1px, transparent 1px),\n\
                 linear-gradient(to bottom, rgba(0,0,0,0.25) 1px, transparent 1px)"
                .to_string(),
            Self::Checker => "linear-gradient(45deg, #eee 25%, transparent 25%, transparent 75%, #eee 75%, #eee),\n\
                 linear-gradient(45deg, #eee 25%, transparent 25%, transparent 75%, #eee 75%, #eee)"
                .to_string(),
            Self::BarsH => format!(
                "repeating-linear-gradient(to bottom, #000 0, #000 1px, #fff 1px, #fff {cell_px}px)"
            ),
            Self::BarsV => format!(
                "repeating-linear-gradient(to right, #000 0, #000 1px, #fff 1px, #fff {cell_px}px)"
            ),
            Self::Solid => "#ddd".to_string(),
        }
    }

    /// Extra sizing/position rules the tiled backgrounds need.
    fn sizing_css(self, cell_px: f64) -> String {
        match self {
            Self::Grid => format!(
                "background-size: {cell_px}px {cell_px}px, {cell_px}px {cell_px}px; background-position: 0 0, 0 0;"
            ),
            Self::Checker => {
                let tile = cell_px * 2.0;
                format!(
                    "background-size: {tile}px {tile}px, {tile}px {tile}px; background-position: 0 0, {cell_px}px {cell_px}px;"
                )
            }
            Self::BarsH | Self::BarsV | Self::Solid => String::new(),
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders the pixel-pattern sheet.
///
/// The readout line reports the pattern, the cell size, and the physical size
/// of one simulated pixel; the blue ruler bar shows what 100 CSS pixels come
/// to in millimeters at the current density.
#[must_use]
pub fn render_pixel_pattern(kind: PatternKind, cell_px: f64, metrics: &DisplayMetrics) -> String {
    let cell_px = cell_px.max(1.0);
    let mm_per_px = metrics.mm_per_px;
    let mm_100 = 100.0 * mm_per_px;
    let background = kind.background(cell_px);
    let sizing = kind.sizing_css(cell_px);

    let mut html = String::new();
    let _ = write!(
        html,
        "<!doctype html><html lang=\"en\"><head>\n\
         <meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <title>Pixel Pattern</title>\n\
         <style>\n\
         html, body {{ height: 100%; }}\n\
         body {{ margin: 0; font-family: system-ui, Segoe UI, Roboto, Arial, sans-serif; }}\n\
         .wrap {{ padding: 12px; }}\n\
         .panel {{ margin-bottom: 10px; color: #333; }}\n\
         .area {{ width: 100%; height: calc(100% - 90px); border: 1px solid #ccc; border-radius: 8px; {sizing} background: {background}; }}\n\
         .ruler {{ margin-top: 10px; height: 14px; position: relative; }}\n\
         .bar {{ width: 100px; height: 100%; background: #4f8cff; }}\n\
         .label {{ position: absolute; left: 0; top: 18px; font: 12px/1.2 ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; color: #333; }}\n\
         </style>\n\
         </head><body>\n<div class=\"wrap\">\n"
    );

    let _ = writeln!(
        html,
        "<div class=\"panel\">Pattern: {kind} | cell: {cell_px}px | 1px ≈ {mm_per_px:.3} mm</div>"
    );
    let _ = writeln!(html, "<div class=\"area\"></div>");
    let _ = writeln!(
        html,
        "<div class=\"ruler\"><div class=\"bar\"></div><div class=\"label\">100 px ≈ {mm_100:.2} mm</div></div>"
    );

    let _ = write!(html, "</div>\n</body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::derive_metrics;
    use crate::models::SimulatorInputs;

    fn sample_metrics() -> DisplayMetrics {
        let inputs = SimulatorInputs {
            manual_ppi: Some(254.0),
            ..SimulatorInputs::new(1080.0, 1920.0)
        };
        derive_metrics(&inputs)
    }

    #[test]
    fn test_kind_identifiers() {
        assert_eq!(PatternKind::Grid.as_str(), "grid");
        assert_eq!(PatternKind::BarsH.as_str(), "bars-h");
        assert_eq!(PatternKind::all().len(), 5);
    }

    #[test]
    fn test_grid_sets_background_size() {
        let html = render_pixel_pattern(PatternKind::Grid, 10.0, &sample_metrics());
        assert!(html.contains("background-size: 10px 10px, 10px 10px;"));
        assert!(html.contains("Pattern: grid | cell: 10px"));
    }

    #[test]
    fn test_checker_offsets_second_tile() {
        let html = render_pixel_pattern(PatternKind::Checker, 8.0, &sample_metrics());
        assert!(html.contains("background-size: 16px 16px, 16px 16px;"));
        assert!(html.contains("background-position: 0 0, 8px 8px;"));
    }

    #[test]
    fn test_bars_repeat_at_cell_size() {
        let html = render_pixel_pattern(PatternKind::BarsV, 12.0, &sample_metrics());
        assert!(html.contains("repeating-linear-gradient(to right"));
        assert!(html.contains("#fff 12px)"));
    }

    #[test]
    fn test_ruler_reports_physical_size() {
        // 254 ppi: one pixel is 0.1 mm, so 100 px is 10.00 mm
        let html = render_pixel_pattern(PatternKind::Solid, 10.0, &sample_metrics());
        assert!(html.contains("1px ≈ 0.100 mm"));
        assert!(html.contains("100 px ≈ 10.00 mm"));
    }

    #[test]
    fn test_cell_clamped_to_minimum() {
        let html = render_pixel_pattern(PatternKind::BarsH, 0.0, &sample_metrics());
        assert!(html.contains("#fff 1px)"));
    }
}
