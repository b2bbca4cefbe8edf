//! Font-size sample sheet.

use crate::models::DisplayMetrics;
use std::fmt::Write;

/// Font sizes shown in the comparison grid, in CSS pixels.
const COMMON_SIZES: [f64; 9] = [6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 24.0];

const STYLE: &str = "\
    html, body { height: 100%; }
    body { margin: 0; font-family: system-ui, Segoe UI, Roboto, Arial, sans-serif; color: #111; background: #fff; }
    .wrap { padding: 16px; }
    .line { display: flex; align-items: baseline; gap: 12px; margin: 10px 0; }
    .tag { color: #555; min-width: 110px; font: 12px/1.2 ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; }
    .sample { border: 1px dashed #999; padding: 8px; border-radius: 6px; background: #fafafa; }
    .ruler { width: 96px; height: 96px; border: 1px solid #e33; display: inline-grid; place-items: center; color: #e33; margin-top: 12px; }
    .grid { display: grid; grid-template-columns: repeat(3, minmax(0,1fr)); gap: 10px; margin-top: 14px; }
    .cell { border: 1px dashed #ccc; border-radius: 6px; padding: 10px; background: #fcfcfc; }
    .on { outline: 2px solid #4f8cff; outline-offset: 2px; }";

/// Renders the font-size sample sheet for one requested size.
///
/// Shows the requested size against an x-height row and a glyph row, reports
/// the physical letter height implied by the current density, and lays out a
/// grid of common sizes with the requested one highlighted. The red square is
/// one inch at the 96 dpi reference.
#[must_use]
pub fn render_font_sample(size_px: f64, metrics: &DisplayMetrics) -> String {
    let size_px = size_px.max(1.0);
    let height_in = size_px / metrics.ppi;
    let height_mm = size_px * metrics.mm_per_px;
    // Truncated to three decimals for the inches readout
    let height_in_display = (height_in * 1000.0).trunc() / 1000.0;

    let mut html = String::new();
    let _ = write!(
        html,
        "<!doctype html><html lang=\"en\"><head>\n\
         <meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <title>Font Sample</title>\n\
         <style>\n{STYLE}\n</style>\n\
         </head><body>\n<div class=\"wrap\">\n"
    );

    let _ = writeln!(
        html,
        "<div class=\"line\"><div class=\"tag\">font-size</div>\
         <div class=\"sample\" style=\"font-size:{size_px}px\">The quick brown fox — {size_px}px</div></div>"
    );
    let _ = writeln!(
        html,
        "<div class=\"line\"><div class=\"tag\">x-height</div>\
         <div class=\"sample\" style=\"font-size:{size_px}px\">x x x x x x x</div></div>"
    );
    let _ = writeln!(
        html,
        "<div class=\"line\"><div class=\"tag\">Ag glyphs</div>\
         <div class=\"sample\" style=\"font-size:{size_px}px\">Aa Bb Cc Dd Ee Ff Gg</div></div>"
    );
    let _ = writeln!(
        html,
        "<div class=\"line\"><div class=\"tag\">physical</div>\
         <div>~{height_in_display}\" • {height_mm:.2} mm tall for {size_px}px</div></div>"
    );

    let _ = writeln!(html, "<div class=\"grid\">");
    for common in COMMON_SIZES {
        let on = if (common - size_px).abs() < f64::EPSILON {
            " on"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<div class=\"cell{on}\" style=\"font-size:{common}px\">{common}px — The quick brown fox</div>"
        );
    }
    let _ = writeln!(html, "</div>");

    let _ = write!(
        html,
        "<div class=\"ruler\">1\"</div>\n</div>\n</body></html>"
    );
    html
}
