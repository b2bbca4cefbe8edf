//! Physical-size boxes for extracted px literals.

use crate::constants::MAX_PX_BOX_ROWS;
use crate::models::DisplayMetrics;
use std::fmt::Write;

const STYLE: &str = "\
    html, body { height: 100%; }
    body { margin: 0; font-family: system-ui, Segoe UI, Roboto, Arial, sans-serif; color: #111; background: #fff; }
    .wrap { padding: 12px; }
    .row { display: flex; align-items: center; gap: 12px; margin: 8px 0; }
    .label { width: 72px; color: #333; font: 12px/1.2 ui-monospace, Menlo, Consolas, monospace; }
    .box { height: 18px; background: #4f8cff; border: 1px solid #2a66e3; border-radius: 4px; }
    .phys { color: #333; font: 12px/1.2 ui-monospace, Menlo, Consolas, monospace; }
    .note { color: #555; font: 12px/1.2 ui-monospace, Menlo, Consolas, monospace; }
    .inch { width: 96px; height: 12px; background: #000; margin-top: 10px; }";

/// Renders one box per extracted px value, widest last.
///
/// Each box is drawn at its literal CSS pixel width next to the millimeter
/// size it would have on the simulated device. The row count is capped at 50
/// to keep pathological snippets from producing huge documents; the black bar
/// at the bottom is the one-inch reference.
#[must_use]
pub fn render_px_boxes(values: &[f64], metrics: &DisplayMetrics) -> String {
    let mm_per_px = metrics.mm_per_px;

    let mut html = String::new();
    let _ = write!(
        html,
        "<!doctype html><html lang=\"en\"><head>\n\
         <meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <title>PX Boxes</title>\n\
         <style>\n{STYLE}\n</style>\n\
         </head><body>\n<div class=\"wrap\">\n"
    );

    let _ = writeln!(html, "<div class=\"note\">1px ≈ {mm_per_px:.3} mm</div>");
    for value in values.iter().take(MAX_PX_BOX_ROWS) {
        let mm = value * mm_per_px;
        let _ = writeln!(
            html,
            "<div class=\"row\">\
             <div class=\"label\">{value}px</div>\
             <div class=\"box\" style=\"width:{value}px\"></div>\
             <div class=\"phys\">≈ {mm:.2} mm</div>\
             </div>"
        );
    }
    let _ = writeln!(html, "<div class=\"inch\"></div>");
    let _ = writeln!(html, "<div class=\"note\">1 inch (96 CSS px)</div>");

    let _ = write!(html, "</div>\n</body></html>");
    html
}
