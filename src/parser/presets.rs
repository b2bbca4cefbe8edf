//! Tolerant preset document parsing.
//!
//! A preset document is free-form text in one of four shapes: a pipe table
//! with a header row, pipe-delimited bullet lines, CSV lines, or
//! whitespace-separated lines. The shapes are tried in that fixed order and
//! the first one that yields at least one record wins. The table shape is
//! decided globally; once ruled out, every remaining line is classified
//! independently, so a single document may mix the line-oriented shapes.
//!
//! Parsing never fails: unresolvable lines are skipped and an unrecognizable
//! document yields an empty list, which the caller reports as a single
//! status message.

use crate::models::DeviceProfile;
use regex::Regex;

/// Parses a preset document into device profiles, source order preserved.
#[must_use]
pub fn parse_presets(text: &str) -> Vec<DeviceProfile> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if let Some(profiles) = parse_table(&lines) {
        if !profiles.is_empty() {
            return profiles;
        }
    }

    let dim_re = dimension_regex();
    let mut profiles = Vec::new();
    for line in &lines {
        let line = strip_bullet(line);

        // A pipe or comma classifies the line even when its fields don't
        // resolve; such a line is skipped, not retried under a later shape.
        if line.contains('|') {
            if let Some(profile) = parse_pipe_line(line, &dim_re) {
                profiles.push(profile);
            }
            continue;
        }
        if line.contains(',') {
            if let Some(profile) = parse_csv_line(line) {
                profiles.push(profile);
            }
            continue;
        }
        if let Some(profile) = parse_space_line(line) {
            profiles.push(profile);
        }
    }
    profiles
}

/// Extracts the first integer or decimal run from a string.
///
/// Returns `None` when the string holds no digits at all. Callers that need
/// a usable measurement go through [`numeric_field`], which also treats an
/// extracted zero as absent.
#[must_use]
pub fn parse_number(value: &str) -> Option<f64> {
    let number_re = Regex::new(r"[0-9]+(\.[0-9]+)?").unwrap();
    number_re
        .find(value)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// A field is absent when extraction fails or yields zero; density and
/// diagonal must never come out as zero or they would shadow the
/// calculator's resolution order.
fn numeric_field(value: &str) -> Option<f64> {
    parse_number(value).filter(|v| *v > 0.0)
}

fn dimension_regex() -> Regex {
    Regex::new(r"(?i)(\d+)\s*[x×]\s*(\d+)").unwrap()
}

fn strip_bullet(line: &str) -> &str {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .map_or(line, str::trim_start)
}

/// Builds a profile once name, width, and height have all resolved.
fn build_profile(
    name: &str,
    width: Option<f64>,
    height: Option<f64>,
    ppi: Option<f64>,
    diagonal: Option<f64>,
) -> Option<DeviceProfile> {
    if name.is_empty() {
        return None;
    }
    let (width, height) = (width?, height?);
    Some(DeviceProfile {
        name: name.to_string(),
        width_px: width,
        height_px: height,
        density_ppi: ppi,
        diagonal_in: diagonal,
    })
}

// ============================================================================
// Shape 1: pipe table with header row
// ============================================================================

/// Tries the table shape on the whole document.
///
/// Returns `None` when no header/separator pair is found; returns
/// `Some(vec![])` when a table was found but no row resolved, in which case
/// the caller falls through to the line-oriented shapes.
fn parse_table(lines: &[&str]) -> Option<Vec<DeviceProfile>> {
    let header_re = Regex::new(r"(?i)name|device").unwrap();
    let separator_re = Regex::new(r"^\|?\s*[-:|\s]+$").unwrap();
    let dim_re = dimension_regex();

    let header_idx = lines
        .iter()
        .position(|line| line.contains('|') && header_re.is_match(line))?;
    if header_idx + 2 >= lines.len() || !separator_re.is_match(lines[header_idx + 1]) {
        return None;
    }

    let headers: Vec<String> = lines[header_idx]
        .split('|')
        .map(|cell| cell.trim().to_lowercase())
        .collect();

    let mut profiles = Vec::new();
    for line in &lines[header_idx + 2..] {
        if !line.contains('|') {
            break;
        }
        let cols: Vec<&str> = line.split('|').map(str::trim).collect();
        if cols.len() < 2 {
            continue;
        }

        let cell = |keys: &[&str]| -> &str {
            for key in keys {
                if let Some(idx) = headers.iter().position(|h| h == *key) {
                    if let Some(value) = cols.get(idx) {
                        if !value.is_empty() {
                            return value;
                        }
                    }
                }
            }
            ""
        };

        let mut name = cell(&["name", "device"]);
        if name.is_empty() {
            name = cols[0];
        }

        let mut width = numeric_field(cell(&["width", "w"]));
        let mut height = numeric_field(cell(&["height", "h"]));
        if width.is_none() {
            // No width column; try a NxM token in the second cell
            if let Some(caps) = cols.get(1).and_then(|c| dim_re.captures(c)) {
                width = caps[1].parse::<f64>().ok().filter(|v| *v > 0.0);
                height = caps[2].parse::<f64>().ok().filter(|v| *v > 0.0);
            }
        }
        let ppi = numeric_field(cell(&["ppi"]));
        let diagonal = numeric_field(cell(&["diagonal", "diag"]));

        if let Some(profile) = build_profile(name, width, height, ppi, diagonal) {
            profiles.push(profile);
        }
    }
    Some(profiles)
}

// ============================================================================
// Shape 2: pipe-delimited bullet lines
// ============================================================================

/// Parses `Name | 1080x1920 | ppi=401 | diag=6.5` style lines.
fn parse_pipe_line(line: &str, dim_re: &Regex) -> Option<DeviceProfile> {
    let prefix_w = Regex::new(r"(?i)^w(idth)?").unwrap();
    let prefix_h = Regex::new(r"(?i)^h(eight)?").unwrap();
    let has_ppi = Regex::new(r"(?i)ppi").unwrap();
    let has_diag = Regex::new(r"(?i)diag").unwrap();

    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    let name = parts[0];
    let mut width = None;
    let mut height = None;
    let mut ppi = None;
    let mut diagonal = None;

    for part in &parts[1..] {
        if let Some(caps) = dim_re.captures(part) {
            width = caps[1].parse::<f64>().ok().filter(|v| *v > 0.0);
            height = caps[2].parse::<f64>().ok().filter(|v| *v > 0.0);
            continue;
        }
        if prefix_w.is_match(part) {
            width = numeric_field(part);
        }
        if prefix_h.is_match(part) {
            height = numeric_field(part);
        }
        if has_ppi.is_match(part) {
            ppi = numeric_field(part);
        }
        if has_diag.is_match(part) {
            diagonal = numeric_field(part);
        }
    }

    build_profile(name, width, height, ppi, diagonal)
}

// ============================================================================
// Shape 3: CSV lines
// ============================================================================

/// Parses `Name,1080,1920,401,6.5` with missing trailing fields absent.
fn parse_csv_line(line: &str) -> Option<DeviceProfile> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    let name = parts[0];
    let field = |idx: usize| parts.get(idx).copied().and_then(numeric_field);

    build_profile(name, field(1), field(2), field(3), field(4))
}

// ============================================================================
// Shape 4: whitespace-separated lines
// ============================================================================

/// Parses `Name 1080x1920 401 6.1` or `Name 1080 1920 401 6.1`.
fn parse_space_line(line: &str) -> Option<DeviceProfile> {
    let anchored_dim = Regex::new(r"(?i)^(\d+)\s*[x×]\s*(\d+)$").unwrap();

    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }
    let name = parts[0];

    let mut width = None;
    let mut height = None;
    // Cursor past the dimension tokens, so density and diagonal follow
    // whichever dimension form the line used
    let mut next = 2;
    if let Some(caps) = anchored_dim.captures(parts[1]) {
        width = caps[1].parse::<f64>().ok().filter(|v| *v > 0.0);
        height = caps[2].parse::<f64>().ok().filter(|v| *v > 0.0);
    } else if parts.len() >= 3 {
        width = numeric_field(parts[1]);
        height = numeric_field(parts[2]);
        next = 3;
    }

    let ppi = parts.get(next).copied().and_then(numeric_field);
    let diagonal = parts.get(next + 1).copied().and_then(numeric_field);

    build_profile(name, width, height, ppi, diagonal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_first_run() {
        assert_eq!(parse_number("w=300"), Some(300.0));
        assert_eq!(parse_number("6.5 inches"), Some(6.5));
        assert_eq!(parse_number("ppi 401, more"), Some(401.0));
        assert_eq!(parse_number("no digits"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_numeric_field_treats_zero_as_absent() {
        assert_eq!(numeric_field("0"), None);
        assert_eq!(numeric_field("0.0"), None);
        assert_eq!(numeric_field("12"), Some(12.0));
    }

    #[test]
    fn test_table_shape_single_row() {
        let doc = "\
| Name | Width | Height | PPI | Diagonal |
|---|---|---|---|---|
| Alpha | 1080 | 1920 | 400 | 6.0 |";
        let profiles = parse_presets(doc);
        assert_eq!(profiles.len(), 1);
        let p = &profiles[0];
        assert_eq!(p.name, "Alpha");
        assert_eq!(p.width_px, 1080.0);
        assert_eq!(p.height_px, 1920.0);
        assert_eq!(p.density_ppi, Some(400.0));
        assert_eq!(p.diagonal_in, Some(6.0));
    }

    #[test]
    fn test_table_shape_dimension_token_column() {
        let doc = "\
| Device | Resolution |
|---|---|
| Beta | 800x600 |";
        let profiles = parse_presets(doc);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "Beta");
        assert_eq!(profiles[0].width_px, 800.0);
        assert_eq!(profiles[0].height_px, 600.0);
    }

    #[test]
    fn test_table_stops_at_non_pipe_line() {
        let doc = "\
| Name | Width | Height |
|---|---|---|
| Alpha | 100 | 200 |
trailing prose
| Beta | 300 | 400 |";
        let profiles = parse_presets(doc);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "Alpha");
    }

    #[test]
    fn test_table_rows_missing_dimensions_skipped() {
        let doc = "\
| Name | Width | Height |
|---|---|---|
| Good | 100 | 200 |
| Bad | | 200 |";
        let profiles = parse_presets(doc);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "Good");
    }

    #[test]
    fn test_pipe_line_shape() {
        let profiles = parse_presets("- Phone | 1080x2400 | ppi=421 | diag=6.2");
        assert_eq!(profiles.len(), 1);
        let p = &profiles[0];
        assert_eq!(p.name, "Phone");
        assert_eq!(p.width_px, 1080.0);
        assert_eq!(p.height_px, 2400.0);
        assert_eq!(p.density_ppi, Some(421.0));
        assert_eq!(p.diagonal_in, Some(6.2));
    }

    #[test]
    fn test_pipe_line_prefixed_fields() {
        let profiles = parse_presets("Monitor | w=2560 | h=1440 | diagonal 27");
        assert_eq!(profiles.len(), 1);
        let p = &profiles[0];
        assert_eq!(p.width_px, 2560.0);
        assert_eq!(p.height_px, 1440.0);
        assert_eq!(p.density_ppi, None);
        assert_eq!(p.diagonal_in, Some(27.0));
    }

    #[test]
    fn test_csv_shape_missing_fields() {
        let profiles = parse_presets("Beta,800,600,,5");
        assert_eq!(profiles.len(), 1);
        let p = &profiles[0];
        assert_eq!(p.name, "Beta");
        assert_eq!(p.width_px, 800.0);
        assert_eq!(p.height_px, 600.0);
        assert_eq!(p.density_ppi, None);
        assert_eq!(p.diagonal_in, Some(5.0));
    }

    #[test]
    fn test_whitespace_shape_combined_dimension() {
        let profiles = parse_presets("Gamma 1920x1080 150 24");
        assert_eq!(profiles.len(), 1);
        let p = &profiles[0];
        assert_eq!(p.name, "Gamma");
        assert_eq!(p.width_px, 1920.0);
        assert_eq!(p.height_px, 1080.0);
        assert_eq!(p.density_ppi, Some(150.0));
        assert_eq!(p.diagonal_in, Some(24.0));
    }

    #[test]
    fn test_whitespace_shape_separate_dimensions() {
        let profiles = parse_presets("Delta 1280 1024 96 19");
        assert_eq!(profiles.len(), 1);
        let p = &profiles[0];
        assert_eq!(p.width_px, 1280.0);
        assert_eq!(p.height_px, 1024.0);
        assert_eq!(p.density_ppi, Some(96.0));
        assert_eq!(p.diagonal_in, Some(19.0));
    }

    #[test]
    fn test_mixed_line_shapes_after_table_ruled_out() {
        let doc = "\
Alpha | 1080x1920 | ppi=400
Beta,800,600
Gamma 1024x768";
        let profiles = parse_presets(doc);
        assert_eq!(profiles.len(), 3);
        assert_eq!(profiles[0].name, "Alpha");
        assert_eq!(profiles[1].name, "Beta");
        assert_eq!(profiles[2].name, "Gamma");
    }

    #[test]
    fn test_source_order_preserved_no_dedup() {
        let doc = "Zeta 100x200\nAlpha 100x200\nZeta 100x200";
        let profiles = parse_presets(doc);
        let names: Vec<&str> = profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Zeta"]);
    }

    #[test]
    fn test_prose_paragraph_yields_nothing() {
        let doc = "This paragraph has no digits and no recognizable shape at all.";
        assert!(parse_presets(doc).is_empty());
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(parse_presets("").is_empty());
        assert!(parse_presets("\n\n  \n").is_empty());
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(parse_presets("Broken,0,600").is_empty());
    }
}
