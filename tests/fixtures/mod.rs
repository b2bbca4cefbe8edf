//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A markdown-table preset document.
pub const TABLE_DOC: &str = "\
# Devices

| Name | Width | Height | PPI | Diagonal |
|------|-------|--------|-----|----------|
| Alpha | 1080 | 1920 | 400 | 6.0 |
| Beta  | 1170 | 2532 | 460 | 6.1 |
";

/// A document mixing the three line-oriented shapes.
pub const MIXED_DOC: &str = "\
- Phone | 1080x2400 | ppi=421 | diag=6.2
Monitor,2560,1440,,27
Laptop 1920x1080 166 13.3
";

/// A document with nothing recognizable in it.
pub const PROSE_DOC: &str = "\
These are release notes. Thanks to everyone who reported issues!
No device list here.
";

/// A snippet with a handful of px literals.
pub const SNIPPET_WITH_PX: &str = "\
<style>
  .card { width: 320px; padding: 12px; border-radius: 8px; }
  .hairline { height: 0.5px; }
</style>
<div class=\"card\"><div class=\"hairline\"></div></div>
";

/// Writes `content` into a temp directory and returns its path.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn write_temp_doc(content: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("presets.md");
    fs::write(&path, content).expect("Failed to write preset document");
    (path, dir)
}
