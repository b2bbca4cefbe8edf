//! Preset collection loading.
//!
//! This module centralizes all preset document I/O: the compiled-in default
//! list, loading a document from disk or over HTTP(S), and the replacement
//! rule (a successfully parsed document replaces the collection wholesale; a
//! failed or empty load leaves the previous collection in effect and is
//! reported as a one-line status note, never an error).

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::models::{DeviceProfile, PresetCollection, PresetSource};
use crate::parser;

/// Names auto-selected after an external load, in preference order.
const PREFERRED_NAMES: [&str; 4] = ["zelos", "mirta", "ven", "pyramid"];

/// The compiled-in default device list.
#[must_use]
pub fn builtin_presets() -> Vec<DeviceProfile> {
    vec![
        // Phones
        DeviceProfile::new("zelos", 1080.0, 1920.0)
            .with_density(401.0)
            .with_diagonal(5.5),
        DeviceProfile::new("mirta", 1170.0, 2532.0)
            .with_density(460.0)
            .with_diagonal(6.1),
        DeviceProfile::new("ven", 1080.0, 2400.0)
            .with_density(421.0)
            .with_diagonal(6.2),
        DeviceProfile::new("pyramid", 1440.0, 2960.0)
            .with_density(529.0)
            .with_diagonal(6.0),
        // Tablets
        DeviceProfile::new("iPad 11\"", 1668.0, 2388.0)
            .with_density(264.0)
            .with_diagonal(11.0),
        // Laptops and desktops (density computed from the diagonal)
        DeviceProfile::new("13.3\" FHD", 1920.0, 1080.0).with_diagonal(13.3),
        DeviceProfile::new("15.6\" FHD", 1920.0, 1080.0).with_diagonal(15.6),
        DeviceProfile::new("27\" QHD", 2560.0, 1440.0).with_diagonal(27.0),
        DeviceProfile::new("27\" 4K", 3840.0, 2160.0).with_diagonal(27.0),
        DeviceProfile::new("19\" 1280x1024", 1280.0, 1024.0).with_diagonal(19.0),
    ]
}

/// Service for loading and replacing preset collections.
pub struct PresetService;

impl PresetService {
    /// The collection every session starts from.
    #[must_use]
    pub fn builtin_collection() -> PresetCollection {
        PresetCollection::new(builtin_presets(), PresetSource::Builtin)
    }

    /// Reads and parses a preset document from disk.
    ///
    /// An unreadable file is an error; a readable file with no recognizable
    /// records is `Ok` with an empty list, and the replacement rule decides
    /// what to do with it.
    pub fn load_file(path: &Path) -> Result<Vec<DeviceProfile>> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset document: {}", path.display()))?;
        Ok(parser::parse_presets(&text))
    }

    /// Fetches and parses a preset document over HTTP(S).
    pub fn fetch_url(url: &str) -> Result<Vec<DeviceProfile>> {
        let response = reqwest::blocking::get(url)
            .with_context(|| format!("Failed to fetch preset document: {url}"))?
            .error_for_status()
            .with_context(|| format!("Preset document request rejected: {url}"))?;
        let text = response
            .text()
            .with_context(|| format!("Failed to read preset document body: {url}"))?;
        Ok(parser::parse_presets(&text))
    }

    /// Loads a preset document from a path or URL.
    pub fn load_source(source: &str) -> Result<PresetCollection> {
        let (profiles, origin) = if source.starts_with("http://") || source.starts_with("https://")
        {
            (Self::fetch_url(source)?, PresetSource::Url(source.into()))
        } else {
            let path = PathBuf::from(source);
            (Self::load_file(&path)?, PresetSource::File(path))
        };
        Ok(PresetCollection::new(profiles, origin))
    }

    /// Startup loading: built-ins first, then the configured source if any.
    ///
    /// The external load is best-effort. Any failure — unreadable file, HTTP
    /// error, or a document with zero recognizable records — is swallowed
    /// into the returned status note and the built-in collection stays
    /// active.
    #[must_use]
    pub fn load_or_builtin(source: Option<&str>) -> (PresetCollection, Option<String>) {
        let Some(source) = source else {
            return (Self::builtin_collection(), None);
        };

        match Self::load_source(source) {
            Ok(collection) if !collection.is_empty() => {
                let note = format!(
                    "Loaded {} preset(s) from {}.",
                    collection.len(),
                    collection.source()
                );
                (collection, Some(note))
            }
            Ok(_) => (
                Self::builtin_collection(),
                Some(format!("{source}: no presets recognized.")),
            ),
            Err(e) => (
                Self::builtin_collection(),
                Some(format!("Could not load presets from {source}: {e:#}.")),
            ),
        }
    }

    /// Index of the preset to auto-select after a load.
    ///
    /// Picks the first profile whose lower-cased name matches the preferred
    /// list, in list order; falls back to the first profile.
    #[must_use]
    pub fn preferred_index(profiles: &[DeviceProfile]) -> usize {
        for preferred in PREFERRED_NAMES {
            if let Some(idx) = profiles
                .iter()
                .position(|p| p.name.to_lowercase() == preferred)
            {
                return idx;
            }
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_builtin_collection_is_populated() {
        let collection = PresetService::builtin_collection();
        assert_eq!(collection.len(), 10);
        assert_eq!(collection.source(), &PresetSource::Builtin);
        assert_eq!(collection.get(0).map(|p| p.name.as_str()), Some("zelos"));
    }

    #[test]
    fn test_builtins_respect_density_invariant() {
        for profile in builtin_presets() {
            assert!(profile.width_px > 0.0);
            assert!(profile.height_px > 0.0);
            if let Some(ppi) = profile.density_ppi {
                assert!(ppi > 0.0);
            }
        }
    }

    #[test]
    fn test_load_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Alpha,1080,1920,400,6.0").unwrap();

        let profiles = PresetService::load_file(file.path()).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "Alpha");
    }

    #[test]
    fn test_load_file_missing_is_error() {
        assert!(PresetService::load_file(Path::new("/nonexistent/presets.md")).is_err());
    }

    #[test]
    fn test_load_or_builtin_swallows_failure() {
        let (collection, note) = PresetService::load_or_builtin(Some("/nonexistent/presets.md"));
        assert_eq!(collection.source(), &PresetSource::Builtin);
        assert!(note.unwrap().contains("Could not load presets"));
    }

    #[test]
    fn test_load_or_builtin_keeps_builtins_on_empty_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "just prose, nothing recognizable").unwrap();

        let source = file.path().to_string_lossy().into_owned();
        let (collection, note) = PresetService::load_or_builtin(Some(source.as_str()));
        assert_eq!(collection.source(), &PresetSource::Builtin);
        assert!(note.unwrap().contains("no presets recognized"));
    }

    #[test]
    fn test_load_or_builtin_replaces_wholesale() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Solo 640x480").unwrap();

        let source = file.path().to_string_lossy().into_owned();
        let (collection, _) = PresetService::load_or_builtin(Some(source.as_str()));
        // Replaced, not merged: only the document's record remains
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(0).map(|p| p.name.as_str()), Some("Solo"));
    }

    #[test]
    fn test_preferred_index() {
        let profiles = vec![
            DeviceProfile::new("Other", 100.0, 200.0),
            DeviceProfile::new("Ven", 1080.0, 2400.0),
            DeviceProfile::new("zelos", 1080.0, 1920.0),
        ];
        // zelos outranks ven despite appearing later
        assert_eq!(PresetService::preferred_index(&profiles), 2);

        let no_match = vec![DeviceProfile::new("Other", 100.0, 200.0)];
        assert_eq!(PresetService::preferred_index(&no_match), 0);
    }
}
