//! Device preset data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One named device preset: resolution plus optional density and diagonal.
///
/// # Validation
///
/// - Name must be non-empty
/// - Width and height are always present and positive
/// - Density and diagonal are either absent or positive; a parsed value of
///   zero is stored as absent so it can never shadow the density resolution
///   order in the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Human-readable device name (e.g., "zelos", "27\" QHD")
    pub name: String,
    /// Horizontal resolution in device pixels
    pub width_px: f64,
    /// Vertical resolution in device pixels
    pub height_px: f64,
    /// Physical pixel density in pixels per inch, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_ppi: Option<f64>,
    /// Physical diagonal in inches, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagonal_in: Option<f64>,
}

impl DeviceProfile {
    /// Creates a new profile with the given name and resolution.
    pub fn new(name: impl Into<String>, width_px: f64, height_px: f64) -> Self {
        Self {
            name: name.into(),
            width_px,
            height_px,
            density_ppi: None,
            diagonal_in: None,
        }
    }

    /// Sets the pixel density for this profile.
    #[must_use]
    pub const fn with_density(mut self, ppi: f64) -> Self {
        self.density_ppi = Some(ppi);
        self
    }

    /// Sets the physical diagonal for this profile.
    #[must_use]
    pub const fn with_diagonal(mut self, diagonal_in: f64) -> Self {
        self.diagonal_in = Some(diagonal_in);
        self
    }

    /// Human-readable selector label, e.g. `zelos (1080x1920 @ 401ppi, 5.5")`.
    #[must_use]
    pub fn label(&self) -> String {
        let mut label = format!("{} ({}x{}", self.name, self.width_px, self.height_px);
        if let Some(ppi) = self.density_ppi {
            label.push_str(&format!(" @ {ppi}ppi"));
        }
        if let Some(diag) = self.diagonal_in {
            label.push_str(&format!(", {diag}\""));
        }
        label.push(')');
        label
    }
}

/// Where a preset collection was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetSource {
    /// The compiled-in default list
    Builtin,
    /// A preset document read from disk
    File(PathBuf),
    /// A preset document fetched over HTTP(S)
    Url(String),
    /// Raw text supplied directly (e.g., an upload)
    Upload,
}

impl fmt::Display for PresetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
            Self::Upload => write!(f, "upload"),
        }
    }
}

/// An ordered, immutable collection of device presets.
///
/// Built once from the compiled-in list and only ever replaced wholesale by a
/// successfully parsed external document; never merged field-by-field.
#[derive(Debug, Clone)]
pub struct PresetCollection {
    profiles: Vec<DeviceProfile>,
    source: PresetSource,
    loaded_at: DateTime<Utc>,
}

impl PresetCollection {
    /// Creates a collection from parsed profiles, stamping the load time.
    #[must_use]
    pub fn new(profiles: Vec<DeviceProfile>, source: PresetSource) -> Self {
        Self {
            profiles,
            source,
            loaded_at: Utc::now(),
        }
    }

    /// The profiles in source order.
    #[must_use]
    pub fn profiles(&self) -> &[DeviceProfile] {
        &self.profiles
    }

    /// Returns the profile at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DeviceProfile> {
        self.profiles.get(index)
    }

    /// Number of profiles in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the collection holds no profiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Where this collection came from.
    #[must_use]
    pub const fn source(&self) -> &PresetSource {
        &self.source
    }

    /// When this collection was loaded.
    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
