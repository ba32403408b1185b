//! Filesystem-based panel batch loader.
//!
//! Reads a list of *candidate* panels from disk. Nothing is validated here:
//! a panel with no section or material still loads, so the service can
//! report exactly what is wrong with it.
//!
//! # Formats
//!
//! Chosen by file extension.
//!
//! `.json`, either a bare array or an object with a `panels` array:
//!
//! ```json
//! [
//!   { "id": 1, "row": 5, "column": 9, "section": "West",
//!     "tracking": true, "material": "cd-te", "yearInstalled": 2011 }
//! ]
//! ```
//!
//! `.toml`, an array of `[[panels]]` tables:
//!
//! ```toml
//! [[panels]]
//! row            = 5
//! column         = 9
//! section        = "West"
//! material       = "CD_TE"
//! year_installed = 2011
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use solarfarm_core::domain::Panel;

/// Failure to read or parse a panel batch file.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported panel file format: {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },
}

impl LoaderError {
    /// The file the error is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. }
            | Self::Json { path, .. }
            | Self::Toml { path, .. }
            | Self::UnsupportedFormat { path } => path,
        }
    }

    /// Whether the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// `{ "panels": [...] }` in JSON, `[[panels]]` in TOML.
#[derive(Deserialize)]
struct PanelBatch {
    #[serde(default)]
    panels: Vec<Panel>,
}

/// Reads candidate panels from a `.json` or `.toml` file.
#[derive(Debug, Clone)]
pub struct PanelFileLoader {
    path: PathBuf,
}

impl PanelFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every panel in the file, in file order.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Vec<Panel>, LoaderError> {
        let format = Format::of(&self.path).ok_or_else(|| LoaderError::UnsupportedFormat {
            path: self.path.clone(),
        })?;

        let content = fs::read_to_string(&self.path).map_err(|source| LoaderError::Io {
            path: self.path.clone(),
            source,
        })?;

        let panels = match format {
            Format::Json => {
                // Pick the shape up front so a bad field keeps its own error.
                let parsed = if content.trim_start().starts_with('[') {
                    serde_json::from_str::<Vec<Panel>>(&content)
                } else {
                    serde_json::from_str::<PanelBatch>(&content).map(|batch| batch.panels)
                };
                parsed.map_err(|source| LoaderError::Json {
                    path: self.path.clone(),
                    source,
                })?
            }
            Format::Toml => {
                toml::from_str::<PanelBatch>(&content)
                    .map_err(|source| LoaderError::Toml {
                        path: self.path.clone(),
                        source,
                    })?
                    .panels
            }
        };

        debug!(count = panels.len(), "Loaded panel batch");
        Ok(panels)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
