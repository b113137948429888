//! Settings for a `texfont` run, optionally read from a JSON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use texfont_core::FontProfile;
use texfont_pack::ToolNames;

use crate::pipeline::Error;
use crate::profiles;

/// Everything a run needs besides the rasters themselves.
///
/// Missing fields fall back to their defaults, so a config file only needs
/// to mention what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the rasters. Font descriptions and intermediate
    /// binaries are written here too.
    pub asset_dir: PathBuf,
    /// Directory receiving the packaged archives.
    pub out_dir: PathBuf,
    /// Keep intermediate binaries after packaging.
    pub keep_bin: bool,
    pub tools: ToolNames,
    /// The font profile registry.
    pub profiles: Vec<FontProfile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("tools"),
            out_dir: PathBuf::from("assets"),
            keep_bin: false,
            tools: ToolNames::default(),
            profiles: profiles::builtin(),
        }
    }
}

impl Config {
    /// Read the config file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_owned(),
                    source,
                });
            }
        };

        let config = serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_owned(),
            source,
        })?;

        log::info!("Configuration loaded from {}", path.display());

        Ok(config)
    }

    /// Profiles with the given ids, in the order given. No ids means all
    /// profiles.
    pub fn select(&self, ids: &[String]) -> Result<Vec<&FontProfile>, Error> {
        if ids.is_empty() {
            return Ok(self.profiles.iter().collect());
        }

        ids.iter()
            .map(|id| {
                self.profiles
                    .iter()
                    .find(|profile| &profile.id == id)
                    .ok_or_else(|| Error::UnknownProfile(id.clone()))
            })
            .collect()
    }

    pub fn raster_path(&self, profile: &FontProfile) -> PathBuf {
        self.asset_dir.join(&profile.raster)
    }

    pub fn document_path(&self, profile: &FontProfile) -> PathBuf {
        self.asset_dir.join(&profile.document)
    }

    pub fn blob_path(&self, profile: &FontProfile) -> PathBuf {
        self.asset_dir.join(&profile.blob)
    }
}
