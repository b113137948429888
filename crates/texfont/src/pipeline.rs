use std::fs;
use std::io;
use std::path::PathBuf;

use texfont_convfont::build_document;
use texfont_core::{FontProfile, GridGeometry};
use texfont_pack::{PackError, Packager, ToolRunner};
use texfont_raster::{RasterError, RasterImage};
use texfont_symbols::SymbolTables;

use crate::Config;

/// Errors raised by a `texfont` run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error(transparent)]
    Pack(#[from] PackError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown profile '{0}'")]
    UnknownProfile(String),
}

/// What happened to one profile during a run.
#[derive(Debug)]
pub struct Outcome {
    /// Id of the profile.
    pub profile: String,
    /// The file produced for the profile, or why there is none.
    pub result: Result<PathBuf, Error>,
}

impl Outcome {
    fn new(profile: &FontProfile, result: Result<PathBuf, Error>) -> Self {
        if let Err(err) = &result {
            log::error!("Profile {} failed: {}", profile.id, err);
        }

        Self {
            profile: profile.id.clone(),
            result,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Extract the raster of `profile` and write its font description.
///
/// Returns the path of the written description.
pub fn export_profile(config: &Config, profile: &FontProfile) -> Result<PathBuf, Error> {
    log::info!("Processing profile: {}...", profile.id.to_uppercase());

    let raster_path = config.raster_path(profile);
    let raster = RasterImage::open(&raster_path)?;

    let document = build_document(
        &raster,
        &GridGeometry::STANDARD,
        profile,
        SymbolTables::BUILTIN,
        &raster_path.display().to_string(),
    );

    let out = config.document_path(profile);
    fs::write(&out, document.to_text()).map_err(|source| Error::Io {
        path: out.clone(),
        source,
    })?;

    log::info!("  -> Wrote {}", out.display());

    Ok(out)
}

/// Write the font description of every profile.
///
/// Profiles are independent: one failing does not stop the others.
pub fn export(config: &Config, profiles: &[&FontProfile]) -> Vec<Outcome> {
    profiles
        .iter()
        .map(|profile| Outcome::new(profile, export_profile(config, profile)))
        .collect()
}

/// Compile and package the already exported description of every profile.
///
/// Fails without touching anything if a tool is missing. Otherwise each
/// profile is built independently.
pub fn build<R: ToolRunner>(
    config: &Config,
    runner: R,
    profiles: &[&FontProfile],
) -> Result<Vec<Outcome>, Error> {
    let packager = packager(config, runner);
    packager.check_tools()?;

    Ok(profiles
        .iter()
        .map(|profile| Outcome::new(profile, pack_profile(config, &packager, profile)))
        .collect())
}

/// Export and then build every profile.
///
/// Tools are checked before anything is exported, so a missing tool leaves
/// no partial output behind.
pub fn export_and_build<R: ToolRunner>(
    config: &Config,
    runner: R,
    profiles: &[&FontProfile],
) -> Result<Vec<Outcome>, Error> {
    let packager = packager(config, runner);
    packager.check_tools()?;

    Ok(profiles
        .iter()
        .map(|profile| {
            let result = export_profile(config, profile)
                .and_then(|_| pack_profile(config, &packager, profile));
            Outcome::new(profile, result)
        })
        .collect())
}

fn packager<R: ToolRunner>(config: &Config, runner: R) -> Packager<R> {
    Packager::new(runner, config.tools.clone(), &config.out_dir).keep_bin(config.keep_bin)
}

fn pack_profile<R: ToolRunner>(
    config: &Config,
    packager: &Packager<R>,
    profile: &FontProfile,
) -> Result<PathBuf, Error> {
    let archive = packager.pack(
        profile,
        &config.document_path(profile),
        &config.blob_path(profile),
    )?;

    Ok(archive)
}
