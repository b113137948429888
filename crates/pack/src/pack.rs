use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use texfont_core::FontProfile;

use crate::{PackError, ToolOutput, ToolRunner};

/// File extension of packaged font archives.
pub const ARCHIVE_EXTENSION: &str = "8xv";

/// Code page the compiler is told the description uses.
const CODE_PAGE: &str = "Win-1252";

/// Program names of the external tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolNames {
    /// Font description compiler.
    pub compiler: String,
    /// Binary packager.
    pub packager: String,
}

impl Default for ToolNames {
    fn default() -> Self {
        Self {
            compiler: "convfont".to_owned(),
            packager: "convbin".to_owned(),
        }
    }
}

/// Compiles and packages font descriptions, one profile at a time.
pub struct Packager<R> {
    runner: R,
    tools: ToolNames,
    out_dir: PathBuf,
    keep_bin: bool,
}

impl<R: ToolRunner> Packager<R> {
    /// A packager writing archives to `out_dir` and removing intermediate
    /// binaries once packaged.
    pub fn new(runner: R, tools: ToolNames, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            tools,
            out_dir: out_dir.into(),
            keep_bin: false,
        }
    }

    /// Keep the compiler's binary output after packaging.
    pub fn keep_bin(mut self, keep_bin: bool) -> Self {
        self.keep_bin = keep_bin;
        self
    }

    /// Make sure both tools are available. Call this before producing any
    /// output, so a missing tool never leaves a partial build behind.
    pub fn check_tools(&self) -> Result<(), PackError> {
        for tool in [&self.tools.compiler, &self.tools.packager] {
            if !self.runner.locate(tool) {
                return Err(PackError::MissingTool { tool: tool.clone() });
            }
        }

        Ok(())
    }

    /// Where the archive for `profile` ends up.
    pub fn archive_path(&self, profile: &FontProfile) -> PathBuf {
        self.out_dir
            .join(format!("{}.{}", profile.pack_name, ARCHIVE_EXTENSION))
    }

    /// Compile `document` into `blob`, then package `blob` into the profile's
    /// archive. Returns the archive path.
    pub fn pack(
        &self,
        profile: &FontProfile,
        document: &Path,
        blob: &Path,
    ) -> Result<PathBuf, PackError> {
        log::info!("Building pack: {}", profile.id.to_uppercase());

        fs::create_dir_all(&self.out_dir).map_err(|source| PackError::Io {
            path: self.out_dir.clone(),
            source,
        })?;

        self.invoke(&self.tools.compiler, &compiler_args(profile, document, blob))?;

        let archive = self.archive_path(profile);
        self.invoke(&self.tools.packager, &packager_args(profile, blob, &archive))?;

        if !self.keep_bin {
            fs::remove_file(blob).map_err(|source| PackError::Io {
                path: blob.to_owned(),
                source,
            })?;
        }

        log::info!("  -> Wrote {}", archive.display());

        Ok(archive)
    }

    fn invoke(&self, tool: &str, args: &[String]) -> Result<ToolOutput, PackError> {
        let output = self.runner.run(tool, args)?;

        if !output.success() {
            return Err(PackError::ToolFailed {
                tool: tool.to_owned(),
                status: output.status,
                stdout: output.stdout,
                stderr: output.stderr,
            });
        }

        if !output.stdout.is_empty() {
            log::debug!("{}: {}", tool, output.stdout.trim_end());
        }

        Ok(output)
    }
}

/// Arguments for compiling `document` into a font pack binary at `blob`.
fn compiler_args(profile: &FontProfile, document: &Path, blob: &Path) -> Vec<String> {
    let document = document.display().to_string();

    let mut args = strings(&[
        "-o",
        "fontpack",
        "-N",
        &profile.display_name,
        "-P",
        CODE_PAGE,
        "-D",
        &profile.description,
        "-t",
        &document,
        "-a",
        "0",
    ]);

    args.extend(profile.style_flags.iter().cloned());
    args.push(blob.display().to_string());

    args
}

/// Arguments for packaging `blob` into the archive at `archive`.
fn packager_args(profile: &FontProfile, blob: &Path, archive: &Path) -> Vec<String> {
    let blob = blob.display().to_string();
    let archive = archive.display().to_string();

    strings(&[
        "-r",
        "-k",
        ARCHIVE_EXTENSION,
        "-n",
        &profile.pack_name,
        "-i",
        &blob,
        "-o",
        &archive,
    ])
}

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}
