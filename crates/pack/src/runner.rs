use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::PackError;

/// Captured result of one external tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, or `None` if the tool was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Capability to find and run external programs.
pub trait ToolRunner {
    /// Is `tool` available to [ToolRunner::run]?
    fn locate(&self, tool: &str) -> bool;

    /// Run `tool` to completion with `args`, capturing its output.
    ///
    /// A tool that starts but exits unsuccessfully is not an error here; the
    /// caller inspects [ToolOutput::status].
    fn run(&self, tool: &str, args: &[String]) -> Result<ToolOutput, PackError>;
}

impl<T: ToolRunner + ?Sized> ToolRunner for &T {
    fn locate(&self, tool: &str) -> bool {
        (**self).locate(tool)
    }

    fn run(&self, tool: &str, args: &[String]) -> Result<ToolOutput, PackError> {
        (**self).run(tool, args)
    }
}

/// Runs tools as child processes of this one.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn locate(&self, tool: &str) -> bool {
        find_in_path(tool).is_some()
    }

    fn run(&self, tool: &str, args: &[String]) -> Result<ToolOutput, PackError> {
        log::info!("Running: {} {}", tool, args.join(" "));

        let output = Command::new(tool)
            .args(args)
            .output()
            .map_err(|source| PackError::Spawn {
                tool: tool.to_owned(),
                source,
            })?;

        Ok(ToolOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Resolve `tool` the way a shell would: as a path if it contains a
/// separator, otherwise by searching `PATH`. On Windows each `PATHEXT`
/// suffix is tried as well.
pub fn find_in_path(tool: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH").unwrap_or_default();
    let extensions = executable_extensions(env::var_os("PATHEXT"));

    find_in(tool, &paths, &extensions)
}

/// Suffixes appended to a bare tool name when searching. Only Windows uses
/// `PATHEXT`; everywhere else the name must match exactly.
fn executable_extensions(pathext: Option<OsString>) -> Vec<OsString> {
    if !cfg!(windows) {
        return Vec::new();
    }

    let pathext = pathext.unwrap_or_else(|| OsString::from(".COM;.EXE;.BAT;.CMD"));
    pathext_list(&pathext)
}

fn pathext_list(pathext: &OsStr) -> Vec<OsString> {
    pathext
        .to_string_lossy()
        .split(';')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(OsString::from)
        .collect()
}

/// Search `paths` (a `PATH`-style list) for `tool`, trying the bare name
/// first and then `tool` + each of `extensions`.
fn find_in(tool: &str, paths: &OsStr, extensions: &[OsString]) -> Option<PathBuf> {
    let direct = Path::new(tool);
    if direct.components().count() > 1 {
        return candidates(direct, extensions).find(|candidate| candidate.is_file());
    }

    if paths.is_empty() {
        return None;
    }

    env::split_paths(paths)
        .flat_map(|dir| candidates(&dir.join(tool), extensions).collect::<Vec<_>>())
        .find(|candidate| candidate.is_file())
}

fn candidates<'a>(
    base: &'a Path,
    extensions: &'a [OsString],
) -> impl Iterator<Item = PathBuf> + 'a {
    let suffixed = extensions.iter().map(move |ext| {
        let mut name = base.as_os_str().to_owned();
        name.push(ext);
        PathBuf::from(name)
    });

    std::iter::once(base.to_owned()).chain(suffixed)
}
