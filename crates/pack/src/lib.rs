//! `texfont-pack` turns font descriptions into calculator-loadable font packs.
//!
//! Two external programs do the actual work: a font compiler (`convfont`)
//! producing a binary font, and a packager (`convbin`) wrapping that binary
//! into an archive. Both are reached through the [ToolRunner] port, so the
//! rest of the pipeline can be exercised without them installed.

use std::io;
use std::path::PathBuf;

mod pack;
mod runner;

pub use pack::{ARCHIVE_EXTENSION, Packager, ToolNames};
pub use runner::{SystemRunner, ToolOutput, ToolRunner, find_in_path};

/// Errors raised while building font packs.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("required tool '{tool}' not found in PATH")]
    MissingTool { tool: String },

    #[error("failed to start '{tool}': {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("'{tool}' failed with {}:\n{stdout}{stderr}", describe_status(.status))]
    ToolFailed {
        tool: String,
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {}", code),
        None => "no exit status".to_owned(),
    }
}
