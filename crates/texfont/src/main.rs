//! Command-line entry point: export font descriptions and build font packs.

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use log::info;
use texfont::{Config, SystemRunner, build, export, export_and_build};

/// Config file read when `--config` is not given.
const DEFAULT_CONFIG: &str = "texfont.json";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Command {
    /// Convert rasters to font descriptions.
    Export,
    /// Convert font descriptions to font packs.
    Build,
    /// Export, then build.
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    command: Command,
    config: PathBuf,
    out_dir: Option<PathBuf>,
    keep_bin: bool,
    profiles: Vec<String>,
}

fn usage() {
    eprintln!("Usage: texfont [--config <file>] <command> [options]");
    eprintln!("Commands:");
    eprintln!("  export    Convert rasters to font descriptions for convfont");
    eprintln!("  build     Convert font descriptions to font packs using convfont/convbin");
    eprintln!("  all       Export, then build");
    eprintln!("Options:");
    eprintln!("  --outdir <dir>      Output directory for font packs");
    eprintln!("  --keep-bin          Keep intermediate binary fonts");
    eprintln!("  --profile <id>      Only process this profile (repeatable)");
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut command = None;
    let mut config = PathBuf::from(DEFAULT_CONFIG);
    let mut out_dir: Option<PathBuf> = None;
    let mut keep_bin = false;
    let mut profiles = Vec::new();

    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                config = iter.next().ok_or("--config needs a file")?.into();
            }
            "--outdir" => {
                out_dir = Some(iter.next().ok_or("--outdir needs a directory")?.into());
            }
            "--keep-bin" => keep_bin = true,
            "--profile" => {
                profiles.push(iter.next().ok_or("--profile needs an id")?.clone());
            }
            "export" | "build" | "all" if command.is_none() => {
                command = Some(match arg.as_str() {
                    "export" => Command::Export,
                    "build" => Command::Build,
                    _ => Command::All,
                });
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    let command = command.ok_or("No command given")?;

    if command == Command::Export && (out_dir.is_some() || keep_bin) {
        return Err("--outdir and --keep-bin only apply to build and all".to_owned());
    }

    Ok(Args {
        command,
        config,
        out_dir,
        keep_bin,
        profiles,
    })
}

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            usage();
            process::exit(2);
        }
    };

    let mut config = Config::load(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;

    if let Some(out_dir) = args.out_dir {
        config.out_dir = out_dir;
    }
    config.keep_bin |= args.keep_bin;

    let profiles = config.select(&args.profiles)?;

    let outcomes = match args.command {
        Command::Export => {
            info!("--- STARTING EXPORT ---");
            export(&config, &profiles)
        }
        Command::Build => {
            info!("--- STARTING BUILD ---");
            build(&config, SystemRunner, &profiles).context("Build aborted")?
        }
        Command::All => {
            info!("--- STARTING EXPORT AND BUILD ---");
            export_and_build(&config, SystemRunner, &profiles).context("Build aborted")?
        }
    };

    let failed: Vec<&str> = outcomes
        .iter()
        .filter(|outcome| !outcome.is_ok())
        .map(|outcome| outcome.profile.as_str())
        .collect();

    if !failed.is_empty() {
        anyhow::bail!(
            "{} of {} profiles failed: {}",
            failed.len(),
            outcomes.len(),
            failed.join(", ")
        );
    }

    info!("--- COMPLETE ---");

    Ok(())
}
