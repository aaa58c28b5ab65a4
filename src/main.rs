mod headless;
mod replay;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use viewport::config::{ConfigError, ViewerConfig};
use viewport::frame::FrameError;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid session script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("replay failed: {0}")]
    Frame(#[from] FrameError),
}

#[derive(Parser, Debug)]
#[command(
    name = "mapview",
    about = "Replay a recorded input session against the map viewer camera"
)]
struct Cli {
    /// JSON session script to replay.
    #[arg(long, env = "MAPVIEW_SCRIPT")]
    script: PathBuf,

    /// Game data directory; overrides `MAPVIEW_DATA_PATH`.
    #[arg(long)]
    data_path: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "mapview failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, AppError> {
    let mut config = ViewerConfig::from_env()?;
    if let Some(path) = cli.data_path {
        config.data_path = path;
    }

    let raw = std::fs::read_to_string(&cli.script)
        .map_err(|source| AppError::Read { path: cli.script.clone(), source })?;
    let script: replay::Script = serde_json::from_str(&raw)?;
    tracing::info!(
        frames = script.frames.len(),
        title = %config.window.title,
        pan_button = ?config.pan_button,
        resize_policy = ?config.resize_policy,
        "replaying session"
    );

    let outcome = replay::run(&script, config)?;
    Ok(serde_json::to_string_pretty(&outcome)?)
}
