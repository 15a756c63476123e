use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use sash_core::logging::{debug, info};
use sash_layout::LayoutConfig;
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::layouts::{Preset, load_config};
use crate::script::{FrameScript, run_script};

#[derive(Debug, Parser)]
#[command(
    name = "sash-replay",
    about = "Replay recorded pointer input against a splitter layout",
    version
)]
pub struct Cli {
    /// JSON frame script to replay.
    #[arg(long)]
    pub script: PathBuf,

    /// JSON file with hit-testing and drag tuning.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Layout to drive.
    #[arg(long, value_enum, default_value_t = Preset::TwoPane)]
    pub preset: Preset,
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init in the same process keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

pub fn run_from_env() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}

/// Replay the script and write one JSON line per frame to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LayoutConfig::default(),
    };
    let script = FrameScript::load(&cli.script)?;
    let mut manager = cli.preset.manager(config)?;
    info!(
        preset = ?cli.preset,
        frames = script.frames.len(),
        "replaying script"
    );

    for record in run_script(&mut manager, &script) {
        debug!(frame = record.frame, cursor = ?record.cursor, "frame replayed");
        serde_json::to_writer(&mut *out, &record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
