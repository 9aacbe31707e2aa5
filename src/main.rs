//! Text-based card game: main binary.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tcg::core::config_file::DEFAULT_CONFIG_FILE;
use tcg::core::GameRng;
use tcg::ui::TextUi;

#[derive(Parser)]
#[command(name = "tcg")]
#[command(about = "Turn-based mana and damage card game for two or more players", long_about = None)]
struct Cli {
    /// Settings file, read at startup and rewritten after every edit
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Seed for seating and shuffling (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    tracing::debug!(seed = rng.seed(), config = %cli.config.display(), "starting");

    let stdin = io::stdin();
    let mut ui = TextUi::new(stdin.lock(), io::stdout(), io::stderr(), &cli.config, rng)
        .context("failed to write startup messages")?;
    ui.main_menu().context("terminal I/O failed")?;
    Ok(())
}
