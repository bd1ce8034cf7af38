use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

mod app;
mod logging;
mod parse;
mod player;
mod storage;
mod view;

/// Console minesweeper: reveal every safe cell without hitting a mine.
#[derive(Debug, Parser)]
#[command(name = "buscaminas", version)]
struct Cli {
    /// Seed for the mine layout; drawn from entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory where saved games are stored.
    #[arg(long, default_value = "saves")]
    save_dir: PathBuf,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbosity.log_level_filter());

    let mut app = app::App::new(cli.seed, storage::SaveManager::new(cli.save_dir));
    app.run()
}
