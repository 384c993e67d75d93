mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sst::io::{FileStore, TerminalIO};
use sst::Game;

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();
    let options = args.game_options();
    tracing::info!(seed = options.seed, save_dir = %args.save_dir.display(), "starting");

    let store = FileStore::new(&args.save_dir);
    let mut game = Game::new(options, store).with_log_editor(cli::TerminalLogEditor);
    game.run(&mut TerminalIO, &mut TerminalIO)
        .context("terminal session failed")?;

    println!();
    println!("GOODBYE, CAPTAIN.");
    Ok(())
}
