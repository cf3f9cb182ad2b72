use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use vaultbot::config_io;
use vaultbot::services::{log_dirs, tracing_setup};
use vaultbot::ui::App;

/// The Hacker's Vault: repair the robot's chip from a terminal.
#[derive(Parser, Debug)]
#[command(name = "vaultbot", version, about)]
struct Cli {
    /// Path to a config file (defaults to ~/.config/vaultbot/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start on the missing-chip screen instead of the repair terminal
    #[arg(long)]
    locked: bool,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns stdout, so logs go to a file under the XDG state dir.
    tracing_setup::init_global(&log_dirs::session_log_path(), cli.log_level);
    log_dirs::cleanup_stale_logs();

    let config = config_io::load(cli.config.as_deref());
    tracing::info!(chip_found = !cli.locked, "starting vault terminal");

    let terminal = ratatui::init();
    let mut app = App::new(&config, !cli.locked);
    let result = app.run(terminal);
    ratatui::restore();
    result
}
