//! Command-line interface for the tic-tac-toe terminal app.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Game mode: pvp or pvc
    #[arg(long)]
    pub mode: Option<String>,

    /// Computer difficulty: easy or hard
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Color theme: dark or light
    #[arg(long)]
    pub theme: Option<String>,

    /// RNG seed for reproducible computer games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay in milliseconds before the computer replies (0 disables)
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
