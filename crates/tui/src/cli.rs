//! Command line options.

use std::path::PathBuf;

use clap::Parser;

/// Two-player Kniffel for the terminal
#[derive(Parser, Debug)]
#[command(name = "kniffel")]
#[command(about = "Two-player Kniffel for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name of the first player (longer names are cut to ten characters)
    #[arg(long, default_value = "Player 1")]
    pub player_one: String,

    /// Name of the second player (longer names are cut to ten characters)
    #[arg(long, default_value = "Player 2")]
    pub player_two: String,

    /// Save file path; a `.json` extension is added when missing
    #[arg(short = 's', long, env = "KNIFFEL_SAVE_FILE", default_value = "save")]
    pub save_file: PathBuf,
}
