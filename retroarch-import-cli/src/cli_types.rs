//! CLI type definitions.

use clap::Parser;

#[derive(Parser)]
#[command(name = "retroarch-import-playlist", version)]
#[command(
    about = "Adapt and import foreign RetroArch playlists into RetroArch",
    long_about = None
)]
pub(crate) struct Cli {
    /// .lpl playlist input files
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Configuration file with the import rules. A bare name without a
    /// directory or extension is looked up as `<name>.ini` in the config
    /// directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Destination directory for the modified playlists
    #[arg(short, long, value_name = "DIR")]
    pub output_directory: Option<String>,

    /// Only show warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,
}
