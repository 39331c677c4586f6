//! Log output for the CLI.
//!
//! Info lines are printed bare so normal output reads like plain text;
//! warnings and errors get a colored tag. Everything goes to stderr, leaving
//! stdout for the list of written playlists.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            if verbose {
                write!(buf, "{} ", buf.timestamp_seconds())?;
            }
            match record.level() {
                Level::Error => writeln!(
                    buf,
                    "{} {}",
                    "error:".if_supports_color(Stderr, |t| t.red()),
                    record.args()
                ),
                Level::Warn => writeln!(
                    buf,
                    "{} {}",
                    "warning:".if_supports_color(Stderr, |t| t.yellow()),
                    record.args()
                ),
                Level::Info => writeln!(buf, "{}", record.args()),
                Level::Debug | Level::Trace => writeln!(
                    buf,
                    "{}",
                    record.args().if_supports_color(Stderr, |t| t.dimmed())
                ),
            }
        })
        .init();
}
