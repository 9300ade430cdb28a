//! Command line of the `mingpan` binary: a report JSON in, a PNG out.

use clap::Parser;

/// Command-line arguments for the Mingpan report renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input report record (JSON)
    #[arg(help = "Path to the input report record")]
    pub input: String,

    /// Path to the output PNG file
    #[arg(short, long, default_value = "out.png")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
