//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Generate icon sets from a topic, a palette and a style.
#[derive(Parser)]
#[command(name = "iconsmith")]
#[command(about = "Generate and export AI icon sets")]
#[command(version)]
pub struct Cli {
    /// Base URL of the generation API (e.g. http://localhost:3000/api)
    #[arg(long = "api-url", env = "ICONSMITH_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Print URLs instead of launching the system browser
    #[arg(long = "no-browser", global = true)]
    pub no_browser: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
