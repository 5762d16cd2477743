//! Subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available icon styles
    Styles,

    /// Generate an icon set for a topic
    Generate {
        /// What the icons should depict (e.g. "Fruit")
        topic: String,

        /// Comma-separated palette, e.g. "#FF5733, #33FF57"
        #[arg(short, long, default_value = "")]
        colors: String,

        /// Style id (see `iconsmith styles`)
        #[arg(short, long, default_value_t = 1)]
        style: u32,

        /// Save every generated icon into this directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Open every generated icon in the browser
        #[arg(long)]
        open: bool,
    },

    /// Save a single icon by URL
    Export {
        /// URL of the icon
        url: String,

        /// Label used to derive the file name
        #[arg(short, long, default_value = "icon")]
        name: String,

        /// Target directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Open an icon URL in the browser
    View {
        /// URL of the icon
        url: String,
    },

    /// Interactive session: edit the prompt, generate, export
    Studio {
        /// Directory exports are saved into
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}
