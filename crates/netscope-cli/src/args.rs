//! Command-line argument definitions for the Netscope CLI.
//!
//! Every argument is optional. Running without any reproduces the default
//! generation: the full bundle and `network_architecture.png` in the current
//! directory.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the Netscope generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory that receives the bundle and the diagram
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Diagram file name, relative to the output directory (`.svg` selects SVG)
    #[arg(short, long, default_value = "network_architecture.png")]
    pub diagram: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Skip rendering the architecture diagram
    #[arg(long)]
    pub no_diagram: bool,

    /// Skip writing the configuration bundle
    #[arg(long)]
    pub no_bundle: bool,
}

impl Args {
    /// Full path of the diagram output.
    pub fn diagram_path(&self) -> PathBuf {
        self.output_dir.join(&self.diagram)
    }
}
