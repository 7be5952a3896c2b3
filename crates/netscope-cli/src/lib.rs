//! CLI logic for the Netscope generator.
//!
//! A run writes the configuration bundle, renders the architecture diagram,
//! and prints a summary of what was generated.

pub mod error_adapter;

mod args;
mod config;
mod summary;

pub use args::Args;
pub use summary::format_summary;

use std::fs;

use chrono::Local;
use log::info;

use netscope::{DiagramBuilder, NetscopeError, bundle::Bundle};

/// Run the Netscope CLI application
///
/// The bundle is generated and written first, then the diagram is rendered.
/// Either pass can be skipped through [`Args`].
///
/// # Errors
///
/// Returns `NetscopeError` for:
/// - Configuration loading errors
/// - Inconsistent topology tables
/// - Rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), NetscopeError> {
    info!(
        output_dir:? = args.output_dir,
        diagram = args.diagram;
        "Generating monitoring stack",
    );

    let app_config = config::load_config(args.config.as_ref())?;

    fs::create_dir_all(&args.output_dir)
        .map_err(|err| NetscopeError::new_write_error(&args.output_dir, err))?;

    if args.no_bundle {
        info!("Skipping configuration bundle");
    } else {
        let bundle = Bundle::generate()?;
        bundle.write_to(&args.output_dir)?;
        println!("{}", format_summary(&bundle.summary(), &Local::now()));
    }

    if args.no_diagram {
        info!("Skipping architecture diagram");
    } else {
        let builder = DiagramBuilder::new(app_config);
        let topology = builder.builtin_topology()?;
        let path = args.diagram_path();
        builder.render_to_file(&topology, &path)?;
        println!("🖼️ Architecture diagram: {}", path.display());
    }

    Ok(())
}
