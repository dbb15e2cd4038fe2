//! CLI logic for the wafviz diagram generator.
//!
//! The driver renders the four catalog diagrams in sequence, printing a
//! completion line after each and a summary block at the end. Failure in
//! any diagram is fatal and propagates to the caller; files already written
//! are left in place.

mod args;
mod config;

pub use args::{Args, FormatArg};

use std::path::Path;

use log::info;

use wafviz::{DiagramRenderer, WafvizError, catalog};

/// Human-readable names for the catalog diagrams, in render order.
const DIAGRAM_NAMES: [&str; 4] = [
    "Main architecture",
    "Data flow",
    "Security architecture",
    "Deployment architecture",
];

/// Run the wafviz driver.
///
/// Regenerates all four diagrams into the output directory, overwriting any
/// existing files.
///
/// # Errors
///
/// Returns `WafvizError` for:
/// - Configuration loading errors
/// - Diagram declaration errors
/// - Graphviz or file I/O errors
pub fn run(args: &Args) -> Result<(), WafvizError> {
    info!(
        output_dir = args.output_dir,
        format:? = args.format;
        "Generating diagram catalog"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    let renderer = DiagramRenderer::new(app_config);
    let format = args.format.into();
    let output_dir = Path::new(&args.output_dir);

    println!("Generating AWS WAF Log Analyzer architecture diagrams...");

    let diagrams = catalog::all()?;
    let mut written = Vec::with_capacity(diagrams.len());
    for (diagram, name) in diagrams.iter().zip(DIAGRAM_NAMES) {
        let path = renderer.render_to_file(diagram, format, output_dir)?;
        println!("✓ {name} diagram created");
        written.push(path);
    }

    println!();
    println!("All architecture diagrams generated successfully!");
    println!("Files created in {}/ directory:", args.output_dir);
    for path in &written {
        if let Some(file_name) = path.file_name() {
            println!("- {}", file_name.to_string_lossy());
        }
    }

    info!(count = written.len(); "Diagram catalog rendered");

    Ok(())
}
