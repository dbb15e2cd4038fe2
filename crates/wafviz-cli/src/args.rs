//! Command-line argument definitions for the wafviz driver.
//!
//! Running with no arguments regenerates all four diagrams as PNG into the
//! `architecture/` directory; every option below only adjusts where and how.

use clap::{Parser, ValueEnum};

use wafviz::OutputFormat;

/// Command-line arguments for the wafviz diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory the diagram files are written into
    #[arg(short, long, default_value = "architecture")]
    pub output_dir: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: FormatArg,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Output format selection.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatArg {
    /// Raster image (requires Graphviz)
    #[default]
    Png,
    /// Vector image (requires Graphviz)
    Svg,
    /// Raw DOT text (no Graphviz needed)
    Dot,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Png => OutputFormat::Png,
            FormatArg::Svg => OutputFormat::Svg,
            FormatArg::Dot => OutputFormat::Dot,
        }
    }
}
