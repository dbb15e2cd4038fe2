//! Graphviz invocation and output file handling.
//!
//! Raster and vector output go through [`graphviz_rust::exec_dot`], which
//! shells out to the Graphviz binary selected by the configured layout
//! engine. DOT output is written directly, with no external dependency.

use std::{fs, path::Path};

use graphviz_rust::cmd::{CommandArg, Format};
use log::debug;

use crate::error::WafvizError;

/// Output format of a rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Raster image (requires a Graphviz installation).
    #[default]
    Png,
    /// Vector image (requires a Graphviz installation).
    Svg,
    /// Raw DOT text, written without invoking Graphviz.
    Dot,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Dot => "dot",
        }
    }
}

/// Renders a DOT string to the given path in the given format.
///
/// Overwrites any existing file at the path. For [`OutputFormat::Dot`] this
/// is a plain file write; otherwise Graphviz is executed with `-K<engine>`
/// and its failure (missing binary, layout error, write error) propagates
/// as [`WafvizError::Render`].
pub fn render_to_file(
    dot: &str,
    format: OutputFormat,
    engine: &str,
    path: &Path,
) -> Result<(), WafvizError> {
    debug!(
        path = path.display().to_string(),
        format:? = format,
        engine = engine;
        "Rendering diagram"
    );

    match format {
        OutputFormat::Dot => {
            fs::write(path, dot)?;
        }
        OutputFormat::Png | OutputFormat::Svg => {
            let graphviz_format = match format {
                OutputFormat::Png => Format::Png,
                OutputFormat::Svg => Format::Svg,
                OutputFormat::Dot => unreachable!("handled above"),
            };

            graphviz_rust::exec_dot(
                dot.to_string(),
                vec![
                    CommandArg::Custom(format!("-K{engine}")),
                    graphviz_format.into(),
                    CommandArg::Output(path.display().to_string()),
                ],
            )
            .map_err(|err| WafvizError::Render(err.to_string()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions() {
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::Svg.extension(), "svg");
        assert_eq!(OutputFormat::Dot.extension(), "dot");
    }

    #[test]
    fn test_dot_format_writes_without_graphviz() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("out.dot");

        render_to_file("digraph \"x\" {\n}\n", OutputFormat::Dot, "dot", &path)
            .expect("DOT write should not require Graphviz");

        let written = fs::read_to_string(&path).expect("Output file should exist");
        assert!(written.starts_with("digraph"));
    }
}
