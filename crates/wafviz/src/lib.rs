//! Wafviz - architecture diagram generation for the AWS WAF log-analyzer product.
//!
//! The crate declares four hard-coded diagrams (the [`catalog`] module) over
//! the semantic model from `wafviz-core`, serializes them to Graphviz DOT,
//! and renders each to an image file. Layout and image encoding are
//! delegated to the Graphviz binary.

pub mod catalog;
pub mod config;

mod error;
mod export;
mod render;

pub use wafviz_core::{graph, icon, identifier, semantic};

pub use error::WafvizError;
pub use render::OutputFormat;

use std::path::{Path, PathBuf};

use log::{debug, info};

use wafviz_core::semantic::Diagram;

use config::AppConfig;
use export::DotBuilder;

/// Renderer for diagrams in the semantic model.
///
/// Carries the application configuration and turns a [`Diagram`] into DOT
/// text or an output file.
///
/// # Examples
///
/// ```rust,no_run
/// use wafviz::{DiagramRenderer, OutputFormat, catalog};
///
/// let renderer = DiagramRenderer::default();
/// let diagram = catalog::data_flow().expect("catalog declarations are valid");
///
/// let dot = renderer.render_dot(&diagram);
///
/// let path = renderer
///     .render_to_file(&diagram, OutputFormat::Png, "architecture".as_ref())
///     .expect("Failed to render");
/// ```
#[derive(Default)]
pub struct DiagramRenderer {
    config: AppConfig,
}

impl DiagramRenderer {
    /// Creates a renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Serializes a diagram to DOT text.
    ///
    /// Emission is deterministic: the same diagram always produces the same
    /// bytes.
    pub fn render_dot(&self, diagram: &Diagram) -> String {
        debug!(title = diagram.title(); "Serializing diagram to DOT");

        DotBuilder::new(diagram, self.config.style())
            .with_dpi(self.config.render().dpi())
            .build()
    }

    /// Renders a diagram into `output_dir` as `<file-stem>.<ext>`,
    /// overwriting any existing file, and returns the written path.
    ///
    /// # Errors
    ///
    /// Returns `WafvizError` if the output directory cannot be created, the
    /// file cannot be written, or the Graphviz invocation fails.
    pub fn render_to_file(
        &self,
        diagram: &Diagram,
        format: OutputFormat,
        output_dir: &Path,
    ) -> Result<PathBuf, WafvizError> {
        let dot = self.render_dot(diagram);

        std::fs::create_dir_all(output_dir)?;
        let path = output_dir.join(format!("{}.{}", diagram.file_stem(), format.extension()));

        render::render_to_file(&dot, format, self.config.render().engine(), &path)?;

        info!(
            title = diagram.title(),
            path = path.display().to_string();
            "Diagram rendered"
        );
        Ok(path)
    }
}
