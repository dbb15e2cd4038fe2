//! Configuration types for wafviz rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are rendered. All types implement [`serde::Deserialize`] for loading from
//! TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and style settings.
//! - [`RenderConfig`] - Controls the Graphviz layout engine and resolution.
//! - [`StyleConfig`] - Controls visual styling such as background color and font.
//!
//! # Example
//!
//! ```
//! # use wafviz::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.render().engine(), "dot");
//! ```

use serde::Deserialize;

/// Top-level configuration combining render and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render and style configurations.
    pub fn new(render: RenderConfig, style: StyleConfig) -> Self {
        Self { render, style }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Graphviz invocation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Graphviz layout engine (`dot`, `neato`, `fdp`, ...).
    #[serde(default = "default_engine")]
    engine: String,

    /// Raster resolution for PNG output, in dots per inch.
    #[serde(default)]
    dpi: Option<u32>,
}

fn default_engine() -> String {
    "dot".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            dpi: None,
        }
    }
}

impl RenderConfig {
    /// Returns the Graphviz layout engine name.
    pub fn engine(&self) -> &str {
        &self.engine
    }

    /// Returns the configured DPI, if any.
    pub fn dpi(&self) -> Option<u32> {
        self.dpi
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Fields that are not set fall back to Graphviz defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color for diagrams, as a Graphviz color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Font family used for node and edge labels.
    #[serde(default)]
    fontname: Option<String>,
}

impl StyleConfig {
    /// Returns the background color, if configured.
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    /// Returns the label font family, if configured.
    pub fn fontname(&self) -> Option<&str> {
        self.fontname.as_deref()
    }
}
