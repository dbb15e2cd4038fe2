//! Error types for wafviz operations.
//!
//! This module provides the main error type [`WafvizError`] which wraps the
//! error conditions that can occur while declaring, exporting, or rendering
//! a diagram.

use std::io;

use thiserror::Error;

use wafviz_core::GraphError;

/// The main error type for wafviz operations.
///
/// Failures are fatal by design: the tool regenerates documentation images,
/// so there is no recovery or partial-success state.
#[derive(Debug, Error)]
pub enum WafvizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Graphviz rendering failed: {0}")]
    Render(String),
}
