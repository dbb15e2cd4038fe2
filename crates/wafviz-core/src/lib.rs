//! Wafviz Core Types and Definitions
//!
//! This crate provides the foundational types for the wafviz architecture
//! diagram generator. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Icons**: Service-category definitions mapped to visual attributes ([`icon`] module)
//! - **Semantic**: The diagram model and its builder ([`semantic`] module)
//! - **Graph**: The validated directed graph behind a built diagram ([`graph`] module)

pub mod error;
pub mod graph;
pub mod icon;
pub mod identifier;
pub mod semantic;

pub use error::GraphError;
