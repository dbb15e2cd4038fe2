//! Export backends for diagrams.
//!
//! The only backend is DOT emission ([`dot`] module); rasterization of the
//! emitted DOT is handled by the [`render`](crate::render) module.

pub mod dot;

pub use dot::DotBuilder;
