//! Data model and loader for eXo-style packaging module manifests.
//!
//! A packaging module manifest describes one build unit: a named, versioned
//! `Module` grouping several `Project`s (Maven artifact coordinates) wired
//! together with ordered dependency edges. This crate provides the data
//! model, the built-in kernel module manifest, a TOML loader with version
//! placeholder interpolation, and a petgraph-backed graph view for
//! flattening and tree printing.
//!
//! This crate is intentionally free of async code and network I/O.

/// Packaging type assumed when a coordinate or project spec omits one.
pub const DEFAULT_PACKAGING: &str = "jar";

pub mod coordinate;
pub mod errors;
pub mod graph;
pub mod kernel;
pub mod manifest;
pub mod module;
pub mod project;
pub mod properties;
