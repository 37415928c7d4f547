//! Use case orchestration for goport.
//!
//! This crate provides the application layer: it drives identity resolution, dependency
//! extraction and checksum computation for each requested package, and renders the result.
//! It is intentionally thin and delegates heavy lifting to the library crates.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod render;
mod resolve;

pub use render::{OutputFormat, render_bundle, render_bundles};
pub use resolve::{
    PackageRequest, PipelineOptions, pair_arguments, resolve_batch, resolve_package,
};
