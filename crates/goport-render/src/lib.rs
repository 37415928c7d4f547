//! Rendering of resolved bundles into recipe text.

#![forbid(unsafe_code)]

mod portfile;

pub use portfile::{render_checksums, render_go_vendors, render_portfile};
