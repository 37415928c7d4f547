//! Stable DTOs and error types used across the goport workspace.
//!
//! This crate is intentionally boring:
//! - hosts and resolved package identities
//! - dependency and checksum records
//! - the bundle handed to recipe renderers
//! - the error taxonomy shared by the resolution pipeline

#![forbid(unsafe_code)]

pub mod bundle;
pub mod checksum;
pub mod dependency;
pub mod error;
pub mod host;
pub mod identity;
pub mod ids;
pub mod version;

pub use bundle::{ChecksumEntry, RecipeBundle, SCHEMA_BUNDLE_V1};
pub use checksum::ChecksumRecord;
pub use dependency::DependencyRecord;
pub use error::PortError;
pub use host::Host;
pub use identity::ResolvedIdentity;
pub use version::split_version_prefix;
