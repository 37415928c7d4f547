//! Archive checksums.
//!
//! [`archive_url`] knows where each host serves source archives; [`compute_checksum`]
//! downloads one and digests it.

#![forbid(unsafe_code)]

mod engine;
mod locate;

pub use engine::{checksum_bytes, checksum_or_unavailable, compute_checksum};
pub use locate::{ArchiveRole, archive_url};
