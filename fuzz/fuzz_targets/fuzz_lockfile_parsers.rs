//! Fuzz target for the go.sum, glide.lock, Gopkg.lock and GLOCKFILE parsers.
//!
//! Goal: The parsers should **never panic** on any input.
//! Malformed lock files are reported as "format absent", never as a crash.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_lockfile_parsers
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = goport_manifest::fuzz::parse_all(data);
});
