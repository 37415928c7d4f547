//! Fuzz target for the static host rules.
//!
//! Coordinates are built from a known host plus arbitrary segments so the fuzzer spends
//! its time inside the per-host rules rather than on the vanity fallback.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_coordinate_rules
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

const HOSTS: [&str; 5] = [
    "github.com",
    "bitbucket.org",
    "golang.org",
    "gopkg.in",
    "google.golang.org",
];

#[derive(Arbitrary, Debug)]
struct Coordinate {
    host: u8,
    segments: Vec<String>,
}

fuzz_target!(|input: Coordinate| {
    let host = HOSTS[usize::from(input.host) % HOSTS.len()];
    let mut coordinate = host.to_string();
    for segment in &input.segments {
        coordinate.push('/');
        coordinate.push_str(segment);
    }
    let _ = goport_identity::fuzz::resolve_static(&coordinate);
});
