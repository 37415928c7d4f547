//! Fuzz target for `<meta name="go-import">` discovery in `?go-get=1` pages.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_go_import_meta
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);
    let _ = goport_identity::fuzz::parse_go_import_page(&html);
});
