// IDE: This is a cargo-fuzz target, not a normal module
// Run with: cargo fuzz run fuzz_image_ref
// Purpose: Find validation bypasses and crashes in image reference parsing
// Focus: The regex recognizers must never panic or hang on hostile input
#![no_main]

use deckbind::domain::ImageRef;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string (fuzzer generates random bytes)
    if let Ok(s) = std::str::from_utf8(data) {
        // We don't care about the result (Ok/Err); parsing is pure string
        // matching and must stay panic-free with no filesystem access.
        let _ = ImageRef::parse(s.to_string());
    }
});
