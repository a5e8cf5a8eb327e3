// IDE: cargo-fuzz target
// Run with: cargo fuzz run fuzz_image_json
// Purpose: fuzz layer-config JSON -> ImageRef::parse on the image field
#![no_main]

use deckbind::domain::ImageRef;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    if let Ok(v) = serde_json::from_slice::<Value>(data) {
        let image = v
            .get("iconAtlas")
            .and_then(|s| s.as_str())
            .unwrap_or("")
            .to_string();

        // We intentionally drop the result; errors are expected for invalid inputs.
        let _ = ImageRef::parse(image);
    }
});
