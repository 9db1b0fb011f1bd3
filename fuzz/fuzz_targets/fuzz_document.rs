//! Fuzz target for JSON interchange document loading.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rb_bundle::ResourceBundle;

fuzz_target!(|data: &[u8]| {
    if let Ok(rb) = ResourceBundle::from_json(data) {
        let _ = rb.get("key");
        let _ = rb.to_json();
    }
});
