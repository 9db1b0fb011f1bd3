//! Fuzz target for resource bundle archive import.
//!
//! Archives may come from untrusted sources; import must return an error,
//! never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rb_bundle::ResourceBundle;

fuzz_target!(|data: &[u8]| {
    if let Ok(rb) = ResourceBundle::from_archive("en", "US", data) {
        // Whatever imported must resolve lookups without panicking
        let _ = rb.get("key");
    }
});
