//! Fuzz target for the key=value text codec.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rb_bundle::properties::decode_bytes;

fuzz_target!(|data: &[u8]| {
    if let Ok(map) = decode_bytes(data) {
        // Keys end at the first separator
        assert!(map.keys().all(|k| !k.contains('=') && !k.contains('\n')));
    }
});
