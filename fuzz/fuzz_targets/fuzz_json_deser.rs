#![no_main]

use libfuzzer_sys::fuzz_target;
use topograin_spec::{canonical_spec_hash, validate_spec, Spec};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(spec) = Spec::from_json(text) else {
        return;
    };

    // Anything that parses must validate and hash without panicking, and
    // survive a serialization round trip unchanged.
    let _ = validate_spec(&spec);
    let hash = canonical_spec_hash(&spec);

    if let Ok(json) = spec.to_json_pretty() {
        if let Ok(reparsed) = Spec::from_json(&json) {
            if hash.is_ok() {
                assert_eq!(hash.ok(), canonical_spec_hash(&reparsed).ok());
            }
        }
    }
});
