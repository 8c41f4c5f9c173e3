//! Fuzz target for decoding profile/node documents and assembling.
//!
//! Goal: decoding may fail, assembly must **never panic**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_build_inputs
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use occurrence_app::{BuildInput, run_build};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Split into two documents at the first NUL so both inputs get exercised.
        let (profile_json, node_json) = text.split_once('\0').unwrap_or((text, text));
        let _ = run_build(BuildInput {
            profile_json,
            node_json,
            config_text: "",
            overrides: Default::default(),
        });
    }
});
