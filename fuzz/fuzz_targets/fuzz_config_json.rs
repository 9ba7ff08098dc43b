//! Fuzz target: `DoorbellConfig::from_json`
//!
//! Arbitrary bytes must either parse into a config that passes
//! `validate()` or be rejected with an error; never panic.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use doorbell::config::DoorbellConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = DoorbellConfig::from_json(text) {
        assert!(config.validate().is_ok());
        assert!(config.led_hold_ms > 0);
    }
});
