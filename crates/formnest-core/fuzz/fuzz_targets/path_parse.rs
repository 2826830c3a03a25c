//! Fuzzing target for path parsing
//!
//! Any key must parse without panicking, and formatting the result must
//! also succeed.

#![no_main]

use formnest_core::{format_path, parse_path};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(key) = std::str::from_utf8(data) {
        let path = parse_path(key);
        let _ = format_path(path.segments());
    }

    let lossy = String::from_utf8_lossy(data);
    let _ = parse_path(&lossy).to_string();
});
