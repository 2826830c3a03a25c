//! Fuzzing target for record assembly
//!
//! Arbitrary `key=value` lines are assembled into a record. Assembly may
//! fail with an error but must never panic.

#![no_main]

use formnest_core::{build_record_with, BuildConfig, RawEntry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let entries: Vec<RawEntry> = text
        .lines()
        .map(|line| match line.split_once('=') {
            Some((key, value)) => RawEntry::new(key, value),
            None => RawEntry::new(line, ""),
        })
        .collect();

    let config = BuildConfig::default().with_max_index(1024);
    if let Ok(record) = build_record_with(entries, &config) {
        let _ = record.into_value();
    }
});
