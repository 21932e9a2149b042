//! Fuzz target for timestamp parsing.
//!
//! This fuzzer tests that the regex-gated date parser:
//! 1. Never panics on any input
//! 2. Doesn't crash on pathological input
//! 3. Produces timestamps that format and re-parse to themselves

#![no_main]

use libfuzzer_sys::fuzz_target;
use parcoords::normalize::parse_timestamp;
use parcoords::table::format_timestamp;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        if let Some(ts) = parse_timestamp(text) {
            let formatted = format_timestamp(ts);
            if ts.and_utc().timestamp_subsec_nanos() == 0 {
                assert_eq!(parse_timestamp(&formatted), Some(ts));
            }
        }
    }
});
