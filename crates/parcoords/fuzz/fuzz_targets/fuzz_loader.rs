//! Fuzz target for the delimited and fixed-width loaders.
//!
//! This fuzzer tests that loading:
//! 1. Never panics on malformed input
//! 2. Handles all delimiter combinations
//! 3. Either fails cleanly or yields a rectangular table

#![no_main]

use libfuzzer_sys::fuzz_target;
use parcoords::input::DataFormat;
use parcoords::Loader;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let loader = Loader::new();
    for format in [DataFormat::Delimited, DataFormat::FixedWidth, DataFormat::Spreadsheet] {
        if let Ok((table, source)) = loader.load_bytes("fuzz", data, format) {
            assert_eq!(source.row_count, table.row_count());
            for (_, column) in table.columns() {
                assert_eq!(column.len(), table.row_count());
            }
        }
    }
});
