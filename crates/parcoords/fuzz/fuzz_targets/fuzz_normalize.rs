//! Fuzz target for normalization and classification.
//!
//! Loaded tables of any shape must normalize without panicking, and every
//! column must then classify and produce one plot value per row.

#![no_main]

use libfuzzer_sys::fuzz_target;
use parcoords::input::DataFormat;
use parcoords::{classify, Loader, NormalizeConfig, PaletteRegistry};

fuzz_target!(|data: &[u8]| {
    if data.len() > 20_000 {
        return;
    }

    let Ok((mut table, _)) = Loader::new().load_bytes("fuzz.csv", data, DataFormat::Delimited) else {
        return;
    };
    let config = NormalizeConfig::default().with_verbose(false);
    if parcoords::normalize(&mut table, &config).is_err() {
        return;
    }

    let palettes = PaletteRegistry::brewer();
    let names: Vec<String> = table.column_names().map(str::to_string).collect();
    for name in &names {
        let values = classify::plot_values(&table, name).unwrap();
        assert_eq!(values.len(), table.row_count());
        let _ = classify::dimension_metadata(&table, name).unwrap();
        let _ = classify::default_color_scale(&table, name, &palettes).unwrap();
    }
});
