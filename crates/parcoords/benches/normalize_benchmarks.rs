//! Normalization and classification benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use parcoords::{
    ColumnData, NormalizeConfig, PaletteRegistry, Table, classify, normalize, plot_values,
};

const SPECIES: [&str; 3] = ["setosa", "versicolor", "virginica"];

/// A reproducible random table with numeric, label and date columns.
fn generate_table(rows: usize) -> Table {
    let mut rng = StdRng::seed_from_u64(42);

    let measures: Vec<f64> = (0..rows).map(|_| rng.gen_range(0.0..10.0)).collect();
    let counts: Vec<i64> = (0..rows).map(|_| rng.gen_range(0..200)).collect();
    let species: Vec<Option<String>> = (0..rows)
        .map(|_| Some(SPECIES[rng.gen_range(0..SPECIES.len())].to_string()))
        .collect();
    let dates: Vec<Option<String>> = (0..rows)
        .map(|_| {
            Some(format!(
                "2023-{:02}-{:02}",
                rng.gen_range(1..=12),
                rng.gen_range(1..=28)
            ))
        })
        .collect();

    Table::from_columns(vec![
        ("measure", ColumnData::Float64(measures)),
        ("count", ColumnData::Int64(counts)),
        ("species", ColumnData::Text(species)),
        ("visit_date", ColumnData::Text(dates)),
    ])
    .unwrap()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let config = NormalizeConfig::default().with_verbose(false);

    for rows in [1_000, 10_000, 100_000].iter() {
        let table = generate_table(*rows);
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter_batched(
                || table.clone(),
                |mut table| black_box(normalize(&mut table, &config).unwrap()),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_figure(c: &mut Criterion) {
    let mut group = c.benchmark_group("figure");
    let palettes = PaletteRegistry::brewer();
    let features = ["measure", "count", "visit_date"];

    for rows in [1_000, 10_000, 100_000].iter() {
        let mut table = generate_table(*rows);
        normalize(&mut table, &NormalizeConfig::default().with_verbose(false)).unwrap();

        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| black_box(classify::figure(table, &features, "species", "Set1", &palettes).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("date_codes", rows), &table, |b, table| {
            b.iter(|| black_box(plot_values(table, "visit_date").unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_figure);
criterion_main!(benches);
