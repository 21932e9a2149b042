//! Loader performance benchmarks.
//!
//! Measures delimited and fixed-width loading across different sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use parcoords::input::DataFormat;
use parcoords::Loader;

/// Generate synthetic CSV data with the specified number of rows and columns.
fn generate_csv_data(rows: usize, cols: usize) -> String {
    let mut data = String::new();

    let header: Vec<String> = (0..cols).map(|i| format!("column_{}", i + 1)).collect();
    data.push_str(&header.join(","));
    data.push('\n');

    for row in 0..rows {
        let cells: Vec<String> = (0..cols)
            .map(|col| match col % 4 {
                0 => format!("{:.2}", row as f64 * 1.5),
                1 => format!("{}", row % 250),
                2 => format!("2023-{:02}-{:02}", (row % 12) + 1, (row % 28) + 1),
                3 => format!("Category_{}", row % 10),
                _ => unreachable!(),
            })
            .collect();
        data.push_str(&cells.join(","));
        data.push('\n');
    }

    data
}

/// The same data laid out in padded columns.
fn generate_fixed_width_data(rows: usize, cols: usize) -> String {
    generate_csv_data(rows, cols)
        .lines()
        .map(|line| {
            line.split(',')
                .map(|cell| format!("{:>14}", cell))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Benchmark delimited loading of various sizes.
fn bench_load_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_csv");
    let loader = Loader::new();

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_csv_data(*rows, 8);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| {
                black_box(
                    loader
                        .load_bytes("bench.csv", data.as_bytes(), DataFormat::Delimited)
                        .unwrap(),
                )
            })
        });
    }

    group.finish();
}

/// Benchmark fixed-width loading of various sizes.
fn bench_load_fixed_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_fixed_width");
    let loader = Loader::new();

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_fixed_width_data(*rows, 8);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| {
                black_box(
                    loader
                        .load_bytes("bench.dat", data.as_bytes(), DataFormat::FixedWidth)
                        .unwrap(),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load_csv, bench_load_fixed_width);
criterion_main!(benches);
