//! Example: load a dataset and print how each column would be plotted.
//!
//! Usage:
//!   cargo run --example inspect -- <file_path_or_url>
//!
//! Example:
//!   cargo run --example inspect -- https://raw.githubusercontent.com/uiuc-cse/data-fa14/gh-pages/data/iris.csv

use std::env;

use parcoords::classify::{classify, dimension_metadata};
use parcoords::{Dashboard, IRIS_URL};

fn main() -> parcoords::Result<()> {
    tracing_subscriber_init();

    let source = env::args().nth(1).unwrap_or_else(|| IRIS_URL.to_string());

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Parcoords: {}", source);
    println!("{}", separator);
    println!();

    let dashboard = Dashboard::new();
    let dataset = if source.starts_with("http://") || source.starts_with("https://") {
        dashboard.load_url(&source)?
    } else {
        dashboard.load_path(&source)?
    };

    if let Some(report) = &dataset.report {
        println!(
            "Memory: {} -> {} bytes ({:.0}% reduction)",
            report.before_bytes,
            report.after_bytes,
            report.reduction() * 100.0
        );
        println!();
    }

    let table = &dataset.table;
    for name in table.column_names() {
        let dim = dimension_metadata(table, name)?;
        println!(
            "{:24} {:10} {:?}",
            name,
            table.dtype(name)?.to_string(),
            classify(table, name)?
        );
        if let Some(labels) = &dim.tick_labels {
            println!("    ticks: {}", labels.join(", "));
        }
    }

    let target = dashboard.default_target();
    println!();
    println!("Default target: {}", target);
    println!("Default color scale: {}", dashboard.default_color(&target)?);

    Ok(())
}

/// Log normalization steps to stderr.
fn tracing_subscriber_init() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();
}
