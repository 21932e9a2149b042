//! Inspect command - load a dataset and show how its columns are classified.

use std::path::Path;

use colored::Colorize;
use parcoords::classify::classify;
use parcoords::{Classification, Dataset};

use crate::cli::LoadArgs;

pub fn run(
    load: LoadArgs,
    config: Option<&Path>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !json_output {
        println!("{} {}", "Loading".cyan().bold(), load.source.white());
    }

    let (dashboard, dataset) = super::load(config, &load, verbose)?;
    let table = &dataset.table;

    let target = dashboard.default_target();
    let default_color = dashboard.default_color(&target)?;

    if json_output {
        let columns: Vec<_> = table
            .columns()
            .map(|(name, data)| {
                let classification = classify(table, name).ok();
                serde_json::json!({
                    "name": name,
                    "dtype": data.dtype(),
                    "classification": classification,
                    "distinct": data.n_unique(),
                })
            })
            .collect();

        let output = serde_json::json!({
            "source": dataset.source,
            "report": dataset.report,
            "columns": columns,
            "default_features": dashboard.default_features(),
            "default_target": target,
            "default_color": default_color,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_summary(&dataset);

    println!();
    println!("{}", "Columns:".yellow().bold());
    for (name, data) in table.columns() {
        let classification = classify(table, name)?;
        let label = match classification {
            Classification::Date => "date".magenta(),
            Classification::Categorical => "categorical".green(),
            Classification::Numeric => "numeric".blue(),
            Classification::FreeText => "free text".dimmed(),
        };
        println!(
            "  {:24} {:12} {:12} {} distinct",
            name,
            data.dtype().to_string(),
            label,
            data.n_unique()
        );
    }

    println!();
    println!("Default target: {}", target.white().bold());
    println!("Default color scale: {}", default_color.white().bold());

    Ok(())
}

fn print_summary(dataset: &Dataset) {
    let table = &dataset.table;
    println!(
        "Loaded {} rows x {} columns",
        table.row_count().to_string().white().bold(),
        table.column_count().to_string().white().bold()
    );

    if let Some(source) = &dataset.source {
        println!("Format: {}  Hash: {}", source.format, source.hash.dimmed());
    }

    if let Some(report) = &dataset.report {
        println!(
            "Memory: {} -> {} bytes ({})",
            report.before_bytes,
            report.after_bytes,
            format!("{:.0}% reduction", report.reduction() * 100.0).green()
        );
        if !report.dates.is_empty() {
            println!("Dates: {}", report.dates.join(", "));
        }
        if !report.categorized.is_empty() {
            println!("Categorized: {}", report.categorized.join(", "));
        }
        for downcast in &report.downcasts {
            println!(
                "  {} {} -> {}",
                downcast.column,
                downcast.from.to_string().dimmed(),
                downcast.to
            );
        }
    }
}
