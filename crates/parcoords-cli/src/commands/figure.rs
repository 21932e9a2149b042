//! Figure command - write the plot data for a dataset as JSON.

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::cli::LoadArgs;

pub fn run(
    load: LoadArgs,
    config: Option<&Path>,
    features: Vec<String>,
    target: Option<String>,
    colorscale: Option<String>,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (dashboard, _) = super::load(config, &load, verbose)?;

    let features = if features.is_empty() {
        dashboard.default_features()
    } else {
        features
    };
    let target = target.unwrap_or_else(|| dashboard.default_target());
    let colorscale = match colorscale {
        Some(name) => name,
        None => dashboard.default_color(&target)?,
    };

    let figure = dashboard.figure(&features, &target, &colorscale)?;
    let json = serde_json::to_string_pretty(&figure)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            eprintln!(
                "{} {} ({} dimensions, colored by {} with {})",
                "Saved to".green().bold(),
                path.display().to_string().white(),
                figure.dimensions.len(),
                target.white(),
                colorscale.white()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
