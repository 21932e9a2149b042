//! Palettes command - list qualitative palettes by size.

use std::path::Path;

use colored::Colorize;
use parcoords::palette::CONTINUOUS_COLOR_SCALES;
use parcoords::PaletteRegistry;

pub fn run(
    config: Option<&Path>,
    count: Option<usize>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::build_config(config, None)?;
    let registry = config.palettes.unwrap_or_default();

    let sizes: Vec<usize> = match count {
        Some(n) => vec![n],
        None => registry.sizes().collect(),
    };

    if json_output {
        let mut selected = PaletteRegistry::empty();
        for n in &sizes {
            for name in registry.names_for(*n) {
                if let Some(colors) = registry.get(*n, name) {
                    selected.register(name, colors.to_vec())?;
                }
            }
        }
        println!("{}", selected.to_json()?);
        return Ok(());
    }

    for n in sizes {
        let names = registry.names_for(n);
        if names.is_empty() {
            println!("{:>3} colors: {}", n, "no palettes".dimmed());
            continue;
        }
        println!(
            "{:>3} colors: {} {}",
            n,
            names[0].green().bold(),
            names[1..].join(" ")
        );
    }

    println!();
    println!(
        "{} {}",
        "Continuous:".yellow().bold(),
        CONTINUOUS_COLOR_SCALES.join(" ")
    );

    Ok(())
}
