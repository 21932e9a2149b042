//! CLI command implementations.

pub mod figure;
pub mod inspect;
pub mod palettes;

use std::path::Path;

use parcoords::{Dashboard, DashboardConfig, Dataset, NormalizeConfig};

use crate::cli::LoadArgs;

/// Read the configuration file, if any, and apply command-line overrides.
pub fn build_config(
    config_path: Option<&Path>,
    load: Option<&LoadArgs>,
) -> Result<DashboardConfig, Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::default(),
    };

    if let Some(load) = load {
        if load.lenient {
            config.normalize = NormalizeConfig::lenient();
        }
        if let Some(threshold) = load.threshold {
            config.normalize.categorical_threshold = threshold;
        }
        if load.no_date_names {
            config.normalize.date_columns_by_name = false;
        }
    }

    Ok(config)
}

/// Load the requested source into a fresh dashboard.
pub fn load(
    config_path: Option<&Path>,
    args: &LoadArgs,
    verbose: bool,
) -> Result<(Dashboard, std::sync::Arc<Dataset>), Box<dyn std::error::Error>> {
    let mut config = build_config(config_path, Some(args))?;
    config.normalize.verbose = verbose;

    let dashboard = Dashboard::with_config(config)?;
    let dataset = if is_url(&args.source) {
        dashboard.load_url(&args.source)?
    } else {
        let path = Path::new(&args.source);
        if !path.exists() {
            return Err(format!("File not found: {}", path.display()).into());
        }
        dashboard.load_path(path)?
    };

    Ok((dashboard, dataset))
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(source: &str) -> LoadArgs {
        LoadArgs {
            source: source.to_string(),
            threshold: None,
            no_date_names: false,
            lenient: false,
        }
    }

    #[test]
    fn test_overrides() {
        let mut load = args("iris.csv");
        load.threshold = Some(40);
        load.no_date_names = true;

        let config = build_config(None, Some(&load)).unwrap();
        assert_eq!(config.normalize.categorical_threshold, 40);
        assert!(!config.normalize.date_columns_by_name);
    }

    #[test]
    fn test_lenient() {
        let mut load = args("iris.csv");
        load.lenient = true;

        let config = build_config(None, Some(&load)).unwrap();
        assert_eq!(config.normalize.categorical_threshold, 12);
    }

    #[test]
    fn test_url_detection() {
        assert!(is_url("https://example.org/iris.csv"));
        assert!(!is_url("data/iris.csv"));
    }

    #[test]
    fn test_load_follows_verbose_flag() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        std::io::Write::write_all(&mut file, b"x,species\n1.5,a\n2.5,b\n").unwrap();
        let load_args = args(&file.path().display().to_string());

        let (quiet, _) = load(None, &load_args, false).unwrap();
        assert!(!quiet.config().normalize.verbose);

        let (loud, dataset) = load(None, &load_args, true).unwrap();
        assert!(loud.config().normalize.verbose);
        assert_eq!(dataset.table.row_count(), 2);
    }

    #[test]
    fn test_missing_file() {
        let Err(err) = load(None, &args("/no/such/file.csv"), false) else {
            panic!("loading a missing file should fail");
        };
        assert!(err.to_string().contains("File not found"));
    }
}
