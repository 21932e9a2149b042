//! Dashboard facade: load, normalize, swap, and answer the selector queries.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::classify::{self, Figure, NO_TARGET};
use crate::error::{ParcoordsError, Result};
use crate::input::{decode_upload, Loader, LoaderConfig, SourceMetadata};
use crate::normalize::{normalize, NormalizeConfig};
use crate::palette::PaletteRegistry;
use crate::store::{Dataset, DatasetStore};
use crate::table::Table;

/// Dataset shown before anything else is loaded.
pub const IRIS_URL: &str =
    "https://raw.githubusercontent.com/uiuc-cse/data-fa14/gh-pages/data/iris.csv";

/// Configuration for a [`Dashboard`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// How files are read.
    pub loader: LoaderConfig,
    /// How loaded tables are normalized.
    pub normalize: NormalizeConfig,
    /// Initial dataset location.
    pub default_url: String,
    /// Qualitative palettes. `None` uses the built-in ColorBrewer set.
    pub palettes: Option<PaletteRegistry>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            normalize: NormalizeConfig::default(),
            default_url: IRIS_URL.to_string(),
            palettes: None,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.loader.validate()?;
        if let Some(palettes) = &config.palettes {
            palettes.validate()?;
        }
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ParcoordsError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }
}

/// The dashboard core.
pub struct Dashboard {
    config: DashboardConfig,
    loader: Loader,
    store: DatasetStore,
    palettes: PaletteRegistry,
}

impl Dashboard {
    /// Create a dashboard with default configuration and no data.
    pub fn new() -> Self {
        Self::assemble(DashboardConfig::default(), Loader::new())
    }

    /// Fails with `Config` when the loader settings are unusable.
    pub fn with_config(config: DashboardConfig) -> Result<Self> {
        let loader = Loader::with_config(config.loader.clone())?;
        Ok(Self::assemble(config, loader))
    }

    fn assemble(config: DashboardConfig, loader: Loader) -> Self {
        let palettes = config.palettes.clone().unwrap_or_default();
        Self {
            config,
            loader,
            store: DatasetStore::default(),
            palettes,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn palettes(&self) -> &PaletteRegistry {
        &self.palettes
    }

    /// The dataset currently shown.
    pub fn dataset(&self) -> Arc<Dataset> {
        self.store.snapshot()
    }

    /// Load the configured default dataset.
    pub fn load_default(&self) -> Result<Arc<Dataset>> {
        let url = self.config.default_url.clone();
        self.load_url(&url)
    }

    pub fn load_url(&self, url: &str) -> Result<Arc<Dataset>> {
        self.store
            .replace_with(|| self.prepare(self.loader.load_url(url)?))
    }

    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Arc<Dataset>> {
        self.store
            .replace_with(|| self.prepare(self.loader.load_path(path)?))
    }

    /// Load a browser upload given as a base64 data URL.
    pub fn load_upload(&self, filename: &str, contents: &str) -> Result<Arc<Dataset>> {
        self.store.replace_with(|| {
            let bytes = decode_upload(contents)?;
            self.prepare(self.loader.load_upload(filename, &bytes)?)
        })
    }

    /// Swap in an already built table, normalizing it first.
    pub fn load_table(&self, table: Table) -> Result<Arc<Dataset>> {
        self.store.replace_with(|| {
            let mut dataset = Dataset::new(table);
            dataset.report = Some(normalize(&mut dataset.table, &self.config.normalize)?);
            Ok(dataset)
        })
    }

    fn prepare(&self, (mut table, source): (Table, SourceMetadata)) -> Result<Dataset> {
        let report = normalize(&mut table, &self.config.normalize)?;
        Ok(Dataset {
            table,
            source: Some(source),
            report: Some(report),
        })
    }

    /// Columns that can be shown as axes.
    pub fn feature_options(&self) -> Vec<String> {
        self.dataset().table.column_names().map(str::to_string).collect()
    }

    /// Every column but the last.
    pub fn default_features(&self) -> Vec<String> {
        let mut features = self.feature_options();
        features.pop();
        features
    }

    /// Columns that can color the lines, plus the no-target sentinel.
    pub fn target_options(&self) -> Vec<String> {
        let mut targets = self.feature_options();
        targets.push(NO_TARGET.to_string());
        targets
    }

    /// The last column, or the sentinel for an empty table.
    pub fn default_target(&self) -> String {
        self.feature_options()
            .pop()
            .unwrap_or_else(|| NO_TARGET.to_string())
    }

    pub fn color_options(&self, target: &str) -> Result<Vec<String>> {
        classify::color_scale_options(&self.dataset().table, target, &self.palettes)
    }

    pub fn default_color(&self, target: &str) -> Result<String> {
        classify::default_color_scale(&self.dataset().table, target, &self.palettes)
    }

    /// Build the figure for the current dataset.
    pub fn figure<S: AsRef<str>>(
        &self,
        features: &[S],
        target: &str,
        color_scale: &str,
    ) -> Result<Figure> {
        classify::figure(&self.dataset().table, features, target, color_scale, &self.palettes)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
