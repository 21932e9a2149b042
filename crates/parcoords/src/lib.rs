//! Parcoords: the data core of a parallel-coordinates dashboard.
//!
//! Parcoords loads a tabular dataset, normalizes its column types once, and
//! answers the questions a plotting front end needs for each column: is it a
//! date, is it categorical, what values go on its axis, and which color scale
//! fits it.
//!
//! # Core Principles
//!
//! - **Classify once**: every column gets a kind during normalization; the
//!   classifier reads it and never guesses again
//! - **Swap or keep**: a reload that fails leaves the current dataset in place
//! - **Render-agnostic**: output is plain serializable data, nothing is drawn
//!
//! # Example
//!
//! ```no_run
//! use parcoords::Dashboard;
//!
//! let dashboard = Dashboard::new();
//! dashboard.load_path("iris.csv").unwrap();
//!
//! let target = dashboard.default_target();
//! let color = dashboard.default_color(&target).unwrap();
//! let figure = dashboard
//!     .figure(&dashboard.default_features(), &target, &color)
//!     .unwrap();
//!
//! println!("{}", serde_json::to_string(&figure).unwrap());
//! ```

pub mod classify;
pub mod error;
pub mod input;
pub mod normalize;
pub mod palette;
pub mod store;
pub mod table;

mod dashboard;

pub use crate::dashboard::{Dashboard, DashboardConfig, IRIS_URL};
pub use classify::{
    Dimension, Figure, LineStyle, NO_TARGET, default_color_scale, dimension_metadata, is_categorical,
    is_date, plot_values, resolve_color_scale,
};
pub use error::{ParcoordsError, Result};
pub use input::{Loader, LoaderConfig, SourceMetadata};
pub use normalize::{NormalizationReport, NormalizeConfig, normalize};
pub use palette::{ColorScale, PaletteRegistry};
pub use store::{Dataset, DatasetStore};
pub use table::{Classification, ColumnData, DType, Table, ValueKind};
