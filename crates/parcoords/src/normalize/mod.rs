//! Type normalization: assign every column a stable kind and shrink its storage.
//!
//! Runs once per load, in place, in three steps:
//!
//! 1. columns named like dates become timestamps (optional),
//! 2. low-cardinality text columns become categorical,
//! 3. numeric columns are narrowed to the smallest lossless type.

mod dates;
mod downcast;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::table::{Categorical, ColumnData, DType, Table};

pub use dates::{is_date_column_name, parse_timestamp};
pub use downcast::{downcast, FLOAT32_TOLERANCE};

/// Normalization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Text columns with fewer distinct values than this become categorical.
    pub categorical_threshold: usize,
    /// Convert columns whose name contains "date" to timestamps.
    pub date_columns_by_name: bool,
    /// Report sizes and conversions at info level instead of debug.
    pub verbose: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            categorical_threshold: 5000,
            date_columns_by_name: true,
            verbose: true,
        }
    }
}

impl NormalizeConfig {
    /// Small category limit and no name-based date detection.
    pub fn lenient() -> Self {
        Self {
            categorical_threshold: 12,
            date_columns_by_name: false,
            verbose: true,
        }
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.categorical_threshold = threshold;
        self
    }

    pub fn with_date_columns_by_name(mut self, enabled: bool) -> Self {
        self.date_columns_by_name = enabled;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// A single storage narrowing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Downcast {
    pub column: String,
    pub from: DType,
    pub to: DType,
}

/// What a normalization pass did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationReport {
    /// Table footprint before, in bytes.
    pub before_bytes: usize,
    /// Table footprint after, in bytes.
    pub after_bytes: usize,
    /// Columns converted to timestamps.
    pub dates: Vec<String>,
    /// Columns converted to categorical.
    pub categorized: Vec<String>,
    /// Numeric columns narrowed.
    pub downcasts: Vec<Downcast>,
}

impl NormalizationReport {
    /// Fraction of the footprint saved: `1 - after / before`.
    ///
    /// Negative when the table grew. Zero for an empty table.
    pub fn reduction(&self) -> f64 {
        if self.before_bytes == 0 {
            0.0
        } else {
            1.0 - self.after_bytes as f64 / self.before_bytes as f64
        }
    }

    /// True when nothing was converted.
    pub fn is_noop(&self) -> bool {
        self.dates.is_empty() && self.categorized.is_empty() && self.downcasts.is_empty()
    }
}

macro_rules! report {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            tracing::info!($($arg)+)
        } else {
            tracing::debug!($($arg)+)
        }
    };
}

/// Normalize a table in place.
///
/// Date columns are parsed before anything is written, so a
/// [`DateParse`](crate::ParcoordsError::DateParse) error leaves the table
/// untouched.
pub fn normalize(table: &mut Table, config: &NormalizeConfig) -> Result<NormalizationReport> {
    let before_bytes = table.memory_usage();

    // Step 1: dates, staged so a parse failure leaves no partial writes
    let mut date_columns = Vec::new();
    let mut staged = Vec::new();
    if config.date_columns_by_name {
        for (name, data) in table.columns() {
            if !is_date_column_name(name) {
                continue;
            }
            date_columns.push(name.to_string());
            if let Some(parsed) = dates::parse_date_column(name, data)? {
                staged.push((name.to_string(), parsed));
            }
        }
    }
    let mut dates = Vec::with_capacity(staged.len());
    for (name, parsed) in staged {
        report!(config.verbose, column = %name, "updating date column");
        table.replace_column(&name, parsed)?;
        dates.push(name);
    }

    // Step 2: low-cardinality text becomes categorical
    let candidates: Vec<String> = table
        .columns()
        .filter(|(name, data)| {
            matches!(data, ColumnData::Text(_))
                && !date_columns.iter().any(|d| d == name)
                && data.n_unique() < config.categorical_threshold
        })
        .map(|(name, _)| name.to_string())
        .collect();
    let mut categorized = Vec::with_capacity(candidates.len());
    for name in candidates {
        let ColumnData::Text(values) = table.column(&name)? else {
            continue;
        };
        let encoded = Categorical::from_labels(values.iter().map(|v| v.as_deref()));
        report!(
            config.verbose,
            column = %name,
            categories = encoded.categories().len(),
            "categorizing column"
        );
        table.replace_column(&name, ColumnData::Categorical(encoded))?;
        categorized.push(name);
    }

    // Step 3: numeric narrowing
    let narrowed: Vec<(String, ColumnData)> = table
        .columns()
        .filter_map(|(name, data)| downcast(data).map(|d| (name.to_string(), d)))
        .collect();
    let mut downcasts = Vec::with_capacity(narrowed.len());
    for (name, data) in narrowed {
        let from = table.dtype(&name)?;
        let to = data.dtype();
        tracing::debug!(column = %name, %from, %to, "downcast column");
        table.replace_column(&name, data)?;
        downcasts.push(Downcast { column: name, from, to });
    }

    let report = NormalizationReport {
        before_bytes,
        after_bytes: table.memory_usage(),
        dates,
        categorized,
        downcasts,
    };

    report!(
        config.verbose,
        before = report.before_bytes,
        after = report.after_bytes,
        "the size of the table went from {} down to {} ({:.0}% reduction)",
        report.before_bytes,
        report.after_bytes,
        report.reduction() * 100.0
    );

    Ok(report)
}
