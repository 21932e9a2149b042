//! Per-column queries that drive plotting.
//!
//! Everything here reads the kind assigned during normalization; nothing is
//! re-derived from values except the codes of date and free-text columns.

mod dimension;

use crate::error::Result;
use crate::palette::{ColorScale, PaletteRegistry, CONTINUOUS_COLOR_SCALES, DEFAULT_COLOR_SCALE};
use crate::table::{dense_codes, Classification, ColumnData, Table, ValueKind};

pub use dimension::{dimension_metadata, figure, line_style, Dimension, Figure, LineStyle, TICK_FORMAT};

/// Target name meaning "no target selected".
pub const NO_TARGET: &str = "none";

/// True when `column` is the no-target sentinel rather than a real column.
pub fn is_absent_target(table: &Table, column: &str) -> bool {
    column == NO_TARGET && !table.contains(column)
}

/// How a column is plotted.
pub fn classify(table: &Table, column: &str) -> Result<Classification> {
    Ok(Classification::from(table.kind(column)?))
}

/// Whether the column holds timestamps.
pub fn is_date(table: &Table, column: &str) -> Result<bool> {
    Ok(table.kind(column)? == ValueKind::Date)
}

/// Whether the column is categorical. The absent target never is.
pub fn is_categorical(table: &Table, column: &str) -> Result<bool> {
    if is_absent_target(table, column) {
        return Ok(false);
    }
    Ok(classify(table, column)? == Classification::Categorical)
}

/// Number of categories of a categorical column.
fn category_count(table: &Table, column: &str) -> Result<Option<usize>> {
    if !is_categorical(table, column)? {
        return Ok(None);
    }
    Ok(Some(table.column(column)?.n_unique()))
}

/// Plot-ready values for a column.
///
/// - absent target: `1.0` for every row
/// - categorical: category codes
/// - dates and free text: codes over the sorted distinct values
/// - numbers and booleans: the values
///
/// Missing values become `NaN`.
pub fn plot_values(table: &Table, column: &str) -> Result<Vec<f64>> {
    if is_absent_target(table, column) {
        return Ok(vec![1.0; table.row_count()]);
    }

    let data = table.column(column)?;
    let values = match data {
        ColumnData::Categorical(cat) => codes_to_f64(cat.codes()),
        ColumnData::DateTime(values) => codes_to_f64(&dense_codes(values).1),
        ColumnData::Text(values) => codes_to_f64(&dense_codes(values).1),
        other => other.to_f64().unwrap_or_default(),
    };
    Ok(values)
}

fn codes_to_f64(codes: &[Option<u32>]) -> Vec<f64> {
    codes
        .iter()
        .map(|c| c.map(f64::from).unwrap_or(f64::NAN))
        .collect()
}

/// Color scale to use for `target`.
///
/// Categorical targets look up a qualitative palette of matching size; any
/// miss, and every other target, passes the requested name through.
pub fn resolve_color_scale(
    requested: &str,
    table: &Table,
    target: &str,
    palettes: &PaletteRegistry,
) -> Result<ColorScale> {
    let resolved = category_count(table, target)?
        .and_then(|n| palettes.get(n, requested))
        .map(ColorScale::from_colors)
        .unwrap_or_else(|| ColorScale::Named(requested.to_string()));
    Ok(resolved)
}

/// Default color scale name for `target`.
pub fn default_color_scale(table: &Table, target: &str, palettes: &PaletteRegistry) -> Result<String> {
    let name = category_count(table, target)?
        .and_then(|n| palettes.first_name_for(n))
        .unwrap_or(DEFAULT_COLOR_SCALE);
    Ok(name.to_string())
}

/// Color scale names offered for `target`.
///
/// Categorical targets with a palette of matching size get those palettes;
/// everything else gets the continuous scales.
pub fn color_scale_options(table: &Table, target: &str, palettes: &PaletteRegistry) -> Result<Vec<String>> {
    let qualitative = category_count(table, target)?
        .map(|n| palettes.names_for(n))
        .filter(|names| !names.is_empty());

    let names = match qualitative {
        Some(names) => names.into_iter().map(str::to_string).collect(),
        None => CONTINUOUS_COLOR_SCALES.iter().map(|s| s.to_string()).collect(),
    };
    Ok(names)
}
