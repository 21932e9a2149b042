//! Plot-ready axis and line descriptions.

use serde::{Deserialize, Serialize};

use super::{is_categorical, plot_values, resolve_color_scale};
use crate::error::Result;
use crate::palette::{ColorScale, PaletteRegistry};
use crate::table::{dense_codes, format_timestamp, ColumnData, Table};

/// Number format for numeric axis ticks.
pub const TICK_FORMAT: &str = ".2r";

/// One parallel-coordinates axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub label: String,
    pub values: Vec<f64>,
    pub tick_format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_values: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_labels: Option<Vec<String>>,
}

/// How lines are colored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Vec<f64>,
    pub colorscale: ColorScale,
    pub showscale: bool,
}

/// Everything a renderer needs to draw the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub line: LineStyle,
    pub dimensions: Vec<Dimension>,
}

/// Axis description for a column.
///
/// Categorical and date columns carry ticks: the codes present, in order,
/// and their labels.
pub fn dimension_metadata(table: &Table, column: &str) -> Result<Dimension> {
    let data = table.column(column)?;

    let ticks = match data {
        ColumnData::Categorical(cat) => {
            let codes = cat.present_codes();
            let labels: Vec<String> = codes
                .iter()
                .map(|c| cat.categories()[*c as usize].clone())
                .collect();
            Some((codes, labels))
        }
        ColumnData::DateTime(values) => {
            let (distinct, _) = dense_codes(values);
            let labels: Vec<String> = distinct.iter().map(|ts| format_timestamp(*ts)).collect();
            Some(((0..distinct.len() as u32).collect(), labels))
        }
        _ => None,
    };
    let (tick_values, tick_labels) = ticks.unzip();

    Ok(Dimension {
        label: column.to_string(),
        values: plot_values(table, column)?,
        tick_format: TICK_FORMAT.to_string(),
        tick_values,
        tick_labels,
    })
}

/// Line coloring for `target`. Categorical targets get no color bar.
pub fn line_style(
    table: &Table,
    target: &str,
    color_scale: &str,
    palettes: &PaletteRegistry,
) -> Result<LineStyle> {
    Ok(LineStyle {
        color: plot_values(table, target)?,
        colorscale: resolve_color_scale(color_scale, table, target, palettes)?,
        showscale: !is_categorical(table, target)?,
    })
}

/// Build the full figure: one axis per feature, in the order given.
pub fn figure<S: AsRef<str>>(
    table: &Table,
    features: &[S],
    target: &str,
    color_scale: &str,
    palettes: &PaletteRegistry,
) -> Result<Figure> {
    let dimensions = features
        .iter()
        .map(|f| dimension_metadata(table, f.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        dimensions = dimensions.len(),
        color_by = target,
        color_scale,
        "built figure"
    );

    Ok(Figure {
        line: line_style(table, target, color_scale, palettes)?,
        dimensions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::NO_TARGET;
    use crate::error::ParcoordsError;
    use crate::normalize::{normalize, NormalizeConfig};

    fn labels(values: &[Option<&str>]) -> ColumnData {
        ColumnData::Text(values.iter().map(|v| v.map(str::to_string)).collect())
    }

    fn table() -> Table {
        let mut table = Table::from_columns(vec![
            ("sepal_length", ColumnData::Float64(vec![5.1, 7.0, 6.3])),
            (
                "species",
                labels(&[Some("virginica"), None, Some("setosa")]),
            ),
            (
                "order_date",
                labels(&[Some("2024-02-01"), Some("2024-01-01 08:30:00"), None]),
            ),
        ])
        .unwrap();
        normalize(&mut table, &NormalizeConfig::default()).unwrap();
        table
    }

    #[test]
    fn test_numeric_dimension_has_no_ticks() {
        let dim = dimension_metadata(&table(), "sepal_length").unwrap();
        assert_eq!(dim.label, "sepal_length");
        assert_eq!(dim.tick_format, ".2r");
        assert!(dim.tick_values.is_none());
        assert!(dim.tick_labels.is_none());
        assert_eq!(dim.values.len(), 3);
    }

    #[test]
    fn test_categorical_dimension() {
        let dim = dimension_metadata(&table(), "species").unwrap();
        assert_eq!(dim.tick_values, Some(vec![0, 1]));
        assert_eq!(dim.tick_labels, Some(vec!["setosa".to_string(), "virginica".to_string()]));
        assert_eq!(dim.values[0], 1.0);
        assert!(dim.values[1].is_nan());
        assert_eq!(dim.values[2], 0.0);
    }

    #[test]
    fn test_date_dimension() {
        let dim = dimension_metadata(&table(), "order_date").unwrap();
        assert_eq!(dim.tick_values, Some(vec![0, 1]));
        assert_eq!(
            dim.tick_labels,
            Some(vec!["2024-01-01 08:30:00".to_string(), "2024-02-01".to_string()])
        );
        assert_eq!(dim.values[..2], [1.0, 0.0]);
        assert!(dim.values[2].is_nan());
    }

    #[test]
    fn test_dimension_json_omits_missing_ticks() {
        let json = serde_json::to_value(dimension_metadata(&table(), "sepal_length").unwrap()).unwrap();
        assert_eq!(json["tickFormat"], ".2r");
        assert!(json.get("tickValues").is_none());

        let json = serde_json::to_value(dimension_metadata(&table(), "species").unwrap()).unwrap();
        assert_eq!(json["tickLabels"][1], "virginica");
    }

    #[test]
    fn test_line_style() {
        let table = table();
        let palettes = PaletteRegistry::brewer();

        let numeric = line_style(&table, "sepal_length", "Viridis", &palettes).unwrap();
        assert!(numeric.showscale);
        assert_eq!(numeric.colorscale, ColorScale::Named("Viridis".into()));

        let none = line_style(&table, NO_TARGET, "Jet", &palettes).unwrap();
        assert!(none.showscale);
        assert_eq!(none.color, vec![1.0; 3]);
    }

    #[test]
    fn test_figure_keeps_feature_order() {
        let table = table();
        let features = ["species", "sepal_length"];
        let fig = figure(&table, &features, "sepal_length", "Jet", &PaletteRegistry::brewer()).unwrap();

        let names: Vec<&str> = fig.dimensions.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(names, features);
        assert!(fig.line.showscale);
    }

    #[test]
    fn test_figure_unknown_feature() {
        let err = figure(&table(), &["petal"], NO_TARGET, "Jet", &PaletteRegistry::brewer()).unwrap_err();
        assert!(matches!(err, ParcoordsError::ColumnNotFound(ref c) if c == "petal"));
    }
}
