//! Initial typing of parsed text columns.
//!
//! Mirrors what a dataframe reader does on load: numbers become numeric
//! columns, `true`/`false` becomes boolean, everything else stays text.
//! Narrowing and categorization are left to normalization.

use std::collections::HashMap;

use crate::error::Result;
use crate::table::{ColumnData, Table};

use super::source::RawTable;

/// Convert a raw table into a typed table.
pub fn type_columns(raw: &RawTable) -> Result<Table> {
    let names = dedupe_headers(&raw.headers);
    let mut table = Table::new();
    for (index, name) in names.into_iter().enumerate() {
        let cells: Vec<Option<&str>> = raw
            .column_values(index)
            .map(|v| if RawTable::is_null_value(v) { None } else { Some(v.trim()) })
            .collect();
        table.push_column(name, infer_column(&cells))?;
    }
    Ok(table)
}

/// Pick the narrowest loader type that holds every cell.
pub(crate) fn infer_column(cells: &[Option<&str>]) -> ColumnData {
    let has_missing = cells.iter().any(Option::is_none);
    let present = || cells.iter().flatten();

    if present().next().is_none() {
        // All-missing columns load as floats, like an all-NaN column would.
        return ColumnData::Float64(vec![f64::NAN; cells.len()]);
    }

    if !has_missing {
        if let Some(values) = present().map(|v| parse_bool(v)).collect::<Option<Vec<_>>>() {
            return ColumnData::Bool(values);
        }
        if let Some(values) = present().map(|v| v.parse::<i64>().ok()).collect::<Option<Vec<_>>>() {
            return ColumnData::Int64(values);
        }
        if let Some(values) = present().map(|v| v.parse::<u64>().ok()).collect::<Option<Vec<_>>>() {
            return ColumnData::UInt64(values);
        }
    }

    let floats: Option<Vec<f64>> = cells
        .iter()
        .map(|c| match c {
            None => Some(f64::NAN),
            Some(v) => parse_float(v),
        })
        .collect();
    if let Some(values) = floats {
        return ColumnData::Float64(values);
    }

    ColumnData::Text(cells.iter().map(|c| c.map(str::to_string)).collect())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

fn parse_float(value: &str) -> Option<f64> {
    // Rust accepts "inf"/"infinity"/"nan" spellings; keep those as text
    // unless they are the common signed forms.
    let lower = value.to_ascii_lowercase();
    if lower.contains("nan") || (lower.contains("inf") && !matches!(lower.as_str(), "inf" | "-inf" | "+inf")) {
        return None;
    }
    value.parse::<f64>().ok()
}

/// Rename repeated headers to `name.1`, `name.2`, ... in order of appearance.
fn dedupe_headers(headers: &[String]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut taken: std::collections::HashSet<String> = headers.iter().cloned().collect();
    let mut out = Vec::with_capacity(headers.len());

    for header in headers {
        let count = seen.entry(header.clone()).or_insert(0);
        if *count == 0 {
            out.push(header.clone());
        } else {
            let mut candidate = format!("{}.{}", header, count);
            while taken.contains(&candidate) {
                *count += 1;
                candidate = format!("{}.{}", header, count);
            }
            taken.insert(candidate.clone());
            out.push(candidate);
        }
        *count += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DType;

    fn column(values: &[&str]) -> ColumnData {
        let cells: Vec<Option<&str>> = values
            .iter()
            .map(|v| if RawTable::is_null_value(v) { None } else { Some(*v) })
            .collect();
        infer_column(&cells)
    }

    #[test]
    fn test_infer_integers() {
        assert_eq!(column(&["1", "2", "-3"]), ColumnData::Int64(vec![1, 2, -3]));
    }

    #[test]
    fn test_integers_with_gaps_become_floats() {
        let data = column(&["1", "", "3"]);
        assert_eq!(data.dtype(), DType::Float64);
        assert_eq!(data.n_unique(), 2);
    }

    #[test]
    fn test_infer_booleans() {
        assert_eq!(column(&["true", "False"]), ColumnData::Bool(vec![true, false]));
        // a gap turns a boolean column into text
        assert_eq!(column(&["true", "NA"]).dtype(), DType::Text);
    }

    #[test]
    fn test_large_unsigned() {
        assert_eq!(column(&["18446744073709551615"]).dtype(), DType::UInt64);
    }

    #[test]
    fn test_text_fallback() {
        assert_eq!(column(&["setosa", "1.5"]).dtype(), DType::Text);
        assert_eq!(column(&["infinite"]).dtype(), DType::Text);
    }

    #[test]
    fn test_all_missing() {
        assert_eq!(column(&["", "NA"]).dtype(), DType::Float64);
    }

    #[test]
    fn test_dedupe_headers() {
        let headers: Vec<String> = ["a", "b", "a", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(dedupe_headers(&headers), vec!["a", "b", "a.1", "a.2"]);

        let headers: Vec<String> = ["a", "a.1", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(dedupe_headers(&headers), vec!["a", "a.1", "a.2"]);
    }
}
