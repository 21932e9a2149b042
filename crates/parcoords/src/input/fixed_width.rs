//! Fixed-width text parser with column boundary inference.

use crate::error::{ParcoordsError, Result};

use super::source::RawTable;

/// A column's character span `[start, end)`.
type Span = (usize, usize);

/// Parse fixed-width text.
///
/// Column boundaries are inferred from the first `sample_rows` lines (header
/// included): a column is a maximal run of character positions that are
/// non-blank on at least one sampled line.
pub fn parse_fixed_width(
    bytes: &[u8],
    has_header: bool,
    sample_rows: usize,
    max_rows: Option<usize>,
) -> Result<RawTable> {
    let text = std::str::from_utf8(bytes).map_err(|e| ParcoordsError::Parse {
        row: 0,
        column: 0,
        message: format!("invalid UTF-8 at byte {}", e.valid_up_to()),
    })?;

    let lines: Vec<Vec<char>> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.chars().collect())
        .collect();

    if lines.is_empty() {
        return Err(ParcoordsError::EmptyData("No lines to analyze".to_string()));
    }

    let spans = infer_spans(&lines[..lines.len().min(sample_rows.max(1))]);
    if spans.is_empty() {
        return Err(ParcoordsError::EmptyData("No columns found".to_string()));
    }

    let mut data_lines = lines.iter();
    let headers: Vec<String> = if has_header {
        // `lines` is non-empty
        let header = data_lines.next().map(|l| slice_fields(l, &spans)).unwrap_or_default();
        header
            .into_iter()
            .enumerate()
            .map(|(i, h)| if h.is_empty() { format!("column_{}", i + 1) } else { h })
            .collect()
    } else {
        (0..spans.len()).map(|i| format!("column_{}", i + 1)).collect()
    };

    let rows: Vec<Vec<String>> = data_lines
        .take(max_rows.unwrap_or(usize::MAX))
        .map(|line| slice_fields(line, &spans))
        .collect();

    if rows.is_empty() {
        return Err(ParcoordsError::EmptyData("No data rows found".to_string()));
    }

    Ok(RawTable::new(headers, rows))
}

/// Find runs of positions that hold a non-blank character on some line.
fn infer_spans(lines: &[Vec<char>]) -> Vec<Span> {
    let width = lines.iter().map(Vec::len).max().unwrap_or(0);
    let mut occupied = vec![false; width];
    for line in lines {
        for (i, ch) in line.iter().enumerate() {
            if !ch.is_whitespace() {
                occupied[i] = true;
            }
        }
    }

    let mut spans = Vec::new();
    let mut start = None;
    for (i, used) in occupied.iter().enumerate() {
        match (start, *used) {
            (None, true) => start = Some(i),
            (Some(s), false) => {
                spans.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, width));
    }
    spans
}

fn slice_fields(line: &[char], spans: &[Span]) -> Vec<String> {
    spans
        .iter()
        .map(|&(start, end)| {
            let end = end.min(line.len());
            if start >= end {
                String::new()
            } else {
                line[start..end].iter().collect::<String>().trim().to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARS: &str = "\
name        mpg  cyl
chevrolet   18.0   8
buick       15.0   8
toyota      24.0   4
";

    #[test]
    fn test_infers_columns() {
        let table = parse_fixed_width(CARS.as_bytes(), true, 100, None).unwrap();
        assert_eq!(table.headers, vec!["name", "mpg", "cyl"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.get(2, 0), Some("toyota"));
        assert_eq!(table.get(0, 1), Some("18.0"));
        assert_eq!(table.get(1, 2), Some("8"));
    }

    #[test]
    fn test_blank_cells_are_empty() {
        let data = "a    b\n1    2\n     3\n";
        let table = parse_fixed_width(data.as_bytes(), true, 100, None).unwrap();
        assert_eq!(table.get(1, 0), Some(""));
        assert_eq!(table.get(1, 1), Some("3"));
    }

    #[test]
    fn test_max_rows() {
        let table = parse_fixed_width(CARS.as_bytes(), true, 100, Some(1)).unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_fixed_width(b"  \n\n", true, 100, None),
            Err(ParcoordsError::EmptyData(_))
        ));
    }
}
