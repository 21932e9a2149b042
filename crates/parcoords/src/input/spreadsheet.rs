//! Workbook reader: the first worksheet of an xls/xlsx/ods file.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::error::{ParcoordsError, Result};
use crate::table::format_timestamp;

use super::source::RawTable;

/// Read the first worksheet into a raw table.
///
/// Rows with no filled cell are skipped. Cells are rendered as text so they
/// go through the same typing as delimited files.
pub fn parse_spreadsheet(bytes: &[u8], has_header: bool, max_rows: Option<usize>) -> Result<RawTable> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ParcoordsError::EmptyData("Workbook has no sheets".to_string()))??;

    let width = range.width();
    if width == 0 {
        return Err(ParcoordsError::EmptyData("No columns found".to_string()));
    }

    let mut lines = range
        .rows()
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|row| {
            let mut cells: Vec<String> = row.iter().map(cell_text).collect();
            cells.resize(width, String::new());
            cells
        });

    let headers: Vec<String> = if has_header {
        let header = lines
            .next()
            .ok_or_else(|| ParcoordsError::EmptyData("No header row found".to_string()))?;
        header
            .into_iter()
            .enumerate()
            .map(|(i, h)| {
                let h = h.trim();
                if h.is_empty() { format!("column_{}", i + 1) } else { h.to_string() }
            })
            .collect()
    } else {
        (0..width).map(|i| format!("column_{}", i + 1)).collect()
    };

    let rows: Vec<Vec<String>> = lines.take(max_rows.unwrap_or(usize::MAX)).collect();
    if rows.is_empty() {
        return Err(ParcoordsError::EmptyData("No data rows found".to_string()));
    }

    Ok(RawTable::new(headers, rows))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(format_timestamp)
            .unwrap_or_else(|| dt.to_string()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn workbook(rows: &[&[&str]]) -> Vec<u8> {
        let mut book = Workbook::new();
        let sheet = book.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                match cell.parse::<f64>() {
                    Ok(n) => sheet.write_number(r as u32, c as u16, n).unwrap(),
                    Err(_) => sheet.write_string(r as u32, c as u16, *cell).unwrap(),
                };
            }
        }
        book.save_to_buffer().unwrap()
    }

    #[test]
    fn test_first_sheet_with_header() {
        let bytes = workbook(&[
            &["sepal_length", "species"],
            &["5.1", "setosa"],
            &["7", "versicolor"],
        ]);
        let raw = parse_spreadsheet(&bytes, true, None).unwrap();

        assert_eq!(raw.headers, vec!["sepal_length", "species"]);
        assert_eq!(raw.rows, vec![vec!["5.1", "setosa"], vec!["7", "versicolor"]]);
    }

    #[test]
    fn test_blank_cells_and_rows() {
        let bytes = workbook(&[&["a", "", "c"], &["1", "", "x"], &["", "", ""], &["2", "", ""]]);
        let raw = parse_spreadsheet(&bytes, true, None).unwrap();

        assert_eq!(raw.headers, vec!["a", "column_2", "c"]);
        assert_eq!(raw.row_count(), 2);
        assert_eq!(raw.rows[1], vec!["2", "", ""]);
    }

    #[test]
    fn test_without_header_and_row_limit() {
        let bytes = workbook(&[&["1", "2"], &["3", "4"], &["5", "6"]]);
        let raw = parse_spreadsheet(&bytes, false, Some(2)).unwrap();

        assert_eq!(raw.headers, vec!["column_1", "column_2"]);
        assert_eq!(raw.row_count(), 2);
    }

    #[test]
    fn test_header_only_is_empty() {
        let bytes = workbook(&[&["a", "b"]]);
        assert!(matches!(
            parse_spreadsheet(&bytes, true, None),
            Err(ParcoordsError::EmptyData(_))
        ));
    }

    #[test]
    fn test_not_a_workbook() {
        assert!(matches!(
            parse_spreadsheet(b"a,b\n1,2\n", true, None),
            Err(ParcoordsError::Spreadsheet(_))
        ));
    }
}
