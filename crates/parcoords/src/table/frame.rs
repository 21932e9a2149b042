//! Named, row-aligned column collection.

use indexmap::IndexMap;

use crate::error::{ParcoordsError, Result};

use super::column::ColumnData;
use super::types::{DType, ValueKind};

/// An in-memory table: uniquely named columns of equal length, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: IndexMap<String, ColumnData>,
    row_count: usize,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, data)` pairs.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ColumnData)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, data) in columns {
            table.push_column(name, data)?;
        }
        Ok(table)
    }

    /// Append a column. The first column fixes the row count.
    pub fn push_column(&mut self, name: impl Into<String>, data: ColumnData) -> Result<()> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(ParcoordsError::DuplicateColumn(name));
        }
        if !self.columns.is_empty() && data.len() != self.row_count {
            return Err(ParcoordsError::LengthMismatch {
                column: name,
                expected: self.row_count,
                actual: data.len(),
            });
        }
        self.row_count = data.len();
        self.columns.insert(name, data);
        Ok(())
    }

    /// Swap the data of an existing column for a representation of equal length.
    pub(crate) fn replace_column(&mut self, name: &str, data: ColumnData) -> Result<()> {
        if data.len() != self.row_count {
            return Err(ParcoordsError::LengthMismatch {
                column: name.to_string(),
                expected: self.row_count,
                actual: data.len(),
            });
        }
        let slot = self
            .columns
            .get_mut(name)
            .ok_or_else(|| ParcoordsError::ColumnNotFound(name.to_string()))?;
        *slot = data;
        Ok(())
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Iterate over `(name, data)` pairs in order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnData)> {
        self.columns.iter().map(|(name, data)| (name.as_str(), data))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Look up a column, if present.
    pub fn get(&self, name: &str) -> Option<&ColumnData> {
        self.columns.get(name)
    }

    /// Look up a column, failing with `ColumnNotFound`.
    pub fn column(&self, name: &str) -> Result<&ColumnData> {
        self.get(name)
            .ok_or_else(|| ParcoordsError::ColumnNotFound(name.to_string()))
    }

    /// Storage type of a column.
    pub fn dtype(&self, name: &str) -> Result<DType> {
        self.column(name).map(ColumnData::dtype)
    }

    /// Semantic kind of a column.
    pub fn kind(&self, name: &str) -> Result<ValueKind> {
        self.dtype(name).map(|d| d.kind())
    }

    /// Approximate memory footprint of all columns in bytes.
    pub fn memory_usage(&self) -> usize {
        self.columns
            .iter()
            .map(|(name, data)| name.len() + data.memory_usage())
            .sum()
    }
}
