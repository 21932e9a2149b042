//! Typed column storage.

use std::collections::HashSet;

use chrono::NaiveDateTime;

use super::categorical::Categorical;
use super::types::DType;

/// Values of a single column in their physical representation.
///
/// Integer and boolean columns have no missing values; floats use `NaN`,
/// the remaining variants use `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Bool(Vec<bool>),
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    UInt64(Vec<u64>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Text(Vec<Option<String>>),
    Categorical(Categorical),
    DateTime(Vec<Option<NaiveDateTime>>),
}

impl ColumnData {
    /// Storage type of this column.
    pub fn dtype(&self) -> DType {
        match self {
            ColumnData::Bool(_) => DType::Bool,
            ColumnData::UInt8(_) => DType::UInt8,
            ColumnData::UInt16(_) => DType::UInt16,
            ColumnData::UInt32(_) => DType::UInt32,
            ColumnData::UInt64(_) => DType::UInt64,
            ColumnData::Int8(_) => DType::Int8,
            ColumnData::Int16(_) => DType::Int16,
            ColumnData::Int32(_) => DType::Int32,
            ColumnData::Int64(_) => DType::Int64,
            ColumnData::Float32(_) => DType::Float32,
            ColumnData::Float64(_) => DType::Float64,
            ColumnData::Text(_) => DType::Text,
            ColumnData::Categorical(_) => DType::Categorical,
            ColumnData::DateTime(_) => DType::DateTime,
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Bool(v) => v.len(),
            ColumnData::UInt8(v) => v.len(),
            ColumnData::UInt16(v) => v.len(),
            ColumnData::UInt32(v) => v.len(),
            ColumnData::UInt64(v) => v.len(),
            ColumnData::Int8(v) => v.len(),
            ColumnData::Int16(v) => v.len(),
            ColumnData::Int32(v) => v.len(),
            ColumnData::Int64(v) => v.len(),
            ColumnData::Float32(v) => v.len(),
            ColumnData::Float64(v) => v.len(),
            ColumnData::Text(v) => v.len(),
            ColumnData::Categorical(c) => c.len(),
            ColumnData::DateTime(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Approximate memory footprint in bytes.
    pub fn memory_usage(&self) -> usize {
        match self {
            ColumnData::Bool(v) => std::mem::size_of_val(v.as_slice()),
            ColumnData::UInt8(v) => std::mem::size_of_val(v.as_slice()),
            ColumnData::UInt16(v) => std::mem::size_of_val(v.as_slice()),
            ColumnData::UInt32(v) => std::mem::size_of_val(v.as_slice()),
            ColumnData::UInt64(v) => std::mem::size_of_val(v.as_slice()),
            ColumnData::Int8(v) => std::mem::size_of_val(v.as_slice()),
            ColumnData::Int16(v) => std::mem::size_of_val(v.as_slice()),
            ColumnData::Int32(v) => std::mem::size_of_val(v.as_slice()),
            ColumnData::Int64(v) => std::mem::size_of_val(v.as_slice()),
            ColumnData::Float32(v) => std::mem::size_of_val(v.as_slice()),
            ColumnData::Float64(v) => std::mem::size_of_val(v.as_slice()),
            ColumnData::Text(v) => {
                let heap: usize = v.iter().flatten().map(String::len).sum();
                std::mem::size_of_val(v.as_slice()) + heap
            }
            ColumnData::Categorical(c) => c.memory_usage(),
            ColumnData::DateTime(v) => std::mem::size_of_val(v.as_slice()),
        }
    }

    /// Number of distinct non-missing values.
    pub fn n_unique(&self) -> usize {
        match self {
            ColumnData::Bool(v) => v.iter().collect::<HashSet<_>>().len(),
            ColumnData::Float32(v) => distinct_floats(v.iter().map(|x| *x as f64)),
            ColumnData::Float64(v) => distinct_floats(v.iter().copied()),
            ColumnData::Text(v) => v.iter().flatten().collect::<HashSet<_>>().len(),
            ColumnData::Categorical(c) => c.present_codes().len(),
            ColumnData::DateTime(v) => v.iter().flatten().collect::<HashSet<_>>().len(),
            _ => self
                .integer_values()
                .map(|values| values.into_iter().collect::<HashSet<_>>().len())
                .unwrap_or(0),
        }
    }

    /// Values of an integer column widened to `i128`.
    pub(crate) fn integer_values(&self) -> Option<Vec<i128>> {
        let values = match self {
            ColumnData::UInt8(v) => v.iter().map(|x| *x as i128).collect(),
            ColumnData::UInt16(v) => v.iter().map(|x| *x as i128).collect(),
            ColumnData::UInt32(v) => v.iter().map(|x| *x as i128).collect(),
            ColumnData::UInt64(v) => v.iter().map(|x| *x as i128).collect(),
            ColumnData::Int8(v) => v.iter().map(|x| *x as i128).collect(),
            ColumnData::Int16(v) => v.iter().map(|x| *x as i128).collect(),
            ColumnData::Int32(v) => v.iter().map(|x| *x as i128).collect(),
            ColumnData::Int64(v) => v.iter().map(|x| *x as i128).collect(),
            _ => return None,
        };
        Some(values)
    }

    /// Values of a numeric or boolean column as `f64`.
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        let values = match self {
            ColumnData::Bool(v) => v.iter().map(|b| if *b { 1.0 } else { 0.0 }).collect(),
            ColumnData::UInt8(v) => v.iter().map(|x| *x as f64).collect(),
            ColumnData::UInt16(v) => v.iter().map(|x| *x as f64).collect(),
            ColumnData::UInt32(v) => v.iter().map(|x| *x as f64).collect(),
            ColumnData::UInt64(v) => v.iter().map(|x| *x as f64).collect(),
            ColumnData::Int8(v) => v.iter().map(|x| *x as f64).collect(),
            ColumnData::Int16(v) => v.iter().map(|x| *x as f64).collect(),
            ColumnData::Int32(v) => v.iter().map(|x| *x as f64).collect(),
            ColumnData::Int64(v) => v.iter().map(|x| *x as f64).collect(),
            ColumnData::Float32(v) => v.iter().map(|x| *x as f64).collect(),
            ColumnData::Float64(v) => v.clone(),
            _ => return None,
        };
        Some(values)
    }

    /// Render one cell as text. Missing values render as `None`.
    pub fn display(&self, row: usize) -> Option<String> {
        match self {
            ColumnData::Bool(v) => v.get(row).map(|x| x.to_string()),
            ColumnData::UInt8(v) => v.get(row).map(|x| x.to_string()),
            ColumnData::UInt16(v) => v.get(row).map(|x| x.to_string()),
            ColumnData::UInt32(v) => v.get(row).map(|x| x.to_string()),
            ColumnData::UInt64(v) => v.get(row).map(|x| x.to_string()),
            ColumnData::Int8(v) => v.get(row).map(|x| x.to_string()),
            ColumnData::Int16(v) => v.get(row).map(|x| x.to_string()),
            ColumnData::Int32(v) => v.get(row).map(|x| x.to_string()),
            ColumnData::Int64(v) => v.get(row).map(|x| x.to_string()),
            ColumnData::Float32(v) => v.get(row).filter(|x| !x.is_nan()).map(|x| x.to_string()),
            ColumnData::Float64(v) => v.get(row).filter(|x| !x.is_nan()).map(|x| x.to_string()),
            ColumnData::Text(v) => v.get(row).cloned().flatten(),
            ColumnData::Categorical(c) => c.label(row).map(str::to_string),
            ColumnData::DateTime(v) => v.get(row).copied().flatten().map(format_timestamp),
        }
    }
}

/// Format a timestamp as a date, adding the time only when it is not midnight.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    if ts.time() == chrono::NaiveTime::MIN {
        ts.format("%Y-%m-%d").to_string()
    } else {
        ts.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

fn distinct_floats(values: impl Iterator<Item = f64>) -> usize {
    values
        .filter(|x| !x.is_nan())
        // -0.0 and 0.0 compare equal
        .map(|x| if x == 0.0 { 0.0f64.to_bits() } else { x.to_bits() })
        .collect::<HashSet<_>>()
        .len()
}
