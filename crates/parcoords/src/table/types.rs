//! Core type definitions for column storage and classification.

use serde::{Deserialize, Serialize};

/// Physical storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DType {
    Bool,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    /// Free text, nullable.
    Text,
    /// Dictionary-encoded labels.
    Categorical,
    /// Timestamps without time zone, nullable.
    DateTime,
}

impl DType {
    /// The semantic kind of values stored with this type.
    pub fn kind(&self) -> ValueKind {
        match self {
            DType::Bool => ValueKind::Boolean,
            DType::UInt8 | DType::UInt16 | DType::UInt32 | DType::UInt64 => {
                ValueKind::UnsignedInteger
            }
            DType::Int8 | DType::Int16 | DType::Int32 | DType::Int64 => ValueKind::SignedInteger,
            DType::Float32 | DType::Float64 => ValueKind::Float,
            DType::Text => ValueKind::Text,
            DType::Categorical => ValueKind::Categorical,
            DType::DateTime => ValueKind::Date,
        }
    }

    /// Width in bytes of one element, for fixed-width numeric types.
    pub fn numeric_width(&self) -> Option<usize> {
        match self {
            DType::UInt8 | DType::Int8 => Some(1),
            DType::UInt16 | DType::Int16 => Some(2),
            DType::UInt32 | DType::Int32 | DType::Float32 => Some(4),
            DType::UInt64 | DType::Int64 | DType::Float64 => Some(8),
            _ => None,
        }
    }

    /// Inclusive integer range representable by an integer type.
    pub(crate) fn integer_bounds(&self) -> Option<(i128, i128)> {
        match self {
            DType::UInt8 => Some((0, u8::MAX as i128)),
            DType::UInt16 => Some((0, u16::MAX as i128)),
            DType::UInt32 => Some((0, u32::MAX as i128)),
            DType::UInt64 => Some((0, u64::MAX as i128)),
            DType::Int8 => Some((i8::MIN as i128, i8::MAX as i128)),
            DType::Int16 => Some((i16::MIN as i128, i16::MAX as i128)),
            DType::Int32 => Some((i32::MIN as i128, i32::MAX as i128)),
            DType::Int64 => Some((i64::MIN as i128, i64::MAX as i128)),
            _ => None,
        }
    }

    /// Short name used in summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::UInt8 => "uint8",
            DType::UInt16 => "uint16",
            DType::UInt32 => "uint32",
            DType::UInt64 => "uint64",
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Text => "text",
            DType::Categorical => "category",
            DType::DateTime => "datetime",
        }
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic kind of a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Boolean,
    UnsignedInteger,
    SignedInteger,
    Float,
    /// Generic values that have not been refined (strings).
    Text,
    Categorical,
    Date,
}

impl ValueKind {
    /// Returns true for integer and floating-point kinds.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ValueKind::UnsignedInteger | ValueKind::SignedInteger | ValueKind::Float
        )
    }
}

/// How a column is treated when plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Timestamps, plotted by rank of distinct value.
    Date,
    /// Finite label set, plotted by category code.
    Categorical,
    /// Plotted by value.
    Numeric,
    /// Text with too many distinct values to be categorical.
    FreeText,
}

impl From<ValueKind> for Classification {
    fn from(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Date => Classification::Date,
            ValueKind::Categorical => Classification::Categorical,
            ValueKind::Text => Classification::FreeText,
            ValueKind::Boolean
            | ValueKind::UnsignedInteger
            | ValueKind::SignedInteger
            | ValueKind::Float => Classification::Numeric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(DType::UInt16.kind(), ValueKind::UnsignedInteger);
        assert_eq!(DType::Int8.kind(), ValueKind::SignedInteger);
        assert_eq!(DType::Float32.kind(), ValueKind::Float);
        assert_eq!(DType::Categorical.kind(), ValueKind::Categorical);
        assert!(DType::Float64.kind().is_numeric());
        assert!(!DType::Bool.kind().is_numeric());
    }

    #[test]
    fn test_classification_from_kind() {
        assert_eq!(Classification::from(ValueKind::Date), Classification::Date);
        assert_eq!(Classification::from(ValueKind::Text), Classification::FreeText);
        assert_eq!(Classification::from(ValueKind::Boolean), Classification::Numeric);
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(DType::UInt8.integer_bounds(), Some((0, 255)));
        assert_eq!(DType::Int16.integer_bounds(), Some((-32768, 32767)));
        assert_eq!(DType::Float32.integer_bounds(), None);
    }
}
