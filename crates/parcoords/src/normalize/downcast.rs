//! Lossless narrowing of numeric columns.

use crate::table::{ColumnData, DType, ValueKind};

const UNSIGNED: [DType; 4] = [DType::UInt8, DType::UInt16, DType::UInt32, DType::UInt64];
const SIGNED: [DType; 4] = [DType::Int8, DType::Int16, DType::Int32, DType::Int64];

/// Absolute tolerance for accepting a `Float32` copy of `Float64` data.
pub const FLOAT32_TOLERANCE: f64 = 5e-4;

/// Try unsigned, then signed, then float narrowing; the first one that
/// changes the storage type wins.
///
/// Returns `None` when the column keeps its current type.
pub fn downcast(data: &ColumnData) -> Option<ColumnData> {
    let kind = data.dtype().kind();

    if kind.is_numeric() {
        if let Some(narrowed) = to_integer(data, &UNSIGNED) {
            return Some(narrowed);
        }
    }

    if matches!(kind, ValueKind::SignedInteger | ValueKind::Float) {
        if let Some(narrowed) = to_integer(data, &SIGNED) {
            return Some(narrowed);
        }
    }

    if kind == ValueKind::Float {
        // float32 rounding can leave only whole numbers behind
        let narrowed = to_float32(data)?;
        let settled = to_integer(&narrowed, &UNSIGNED)
            .or_else(|| to_integer(&narrowed, &SIGNED))
            .unwrap_or(narrowed);
        return Some(settled);
    }

    None
}

/// Narrow to the first candidate no wider than the current type that holds
/// every value exactly.
fn to_integer(data: &ColumnData, candidates: &[DType]) -> Option<ColumnData> {
    let current = data.dtype();
    let width = current.numeric_width()?;
    let values = exact_integers(data)?;

    let (min, max) = values
        .iter()
        .fold((0i128, 0i128), |(lo, hi), v| (lo.min(*v), hi.max(*v)));

    let target = candidates
        .iter()
        .filter(|c| c.numeric_width().is_some_and(|w| w <= width))
        .find(|c| {
            c.integer_bounds()
                .is_some_and(|(lo, hi)| lo <= min && max <= hi)
        })?;

    if *target == current {
        return None;
    }
    from_integers(*target, &values)
}

/// Integer view of a column, if every value is a finite whole number.
fn exact_integers(data: &ColumnData) -> Option<Vec<i128>> {
    match data {
        ColumnData::Float32(v) => v.iter().map(|x| float_to_int(*x as f64)).collect(),
        ColumnData::Float64(v) => v.iter().map(|x| float_to_int(*x)).collect(),
        _ => data.integer_values(),
    }
}

fn float_to_int(x: f64) -> Option<i128> {
    // 1e38 keeps the cast inside i128 range
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e38 {
        Some(x as i128)
    } else {
        None
    }
}

fn from_integers(dtype: DType, values: &[i128]) -> Option<ColumnData> {
    let data = match dtype {
        DType::UInt8 => ColumnData::UInt8(values.iter().map(|v| *v as u8).collect()),
        DType::UInt16 => ColumnData::UInt16(values.iter().map(|v| *v as u16).collect()),
        DType::UInt32 => ColumnData::UInt32(values.iter().map(|v| *v as u32).collect()),
        DType::UInt64 => ColumnData::UInt64(values.iter().map(|v| *v as u64).collect()),
        DType::Int8 => ColumnData::Int8(values.iter().map(|v| *v as i8).collect()),
        DType::Int16 => ColumnData::Int16(values.iter().map(|v| *v as i16).collect()),
        DType::Int32 => ColumnData::Int32(values.iter().map(|v| *v as i32).collect()),
        DType::Int64 => ColumnData::Int64(values.iter().map(|v| *v as i64).collect()),
        _ => return None,
    };
    Some(data)
}

fn to_float32(data: &ColumnData) -> Option<ColumnData> {
    let ColumnData::Float64(values) = data else {
        return None;
    };

    let narrowed: Vec<f32> = values.iter().map(|x| *x as f32).collect();
    let close = values
        .iter()
        .zip(&narrowed)
        .all(|(wide, narrow)| within_tolerance(*wide, *narrow as f64));

    close.then_some(ColumnData::Float32(narrowed))
}

fn within_tolerance(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= FLOAT32_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_non_negative_ints_become_uint8() {
        let data = ColumnData::Int64(vec![0, 17, 200]);
        assert_eq!(downcast(&data), Some(ColumnData::UInt8(vec![0, 17, 200])));
    }

    #[test]
    fn test_negative_ints_become_signed() {
        let data = ColumnData::Int64(vec![-5, 100]);
        assert_eq!(downcast(&data), Some(ColumnData::Int8(vec![-5, 100])));

        let data = ColumnData::Int64(vec![-5, 1000]);
        assert_eq!(downcast(&data), Some(ColumnData::Int16(vec![-5, 1000])));
    }

    #[test]
    fn test_whole_floats_become_integers() {
        let data = ColumnData::Float64(vec![1.0, 2.0, 300.0]);
        assert_eq!(downcast(&data), Some(ColumnData::UInt16(vec![1, 2, 300])));

        let data = ColumnData::Float64(vec![-1.0, 2.0]);
        assert_eq!(downcast(&data), Some(ColumnData::Int8(vec![-1, 2])));
    }

    #[test]
    fn test_fractional_floats_become_float32() {
        let data = ColumnData::Float64(vec![5.1, 3.5, 1.4]);
        assert_eq!(downcast(&data).map(|d| d.dtype()), Some(DType::Float32));
    }

    #[test]
    fn test_float32_rounding_to_whole_numbers_settles_on_integer() {
        let data = ColumnData::Float64(vec![8192.0002, 100.0]);
        let narrowed = downcast(&data).unwrap();
        assert_eq!(narrowed, ColumnData::UInt16(vec![8192, 100]));
        assert_eq!(downcast(&narrowed), None);

        let data = ColumnData::Float64(vec![-8192.0002, 3.0]);
        assert_eq!(downcast(&data), Some(ColumnData::Int16(vec![-8192, 3])));
    }

    #[test]
    fn test_nan_blocks_integer_but_not_float32() {
        let data = ColumnData::Float64(vec![1.0, f64::NAN]);
        assert_eq!(downcast(&data).map(|d| d.dtype()), Some(DType::Float32));
    }

    #[test]
    fn test_precise_floats_stay_wide() {
        let data = ColumnData::Float64(vec![1.0e10 + 0.5]);
        assert_eq!(downcast(&data), None);
    }

    #[test]
    fn test_already_narrow_is_unchanged() {
        assert_eq!(downcast(&ColumnData::UInt8(vec![1, 2])), None);
        assert_eq!(downcast(&ColumnData::Int8(vec![-1, 2])), None);
        assert_eq!(downcast(&ColumnData::Float32(vec![0.5])), None);
        assert_eq!(downcast(&ColumnData::Bool(vec![true])), None);
    }

    #[test]
    fn test_narrowing_never_widens() {
        // float32 holding a whole number above u32::MAX cannot become uint64
        let data = ColumnData::Float32(vec![8.0e9]);
        assert_eq!(downcast(&data), None);

        // uint16 values that need 16 bits stay put
        assert_eq!(downcast(&ColumnData::UInt16(vec![40_000])), None);
    }

    #[test]
    fn test_large_unsigned_int64_becomes_uint64() {
        let data = ColumnData::Int64(vec![0, i64::MAX]);
        assert_eq!(downcast(&data), Some(ColumnData::UInt64(vec![0, i64::MAX as u64])));
    }

    #[test]
    fn test_text_is_not_numeric() {
        assert_eq!(downcast(&ColumnData::Text(vec![Some("1".into())])), None);
    }
}
