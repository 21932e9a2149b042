//! In-memory table model: typed columns, categorical encoding, kinds.

mod categorical;
mod column;
mod frame;
mod types;

pub(crate) use categorical::dense_codes;
pub use categorical::Categorical;
pub use column::{format_timestamp, ColumnData};
pub use frame::Table;
pub use types::{Classification, DType, ValueKind};
