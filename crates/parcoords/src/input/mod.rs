//! Input parsing and data source handling.

mod fixed_width;
mod infer;
mod loader;
mod parser;
mod source;
mod spreadsheet;
mod upload;

pub use fixed_width::parse_fixed_width;
pub use infer::type_columns;
pub use loader::{DataFormat, Loader, LoaderConfig};
pub use parser::{Parser, ParserConfig};
pub use source::{RawTable, SourceMetadata};
pub use spreadsheet::parse_spreadsheet;
pub use upload::decode_upload;
