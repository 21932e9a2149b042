//! Dataset loading from paths, URLs and uploads.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{ParcoordsError, Result};
use crate::table::Table;

use super::fixed_width::parse_fixed_width;
use super::infer::type_columns;
use super::parser::{Parser, ParserConfig};
use super::source::{RawTable, SourceMetadata};
use super::spreadsheet::parse_spreadsheet;

/// Loader configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Delimiter for delimited files (None = auto-detect).
    pub delimiter: Option<char>,
    /// Whether files have a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character for delimited files.
    pub quote: char,
    /// Lines sampled to infer fixed-width column boundaries.
    pub fixed_width_sample_rows: usize,
    /// Timeout for URL downloads, in seconds.
    pub http_timeout_secs: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: '"',
            fixed_width_sample_rows: 100,
            http_timeout_secs: 30,
        }
    }
}

impl LoaderConfig {
    /// Delimiter and quote must be single ASCII characters.
    pub fn validate(&self) -> Result<()> {
        self.parser_config().map(|_| ())
    }

    fn parser_config(&self) -> Result<ParserConfig> {
        Ok(ParserConfig {
            delimiter: self.delimiter.map(|c| ascii_byte("delimiter", c)).transpose()?,
            has_header: self.has_header,
            max_rows: self.max_rows,
            quote: ascii_byte("quote", self.quote)?,
        })
    }
}

fn ascii_byte(field: &str, c: char) -> Result<u8> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(ParcoordsError::Config(format!(
            "{} must be an ASCII character, got '{}'",
            field, c
        )))
    }
}

/// On-disk layout of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// CSV, TSV and friends.
    Delimited,
    /// Whitespace-aligned columns.
    FixedWidth,
    /// Excel or OpenDocument workbook; the first sheet is read.
    Spreadsheet,
}

impl DataFormat {
    /// Pick a format from a file name or URL.
    ///
    /// With `strict`, unknown extensions are rejected; otherwise they are read
    /// as delimited text.
    pub fn from_name(name: &str, strict: bool) -> Result<Self> {
        let ext = extension(name);
        match ext.as_str() {
            "csv" | "tsv" | "txt" => Ok(DataFormat::Delimited),
            "dat" => Ok(DataFormat::FixedWidth),
            "xls" | "xlsx" | "xlsm" | "xlsb" | "ods" => Ok(DataFormat::Spreadsheet),
            _ if !strict => Ok(DataFormat::Delimited),
            "" => Err(ParcoordsError::UnsupportedFormat(format!(
                "file '{}' has no extension",
                name
            ))),
            _ => Err(ParcoordsError::UnsupportedFormat(format!(
                "unsupported file extension .{}",
                ext
            ))),
        }
    }
}

/// Lowercased extension of a path or URL, ignoring query and fragment.
fn extension(name: &str) -> String {
    let name = name.split(['?', '#']).next().unwrap_or(name);
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Loads datasets into typed tables.
///
/// Loading never normalizes; callers decide when to run normalization so that a
/// failed load leaves their current table alone.
pub struct Loader {
    config: LoaderConfig,
    parser: Parser,
}

impl Loader {
    /// Create a loader with default configuration.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
            parser: Parser::new(),
        }
    }

    /// Create a loader with custom configuration.
    ///
    /// Fails with `Config` when the delimiter or quote is not ASCII.
    pub fn with_config(config: LoaderConfig) -> Result<Self> {
        let parser = Parser::with_config(config.parser_config()?);
        Ok(Self { config, parser })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a file from disk.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let format = DataFormat::from_name(&origin, false)?;

        tracing::info!(path = %origin, "loading dataset from file");
        let bytes = std::fs::read(path).map_err(|e| ParcoordsError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.load_bytes(&origin, &bytes, format)
    }

    /// Download and load a dataset.
    pub fn load_url(&self, url: &str) -> Result<(Table, SourceMetadata)> {
        let format = DataFormat::from_name(url, false)?;

        tracing::info!(url, "loading dataset from url");
        let http_err = |source| ParcoordsError::Http {
            url: url.to_string(),
            source,
        };
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.config.http_timeout_secs))
            .build()
            .map_err(http_err)?;
        let bytes = client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.bytes())
            .map_err(http_err)?;

        self.load_bytes(url, &bytes, format)
    }

    /// Load an uploaded file. Unknown extensions are rejected.
    pub fn load_upload(&self, filename: &str, bytes: &[u8]) -> Result<(Table, SourceMetadata)> {
        let format = DataFormat::from_name(filename, true)?;
        tracing::info!(filename, "attempting to load uploaded file");
        self.load_bytes(filename, bytes, format)
    }

    /// Parse and type raw bytes in a known format.
    pub fn load_bytes(
        &self,
        origin: &str,
        bytes: &[u8],
        format: DataFormat,
    ) -> Result<(Table, SourceMetadata)> {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let (raw, format_name) = self.parse(bytes, format)?;
        let table = type_columns(&raw)?;

        tracing::debug!(
            origin,
            rows = table.row_count(),
            columns = table.column_count(),
            format = format_name,
            "parsed dataset"
        );

        let source = SourceMetadata::new(
            origin,
            hash,
            bytes.len() as u64,
            format_name.to_string(),
            table.row_count(),
            table.column_count(),
        );

        Ok((table, source))
    }

    fn parse(&self, bytes: &[u8], format: DataFormat) -> Result<(RawTable, &'static str)> {
        match format {
            DataFormat::Delimited => self.parser.parse(bytes),
            DataFormat::FixedWidth => {
                let raw = parse_fixed_width(
                    bytes,
                    self.config.has_header,
                    self.config.fixed_width_sample_rows,
                    self.config.max_rows,
                )?;
                Ok((raw, "fixed-width"))
            }
            DataFormat::Spreadsheet => {
                let raw = parse_spreadsheet(bytes, self.config.has_header, self.config.max_rows)?;
                Ok((raw, "spreadsheet"))
            }
        }
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
