//! # pux2xlsx
//!
//! Converts a 1Password 1PUX export archive into an Excel workbook.
//!
//! ## Features
//!
//! - Duplicate-key-safe JSON decoding (no value is silently dropped)
//! - One worksheet per non-empty vault, one row per credential item
//! - Tolerant handling of missing keys, odd field shapes, and the
//!   alternate nested item layout some exports use
//! - Timezone-aware UTC timestamps for created/updated columns
//!
//! ## Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use pux2xlsx::{Console, ConvertConfig};
//!
//! let config = ConvertConfig::new(PathBuf::from("export.1pux"), None, false);
//! let console = Console::new(config.quiet);
//! let report = pux2xlsx::run(&config, &console).unwrap();
//! println!("{} rows written", report.rows);
//! ```

pub mod archive;
pub mod config;
pub mod console;
pub mod convert;
pub mod error;
pub mod json;
pub mod model;
pub mod sink;

// Re-export main types
pub use config::ConvertConfig;
pub use console::{Console, Reporter};
pub use convert::row::{Cell, Row, COLUMNS};
pub use convert::run::{convert, ConvertReport};
pub use error::{ConvertError, Result};
pub use json::Value;
pub use model::Export;
pub use sink::{SpreadsheetSink, XlsxSink};

/// Name of the JSON member inside a 1PUX archive
pub const EXPORT_MEMBER: &str = "export.data";

/// Prefix marking one-time-password provisioning URIs
pub const OTP_URI_PREFIX: &str = "otpauth://";

/// Extension used for the default output path
pub const OUTPUT_EXTENSION: &str = "xlsx";

/// Convert the archive named in `config` and save the workbook.
///
/// Fatal conditions (unreadable archive, malformed export, workbook write
/// failure) abort the run with no output file written. Structural anomalies
/// in the export are warned about and collected in the returned report.
pub fn run(config: &ConvertConfig, console: &Console) -> Result<ConvertReport> {
    let document = archive::read_export(&config.archive_path)?;

    let mut sink = XlsxSink::new();
    let report = convert(&document, &mut sink, console)?;
    sink.save(&config.output_path)?;

    Ok(report)
}
