//! Error types for pux2xlsx

use thiserror::Error;

/// Main error type for conversion runs
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input archive missing at the given path
    #[error("Archive not found: {0}")]
    ArchiveNotFound(String),

    /// Archive exists but cannot be opened or decompressed
    #[error("Archive error: {0}")]
    ArchiveError(String),

    /// The export member is missing or its content is not valid JSON
    #[error("Malformed export: {0}")]
    MalformedExport(String),

    /// Workbook construction or save failed
    #[error("Spreadsheet error: {0}")]
    SheetError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for ConvertError {
    fn from(err: zip::result::ZipError) -> Self {
        ConvertError::ArchiveError(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ConvertError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ConvertError::SheetError(err.to_string())
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
