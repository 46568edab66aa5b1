//! Spreadsheet output
//!
//! The conversion pass talks to a [`SpreadsheetSink`]; [`XlsxSink`] is the
//! workbook-backed implementation.

mod xlsx;

pub use xlsx::XlsxSink;

use std::path::Path;

use crate::convert::row::Cell;
use crate::error::Result;

/// Receives sheet and cell writes and persists the finished document.
pub trait SpreadsheetSink {
    /// Start a new sheet; subsequent cell writes target it.
    fn add_sheet(&mut self, name: &str) -> Result<()>;

    /// Write one cell on the current sheet.
    fn write_cell(&mut self, row: u32, col: u16, cell: &Cell) -> Result<()>;

    /// Persist the document.
    fn save(&mut self, path: &Path) -> Result<()>;
}
