//! Excel workbook sink
//!
//! Wraps `rust_xlsxwriter`. Vault names are mapped onto legal worksheet
//! names: forbidden characters replaced, length capped at the format limit,
//! duplicates renamed with an integer suffix.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::convert::row::Cell;
use crate::error::{ConvertError, Result};
use crate::sink::SpreadsheetSink;

/// Longest sheet name the xlsx format allows
const MAX_SHEET_NAME_LEN: usize = 31;

/// Workbook-backed sink
pub struct XlsxSink {
    workbook: Workbook,
    timestamp_format: Format,
    sheet_names: Vec<String>,
}

impl XlsxSink {
    pub fn new() -> Self {
        Self {
            workbook: Workbook::new(),
            timestamp_format: Format::new().set_num_format("yyyy-mm-dd hh:mm:ss"),
            sheet_names: Vec::new(),
        }
    }

    /// Map a vault name onto a legal, unique sheet name.
    fn sheet_name(&self, name: &str) -> String {
        let mut base: String = name
            .chars()
            .map(|c| {
                if matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\') {
                    '_'
                } else {
                    c
                }
            })
            .collect();

        // Worksheet names may not start or end with an apostrophe.
        base = base.trim_matches('\'').to_string();
        if base.trim().is_empty() {
            base = "Sheet".to_string();
        }
        base = truncate_chars(&base, MAX_SHEET_NAME_LEN);

        // Duplicate names get an integer suffix, the same policy the JSON
        // loader applies to colliding keys.
        let mut candidate = base.clone();
        let mut suffix = 0u32;
        while self.name_taken(&candidate) {
            let tail = suffix.to_string();
            let stem = truncate_chars(&base, MAX_SHEET_NAME_LEN - tail.len());
            candidate = format!("{}{}", stem, tail);
            suffix += 1;
        }
        candidate
    }

    /// Case-insensitive, matching the xlsx uniqueness rule
    fn name_taken(&self, candidate: &str) -> bool {
        self.sheet_names
            .iter()
            .any(|name| name.eq_ignore_ascii_case(candidate))
    }
}

impl Default for XlsxSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SpreadsheetSink for XlsxSink {
    fn add_sheet(&mut self, name: &str) -> Result<()> {
        let sheet_name = self.sheet_name(name);
        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(sheet_name.as_str())?;
        self.sheet_names.push(sheet_name);
        Ok(())
    }

    fn write_cell(&mut self, row: u32, col: u16, cell: &Cell) -> Result<()> {
        let index = self
            .sheet_names
            .len()
            .checked_sub(1)
            .ok_or_else(|| ConvertError::SheetError("no sheet added".to_string()))?;
        let worksheet = self.workbook.worksheet_from_index(index)?;

        match cell {
            Cell::Text(text) => {
                worksheet.write_string(row, col, text.as_str())?;
            }
            Cell::Timestamp(dt) => {
                worksheet.write_datetime_with_format(
                    row,
                    col,
                    &dt.naive_utc(),
                    &self.timestamp_format,
                )?;
            }
        }
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        self.workbook.save(path)?;
        Ok(())
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
