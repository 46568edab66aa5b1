//! Vault-to-sheet conversion pass
//!
//! Single pass over accounts, vaults and items, no backtracking. Fatal
//! conditions abort with an error; structural anomalies are warned about and
//! the pass continues with the next vault or item.

use crate::console::{Console, Reporter};
use crate::convert::row::{COLUMNS, Cell, build_row};
use crate::error::{ConvertError, Result};
use crate::json::Value;
use crate::model::Export;
use crate::sink::SpreadsheetSink;

/// Totals and anomalies gathered over one conversion pass
#[derive(Debug, Default)]
pub struct ConvertReport {
    /// Sheets created, one per non-empty vault
    pub sheets: usize,
    /// Data rows written
    pub rows: usize,
    /// Items skipped for missing overviews
    pub skipped_items: usize,
    /// Warning messages, in emission order
    pub warnings: Vec<String>,
}

/// Convert a parsed export document into sheet writes against `sink`.
///
/// Only the first account is processed; further accounts trigger a warning.
pub fn convert(
    document: &Value,
    sink: &mut dyn SpreadsheetSink,
    console: &Console,
) -> Result<ConvertReport> {
    let export = Export::new(document);
    let accounts = export.accounts();

    if accounts.is_empty() {
        return Err(ConvertError::MalformedExport(
            "no accounts in export".to_string(),
        ));
    }

    let mut reporter = Reporter::new(console);
    let mut report = ConvertReport::default();

    if accounts.len() > 1 {
        reporter.warn("only exporting one account".to_string());
    }

    let account = &accounts[0];
    reporter.info(&format!("Processing account: {}", account.name()));

    for (vault_index, vault) in account.vaults().into_iter().enumerate() {
        let folder = vault
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Vault {}", vault_index + 1));
        reporter.info(&format!("Processing folder: {}", folder));

        let items = vault.items();
        if items.is_empty() {
            reporter.warn(format!("Vault '{}' has no items, skipping", folder));
            continue;
        }

        sink.add_sheet(&folder)?;
        report.sheets += 1;

        for (col, header) in COLUMNS.iter().enumerate() {
            sink.write_cell(0, col as u16, &Cell::Text((*header).to_string()))?;
        }

        // Skipped items still consume their row number.
        for (index, item) in items.iter().enumerate() {
            let row = (index + 1) as u32;

            let Some(build) = build_row(item) else {
                reporter.warn("Overview is empty! Skipping item".to_string());
                report.skipped_items += 1;
                continue;
            };

            for designation in &build.unknown_designations {
                reporter.warn(format!(
                    "Unknown login field designation '{}', ignoring",
                    designation
                ));
            }

            for (col, cell) in build.cells.iter().enumerate() {
                sink.write_cell(row, col as u16, cell)?;
            }
            report.rows += 1;
        }
    }

    report.warnings = reporter.into_warnings();
    Ok(report)
}
