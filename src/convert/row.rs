//! Item row construction
//!
//! Resolves one credential item into the fixed 8-cell output row, applying
//! the documented fallbacks for absent keys.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::convert::fields::{filter_fields, scan_login_fields, scan_totp};
use crate::model::{Item, Section};

/// Column headers, in output order
pub const COLUMNS: [&str; 8] = [
    "Title", "URL", "Username", "Password", "OTP", "Created", "Updated", "Notes",
];

/// Format used when rendering timestamp cells as text
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// One spreadsheet cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Timestamp(dt) => write!(f, "{}", dt.format(TIMESTAMP_DISPLAY_FORMAT)),
        }
    }
}

/// One output row: the eight cells matching [`COLUMNS`]
pub type Row = [Cell; 8];

/// A built row plus the anomalies found while building it
#[derive(Debug)]
pub struct RowBuild {
    pub cells: Row,
    /// Login field designations that were present but not recognized
    pub unknown_designations: Vec<String>,
}

/// Build the output row for one item.
///
/// Returns `None` when the item lacks an `overview` block; such items are
/// skipped entirely (the caller warns and still advances the row index).
pub fn build_row(item: &Item<'_>) -> Option<RowBuild> {
    let overview = item.overview()?;

    let sections = item.sections();
    let login = scan_login_fields(&item.login_fields());

    let cells = [
        Cell::Text(overview.title().to_string()),
        Cell::Text(overview.url().to_string()),
        Cell::Text(login.username),
        Cell::Text(login.password),
        Cell::Text(scan_totp(&sections)),
        Cell::Timestamp(to_utc(item.created_at())),
        Cell::Timestamp(to_utc(item.updated_at())),
        Cell::Text(assemble_notes(item.notes_plain(), &sections)),
    ];

    Some(RowBuild {
        cells,
        unknown_designations: login.unknown_designations,
    })
}

/// Epoch seconds to an absolute UTC instant; out-of-range values clamp to
/// epoch 0.
fn to_utc(epoch_seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(epoch_seconds, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// `notesPlain` plus one filtered field block per section, non-empty parts
/// joined by blank lines.
fn assemble_notes(notes_plain: &str, sections: &[Section<'_>]) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !notes_plain.is_empty() {
        parts.push(notes_plain.to_string());
    }

    for section in sections {
        let fields = section.fields();
        if fields.is_empty() {
            continue;
        }
        let lines = filter_fields(&fields);
        if !lines.is_empty() {
            parts.push(lines.join("\n"));
        }
    }

    parts.join("\n\n")
}
