//! The extraction-and-transformation pipeline
//!
//! Walks the parsed export (accounts, vaults, items) and produces normalized
//! spreadsheet rows: field filtering, login/TOTP scans, row construction and
//! the vault-to-sheet pass.

pub mod fields;
pub mod row;
pub mod run;

pub use fields::{LoginScan, filter_fields, scan_login_fields, scan_totp};
pub use row::{COLUMNS, Cell, Row, RowBuild, build_row};
pub use run::{ConvertReport, convert};
