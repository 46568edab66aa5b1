//! End-to-end conversion tests
//!
//! Each test builds a real 1PUX zip fixture in a temp directory, runs the
//! full conversion, and reads the produced workbook back with calamine.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use calamine::{Data, DataType, Reader, Xlsx, open_workbook};
use pux2xlsx::{Console, ConvertConfig, ConvertError, ConvertReport};
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn write_1pux(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("export.1pux");
    let file = File::create(&path).unwrap();
    let mut zip = ZipWriter::new(file);

    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    zip.start_file("export.data", options).unwrap();
    zip.write_all(json.as_bytes()).unwrap();
    zip.finish().unwrap();

    path
}

fn run_conversion(dir: &Path, json: &str) -> (PathBuf, ConvertReport) {
    let archive = write_1pux(dir, json);
    let output = dir.join("out.xlsx");
    let config = ConvertConfig::new(archive, Some(output.clone()), true);
    let console = Console::new(true);

    let report = pux2xlsx::run(&config, &console).unwrap();
    (output, report)
}

fn cell_text(range: &calamine::Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(value) if !value.is_empty() => value.get_string().unwrap_or_default().to_string(),
        _ => String::new(),
    }
}

#[test]
fn test_example_export_to_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let (output, report) = run_conversion(
        temp_dir.path(),
        r#"{"accounts": [{"attrs": {"name": "Personal"}, "vaults": [
            {"attrs": {"name": "Logins"}, "items": [
                {"overview": {"title": "Bank", "url": "bank.com"},
                 "details": {"notesPlain": "",
                             "loginFields": [{"designation": "username", "value": "alice"}],
                             "sections": []},
                 "createdAt": 0, "updatedAt": 0}]}]}]}"#,
    );

    assert_eq!(report.sheets, 1);
    assert_eq!(report.rows, 1);
    assert!(report.warnings.is_empty());

    let mut workbook: Xlsx<_> = open_workbook(&output).unwrap();
    let names = workbook.sheet_names();
    assert_eq!(names, vec!["Logins".to_string()]);

    let range = workbook.worksheet_range("Logins").unwrap();

    let headers = [
        "Title", "URL", "Username", "Password", "OTP", "Created", "Updated", "Notes",
    ];
    for (col, header) in headers.iter().enumerate() {
        assert_eq!(cell_text(&range, 0, col as u32), *header);
    }

    assert_eq!(cell_text(&range, 1, 0), "Bank");
    assert_eq!(cell_text(&range, 1, 1), "bank.com");
    assert_eq!(cell_text(&range, 1, 2), "alice");
    assert_eq!(cell_text(&range, 1, 3), "");
    assert_eq!(cell_text(&range, 1, 4), "");
    assert_eq!(cell_text(&range, 1, 7), "");

    // Created/Updated are real datetime cells holding the epoch-0 instant.
    let created = range.get_value((1, 5)).unwrap();
    let expected = chrono::NaiveDate::from_ymd_opt(1970, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(created.as_datetime(), Some(expected));
    let updated = range.get_value((1, 6)).unwrap();
    assert_eq!(updated.as_datetime(), Some(expected));
}

#[test]
fn test_notes_and_otp_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let (output, report) = run_conversion(
        temp_dir.path(),
        r#"{"accounts": [{"vaults": [{"attrs": {"name": "V"}, "items": [
            {"overview": {"title": "Mail"},
             "details": {"notesPlain": "plain",
                         "loginFields": [],
                         "sections": [
                             {"fields": [
                                 {"title": "otp", "value": {"totp": "otpauth://totp/x?secret=s"}},
                                 {"title": "recovery", "value": {"string": "codes"}}]}]},
             "createdAt": 0, "updatedAt": 0}]}]}]}"#,
    );

    assert_eq!(report.rows, 1);

    let mut workbook: Xlsx<_> = open_workbook(&output).unwrap();
    let range = workbook.worksheet_range("V").unwrap();

    // The OTP column carries the totp value; the notes block filters the
    // otpauth URI out but keeps the other field.
    assert_eq!(cell_text(&range, 1, 4), "otpauth://totp/x?secret=s");
    assert_eq!(cell_text(&range, 1, 7), "plain\n\nrecovery: codes");
}

#[test]
fn test_vault_order_and_empty_vaults() {
    let temp_dir = TempDir::new().unwrap();
    let (output, report) = run_conversion(
        temp_dir.path(),
        r#"{"accounts": [{"vaults": [
            {"attrs": {"name": "First"}, "items": [{"overview": {"title": "a"}}]},
            {"attrs": {"name": "Hollow"}, "items": []},
            {"attrs": {"name": "Second"}, "items": [{"overview": {"title": "b"}}]}]}]}"#,
    );

    assert_eq!(report.sheets, 2);
    assert!(report.warnings.iter().any(|w| w.contains("Hollow")));

    let workbook: Xlsx<_> = open_workbook(&output).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        vec!["First".to_string(), "Second".to_string()]
    );
}

#[test]
fn test_duplicate_vault_names_get_distinct_sheets() {
    let temp_dir = TempDir::new().unwrap();
    let (output, _report) = run_conversion(
        temp_dir.path(),
        r#"{"accounts": [{"vaults": [
            {"attrs": {"name": "Dup"}, "items": [{"overview": {"title": "a"}}]},
            {"attrs": {"name": "Dup"}, "items": [{"overview": {"title": "b"}}]}]}]}"#,
    );

    let workbook: Xlsx<_> = open_workbook(&output).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        vec!["Dup".to_string(), "Dup0".to_string()]
    );
}

#[test]
fn test_multiple_accounts_only_first_exported() {
    let temp_dir = TempDir::new().unwrap();
    let (output, report) = run_conversion(
        temp_dir.path(),
        r#"{"accounts": [
            {"vaults": [{"attrs": {"name": "Mine"}, "items": [{"overview": {"title": "a"}}]}]},
            {"vaults": [{"attrs": {"name": "Theirs"}, "items": [{"overview": {"title": "b"}}]}]}]}"#,
    );

    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.contains("only exporting one account"))
    );

    let workbook: Xlsx<_> = open_workbook(&output).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Mine".to_string()]);
}

#[test]
fn test_skipped_item_leaves_row_gap() {
    let temp_dir = TempDir::new().unwrap();
    let (output, report) = run_conversion(
        temp_dir.path(),
        r#"{"accounts": [{"vaults": [{"attrs": {"name": "V"}, "items": [
            {"details": {}},
            {"overview": {"title": "survivor"}}]}]}]}"#,
    );

    assert_eq!(report.skipped_items, 1);
    assert_eq!(report.rows, 1);

    let mut workbook: Xlsx<_> = open_workbook(&output).unwrap();
    let range = workbook.worksheet_range("V").unwrap();
    assert_eq!(cell_text(&range, 2, 0), "survivor");
    assert_eq!(cell_text(&range, 1, 0), "");
}

#[test]
fn test_duplicate_json_keys_do_not_lose_items() {
    let temp_dir = TempDir::new().unwrap();
    // The vault object repeats "attrs"; the first occurrence must win for
    // lookups and nothing may be dropped on the floor.
    let (output, report) = run_conversion(
        temp_dir.path(),
        r#"{"accounts": [{"vaults": [
            {"attrs": {"name": "Kept"}, "attrs": {"name": "Shadowed"},
             "items": [{"overview": {"title": "a"}}]}]}]}"#,
    );

    assert_eq!(report.rows, 1);
    let workbook: Xlsx<_> = open_workbook(&output).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Kept".to_string()]);
}

#[test]
fn test_missing_archive_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.xlsx");
    let config = ConvertConfig::new(
        temp_dir.path().join("nonexistent.1pux"),
        Some(output.clone()),
        true,
    );
    let console = Console::new(true);

    let result = pux2xlsx::run(&config, &console);
    assert!(matches!(result, Err(ConvertError::ArchiveNotFound(_))));
    assert!(!output.exists());
}

#[test]
fn test_garbage_archive_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("broken.1pux");
    std::fs::write(&archive, b"definitely not a zip").unwrap();

    let output = temp_dir.path().join("out.xlsx");
    let config = ConvertConfig::new(archive, Some(output.clone()), true);
    let console = Console::new(true);

    let result = pux2xlsx::run(&config, &console);
    assert!(matches!(result, Err(ConvertError::ArchiveError(_))));
    assert!(!output.exists());
}

#[test]
fn test_missing_member_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("export.1pux");
    let file = File::create(&archive).unwrap();
    let mut zip = ZipWriter::new(file);
    zip.start_file("wrong.data", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(b"{}").unwrap();
    zip.finish().unwrap();

    let output = temp_dir.path().join("out.xlsx");
    let config = ConvertConfig::new(archive, Some(output.clone()), true);
    let console = Console::new(true);

    let result = pux2xlsx::run(&config, &console);
    assert!(matches!(result, Err(ConvertError::MalformedExport(_))));
    assert!(!output.exists());
}

#[test]
fn test_invalid_json_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let archive = write_1pux(temp_dir.path(), "{this is not json");

    let output = temp_dir.path().join("out.xlsx");
    let config = ConvertConfig::new(archive, Some(output.clone()), true);
    let console = Console::new(true);

    let result = pux2xlsx::run(&config, &console);
    assert!(matches!(result, Err(ConvertError::MalformedExport(_))));
    assert!(!output.exists());
}
