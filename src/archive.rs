//! 1PUX archive reading
//!
//! A 1PUX file is a zip archive whose `export.data` member holds the UTF-8
//! JSON export document. The member is read to completion before any
//! processing starts; there is no streaming decode.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;

use crate::EXPORT_MEMBER;
use crate::error::{ConvertError, Result};
use crate::json::{self, Value};

/// Read and parse the export document out of a 1PUX archive.
pub fn read_export(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(ConvertError::ArchiveNotFound(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| ConvertError::ArchiveError(format!("Failed to open archive: {}", e)))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| ConvertError::ArchiveError(format!("Failed to read archive: {}", e)))?;

    let mut data = Vec::new();
    {
        let mut member = archive.by_name(EXPORT_MEMBER).map_err(|e| {
            ConvertError::MalformedExport(format!("{} not found in archive: {}", EXPORT_MEMBER, e))
        })?;
        member.read_to_end(&mut data).map_err(|e| {
            ConvertError::ArchiveError(format!("Failed to read {}: {}", EXPORT_MEMBER, e))
        })?;
    }

    json::from_slice(&data)
}
