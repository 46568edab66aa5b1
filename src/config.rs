//! Conversion run configuration

use std::path::{Path, PathBuf};

use crate::OUTPUT_EXTENSION;

/// Immutable configuration for one conversion run
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Path to the 1PUX export archive
    pub archive_path: PathBuf,
    /// Path the workbook is saved to
    pub output_path: PathBuf,
    /// Suppress informational progress messages
    pub quiet: bool,
}

impl ConvertConfig {
    /// Build a config. Without an explicit output path the workbook lands
    /// next to the archive with an `.xlsx` extension.
    pub fn new(archive_path: PathBuf, output_path: Option<PathBuf>, quiet: bool) -> Self {
        let output_path = output_path.unwrap_or_else(|| default_output_path(&archive_path));
        Self {
            archive_path,
            output_path,
            quiet,
        }
    }
}

fn default_output_path(archive_path: &Path) -> PathBuf {
    archive_path.with_extension(OUTPUT_EXTENSION)
}
