//! Export of the last classification report as a plain-text file

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{REPORT_FILE_NAME, REPORT_MIME};
use crate::session::Session;

/// A downloadable report: fixed file name and MIME type, contents verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportExport {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub contents: String,
}

impl ReportExport {
    /// Offer the stored report, if there is one.
    pub fn from_session(session: &Session) -> Option<Self> {
        session.last_result().map(|text| Self {
            file_name: REPORT_FILE_NAME,
            mime: REPORT_MIME,
            contents: text.to_string(),
        })
    }

    /// Write the report into `dir`, replacing any earlier export.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

        let path = dir.join(self.file_name);
        fs::write(&path, self.contents.as_bytes())
            .with_context(|| format!("Failed to write report: {}", path.display()))?;

        tracing::info!("Exported report to {}", path.display());
        Ok(path)
    }
}
