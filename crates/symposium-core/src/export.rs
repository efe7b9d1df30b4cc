//! Client-side JSON file export.
//!
//! A [`JsonDownload`] is what the browser would wrap in a Blob and save
//! through a temporary object URL. Hosts without a browser save it with
//! [`JsonDownload::save_to`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

pub const JSON_MEDIA_TYPE: &str = "application/json";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid export file name: {0}")]
    InvalidFilename(String),
}

/// A UTF-8 JSON file ready to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonDownload {
    pub filename: String,
    pub media_type: &'static str,
    pub contents: String,
}

impl JsonDownload {
    /// Pretty-print `data` (two-space indent) into a download named `filename`.
    pub fn new<T: Serialize + ?Sized>(data: &T, filename: &str) -> Result<Self, ExportError> {
        Ok(Self {
            filename: filename.to_string(),
            media_type: JSON_MEDIA_TYPE,
            contents: serde_json::to_string_pretty(data)?,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        self.contents.as_bytes()
    }

    /// Write the file into `dir` with write-then-rename and return its path.
    ///
    /// The file name must be a single path component.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let name = Path::new(&self.filename);
        let mut components = name.components();
        match (components.next(), components.next()) {
            (Some(std::path::Component::Normal(_)), None) => {}
            _ => return Err(ExportError::InvalidFilename(self.filename.clone())),
        }

        fs::create_dir_all(dir)?;
        let file_path = dir.join(&self.filename);
        let temp_path = dir.join(format!("{}.tmp", self.filename));

        fs::write(&temp_path, self.bytes())?;
        fs::rename(&temp_path, &file_path)?;

        Ok(file_path)
    }
}
