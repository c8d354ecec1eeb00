//! Saving artifacts as files.
//!
//! A [`DownloadTarget`] receives bytes plus a suggested filename and MIME
//! type. [`DirectoryTarget`] stages the bytes in a temporary file inside the
//! destination directory and renames it into place; the temporary file is
//! removed on every path, including when writing or renaming fails.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::artifact::{is_safe_filename, Artifact, ArtifactKind};
use crate::errors::DownloadError;

pub const TEXT_PLAIN: &str = "text/plain";

/// Destination for single-file downloads.
pub trait DownloadTarget {
    /// Save `bytes` under `filename`, returning where it landed.
    fn save(&mut self, filename: &str, bytes: &[u8], mime: &str) -> Result<PathBuf, DownloadError>;
}

/// Writes downloads into a directory, replacing files with the same name.
///
/// The directory is created on the first save if it does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Like [`DirectoryTarget::new`] but creates the directory first.
    pub fn create(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn io_error(&self, filename: &str, source: std::io::Error) -> DownloadError {
        DownloadError::Io {
            filename: filename.to_string(),
            dir: self.dir.clone(),
            source,
        }
    }
}

impl DownloadTarget for DirectoryTarget {
    fn save(&mut self, filename: &str, bytes: &[u8], mime: &str) -> Result<PathBuf, DownloadError> {
        if !is_safe_filename(filename) {
            return Err(DownloadError::UnsafeFilename(filename.to_string()));
        }

        fs::create_dir_all(&self.dir).map_err(|e| self.io_error(filename, e))?;

        // Dropping the NamedTempFile on any early return deletes it.
        let mut staged = tempfile::Builder::new()
            .prefix(".forge-")
            .suffix(".part")
            .tempfile_in(&self.dir)
            .map_err(|e| self.io_error(filename, e))?;
        staged
            .write_all(bytes)
            .and_then(|_| staged.flush())
            .map_err(|e| self.io_error(filename, e))?;

        let destination = self.dir.join(filename);
        staged
            .persist(&destination)
            .map_err(|e| self.io_error(filename, e.error))?;

        tracing::debug!("Saved {} ({} bytes, {})", destination.display(), bytes.len(), mime);
        Ok(destination)
    }
}

/// Save one artifact's content as plain text under its export name.
pub fn download_one(target: &mut dyn DownloadTarget, artifact: &Artifact) -> Result<PathBuf, DownloadError> {
    let filename = artifact.export_name();
    let path = target.save(&filename, artifact.content.as_bytes(), TEXT_PLAIN)?;
    tracing::info!("Downloaded {} to {}", artifact.title, path.display());
    Ok(path)
}

/// Result of one download within [`download_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadOutcome {
    pub kind: ArtifactKind,
    pub filename: String,
    pub path: Option<PathBuf>,
    pub error: Option<String>,
}

impl DownloadOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-artifact outcomes, in the order the downloads were triggered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DownloadReport {
    pub outcomes: Vec<DownloadOutcome>,
}

impl DownloadReport {
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DownloadOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Download every artifact in order.
///
/// A failure does not stop the remaining downloads and nothing already saved
/// is rolled back.
pub fn download_all<'a>(
    target: &mut dyn DownloadTarget,
    artifacts: impl IntoIterator<Item = &'a Artifact>,
) -> DownloadReport {
    let outcomes = artifacts
        .into_iter()
        .map(|artifact| {
            let filename = artifact.export_name();
            match download_one(target, artifact) {
                Ok(path) => DownloadOutcome {
                    kind: artifact.kind,
                    filename,
                    path: Some(path),
                    error: None,
                },
                Err(e) => {
                    tracing::warn!("Download of {} failed: {}", filename, e);
                    DownloadOutcome {
                        kind: artifact.kind,
                        filename,
                        path: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    DownloadReport { outcomes }
}
