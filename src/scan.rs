//! Images folder scanning.
//!
//! First step of a gallery build. Lists the immediate entries of the images
//! folder, keeps those with an allowed extension and returns their names in
//! sorted order. The sort order decides caption numbering downstream.
//!
//! ## Rules
//!
//! - **Non-recursive**: only direct children are considered.
//! - **Name-based filter**: entries are kept by extension alone. A directory
//!   named `photo.png` is kept like a file.
//! - **Codepoint order**: `img10.jpg` sorts before `img2.jpg`. No natural
//!   numeric ordering.
//! - **Names must be UTF-8**: a name that cannot go into a JSON string
//!   fails the scan with [`ScanError::NonUtf8Name`].
//! - **Missing folder is not an error**: it is reported as
//!   [`ScanOutcome::Missing`] so the caller can skip the write entirely.

use crate::config::GalleryConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to list images folder: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Filename is not valid UTF-8: {0}")]
    NonUtf8Name(PathBuf),
}

/// Result of scanning the images folder.
#[derive(Debug, PartialEq)]
pub enum ScanOutcome {
    /// The folder does not exist or is not a directory.
    Missing(PathBuf),
    /// Matching filenames, sorted.
    Found(Vec<String>),
}

pub fn scan(images_dir: &Path, config: &GalleryConfig) -> Result<ScanOutcome, ScanError> {
    if !images_dir.is_dir() {
        return Ok(ScanOutcome::Missing(images_dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(images_dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str() else {
            return Err(ScanError::NonUtf8Name(entry.path().to_path_buf()));
        };
        if config.is_allowed(name) {
            files.push(name.to_string());
        } else {
            debug!(name, "skipping entry without an allowed extension");
        }
    }

    files.sort();
    Ok(ScanOutcome::Found(files))
}
