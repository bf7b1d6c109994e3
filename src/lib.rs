//! # Gallery Manifest
//!
//! Build-time helper for static photo galleries. Scans an `images/` folder
//! and writes `gallery.json`, a list of `{url, caption}` records a front-end
//! page loads to render the gallery.
//!
//! ```text
//! site/
//! ├── gallery-manifest
//! ├── gallery.json      ← written
//! └── images/           ← scanned (non-recursive)
//!     ├── a.jpg         → {"url": "images/a.jpg", "caption": "Photo 1"}
//!     ├── b.png         → {"url": "images/b.png", "caption": "Photo 2"}
//!     └── notes.txt     (ignored)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Fixed folder/output names, extension set, base-directory resolution |
//! | [`scan`] | Lists the images folder, filters by extension, sorts |
//! | [`manifest`] | `GalleryEntry`, positional captions, JSON rendering and write |
//! | [`build`] | Runs scan → manifest → write and reports the outcome |
//! | [`output`] | Stdout diagnostics for each outcome |
//!
//! # Design Decisions
//!
//! ## Paths Relative to the Binary
//!
//! The base directory is the executable's own directory, not the working
//! directory. Running the tool from anywhere writes the same file.
//!
//! ## Missing Folder Writes Nothing
//!
//! If `images/` is absent the run stops before writing. A previously good
//! `gallery.json` survives a misconfigured checkout. An empty folder is
//! different: it is a real, empty gallery and produces `[]`.
//!
//! ## Positional Captions
//!
//! Captions are `Photo 1`, `Photo 2`, … in sorted filename order. They carry
//! no metadata and are regenerated from scratch on every run, so output is
//! deterministic for an unchanged folder.

pub mod build;
pub mod config;
pub mod manifest;
pub mod output;
pub mod scan;

use std::path::PathBuf;
use thiserror::Error;

/// Fatal build errors. A missing images folder is not one of them; see
/// [`build::BuildReport::MissingImagesDir`].
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] scan::ScanError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Cannot determine base directory from executable path: {0}")]
    NoBaseDir(PathBuf),
}

#[cfg(test)]
pub(crate) mod test_helpers;
