//! Gallery manifest construction and serialization.
//!
//! Turns the sorted filename list from [`crate::scan`] into the JSON array
//! the front end loads:
//!
//! ```json
//! [
//!   {
//!     "url": "images/a.jpg",
//!     "caption": "Photo 1"
//!   }
//! ]
//! ```
//!
//! Captions are positional: the n-th file in sorted order is `Photo n`.
//! Nothing from a previous manifest is carried over.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One image in the gallery manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryEntry {
    /// `<images folder>/<filename>`, always with a forward slash.
    pub url: String,
    pub caption: String,
}

/// Build entries for `files`, which must already be sorted.
pub fn build_entries(images_dir: &str, files: &[String]) -> Vec<GalleryEntry> {
    files
        .iter()
        .enumerate()
        .map(|(idx, filename)| GalleryEntry {
            url: format!("{}/{}", images_dir, filename),
            caption: caption_for(idx + 1),
        })
        .collect()
}

/// Caption for a 1-based position.
pub fn caption_for(position: usize) -> String {
    format!("Photo {}", position)
}

/// Render entries as a 2-space indented JSON array.
///
/// Non-ASCII text is written as-is, not `\u` escaped. No trailing newline.
pub fn to_json(entries: &[GalleryEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

/// Render and write the manifest in a single write, replacing any existing file.
pub fn write_manifest(path: &Path, entries: &[GalleryEntry]) -> Result<(), crate::GalleryError> {
    let json = to_json(entries)?;
    fs::write(path, json)?;
    Ok(())
}
