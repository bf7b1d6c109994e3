//! Shared test utilities for the gallery-manifest test suite.
//!
//! Fixture builders that lay out a base directory with an `images/` folder,
//! plus extractors for checking entry lists.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = images_fixture(&["b.png", "a.jpg"]);
//! build(tmp.path(), &GalleryConfig::default(), |_| {}).unwrap();
//!
//! let entries = read_manifest(tmp.path());
//! assert_eq!(urls(&entries), vec!["images/a.jpg", "images/b.png"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::manifest::GalleryEntry;

// =========================================================================
// Fixture setup
// =========================================================================

/// Temp base directory with an `images/` folder holding `files`.
///
/// Files get placeholder content; nothing decodes them.
pub fn images_fixture(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let images = tmp.path().join("images");
    std::fs::create_dir_all(&images).unwrap();
    for name in files {
        std::fs::write(images.join(name), "fake image").unwrap();
    }
    tmp
}

/// Parse `gallery.json` under `base`. Panics if missing or malformed.
pub fn read_manifest(base: &Path) -> Vec<GalleryEntry> {
    let path = base.join("gallery.json");
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("invalid manifest {}: {e}", path.display()))
}

// =========================================================================
// Bulk extractors
// =========================================================================

pub fn names(files: &[&str]) -> Vec<String> {
    files.iter().map(|f| f.to_string()).collect()
}

/// All urls in manifest order.
pub fn urls(entries: &[GalleryEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.url.as_str()).collect()
}

/// All captions in manifest order.
pub fn captions(entries: &[GalleryEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.caption.as_str()).collect()
}
