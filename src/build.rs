//! Gallery build orchestration: scan → entries → write.
//!
//! A missing images folder short-circuits before anything is written, so a
//! good manifest from an earlier run is never replaced by an empty one. An
//! existing but empty folder is a normal run that writes `[]`.
//!
//! Progress that must be shown before the write happens is reported through
//! a [`BuildEvent`] callback; the final outcome comes back as a
//! [`BuildReport`].

use crate::config::GalleryConfig;
use crate::manifest::{self, GalleryEntry};
use crate::scan::{self, ScanOutcome};
use crate::GalleryError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What a build did. Drives the stdout diagnostics in [`crate::output`].
#[derive(Debug, PartialEq)]
pub enum BuildReport {
    /// Images folder absent; nothing written.
    MissingImagesDir { path: PathBuf },
    /// Manifest written. `entries` may be empty.
    Written {
        entries: Vec<GalleryEntry>,
        path: PathBuf,
    },
}

/// Progress emitted during a build, before the manifest is written.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildEvent {
    /// The images folder exists but holds no recognized images.
    NoImages,
}

pub fn build(
    base: &Path,
    config: &GalleryConfig,
    mut on_event: impl FnMut(&BuildEvent),
) -> Result<BuildReport, GalleryError> {
    let images_dir = config.images_path(base);
    debug!(images_dir = %images_dir.display(), "scanning");

    let files = match scan::scan(&images_dir, config)? {
        ScanOutcome::Missing(path) => return Ok(BuildReport::MissingImagesDir { path }),
        ScanOutcome::Found(files) => files,
    };

    if files.is_empty() {
        on_event(&BuildEvent::NoImages);
    }

    let entries = manifest::build_entries(&config.images_dir, &files);
    let path = config.output_path(base);
    manifest::write_manifest(&path, &entries)?;
    debug!(count = entries.len(), path = %path.display(), "manifest written");

    Ok(BuildReport::Written { entries, path })
}
