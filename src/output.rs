//! CLI output formatting for gallery builds.
//!
//! Every run ends with one of three outcomes, each with a fixed message shape:
//!
//! ```text
//! [ERROR] Images folder not found: /srv/site/images
//!
//! [WARN] No image files found in 'images' folder.
//! [OK] Wrote 0 entries to /srv/site/gallery.json
//!
//! [OK] Wrote 3 entries to /srv/site/gallery.json
//! ```
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` and do no I/O, so tests can check
//! the exact text. [`print_event`] runs during the build, so the `[WARN]` line
//! is out before the manifest is written; [`print_report`] prints the outcome.

use crate::build::{BuildEvent, BuildReport};
use std::path::Path;

pub fn format_missing_dir(path: &Path) -> String {
    format!("[ERROR] Images folder not found: {}", path.display())
}

pub fn format_no_images(images_dir: &str) -> String {
    format!("[WARN] No image files found in '{}' folder.", images_dir)
}

pub fn format_written(count: usize, path: &Path) -> String {
    format!("[OK] Wrote {} entries to {}", count, path.display())
}

/// Display lines for a build event. Printed as it happens, before the write.
pub fn format_event(event: &BuildEvent, images_dir: &str) -> Vec<String> {
    match event {
        BuildEvent::NoImages => vec![format_no_images(images_dir)],
    }
}

/// Display lines for a finished build.
pub fn format_report(report: &BuildReport) -> Vec<String> {
    match report {
        BuildReport::MissingImagesDir { path } => vec![format_missing_dir(path)],
        BuildReport::Written { entries, path } => vec![format_written(entries.len(), path)],
    }
}

pub fn print_event(event: &BuildEvent, images_dir: &str) {
    for line in format_event(event, images_dir) {
        println!("{}", line);
    }
}

pub fn print_report(report: &BuildReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::build_entries;
    use crate::test_helpers::names;
    use std::path::PathBuf;

    #[test]
    fn missing_dir_message() {
        let report = BuildReport::MissingImagesDir {
            path: PathBuf::from("/srv/site/images"),
        };
        assert_eq!(
            format_report(&report),
            vec!["[ERROR] Images folder not found: /srv/site/images"]
        );
    }

    #[test]
    fn no_images_event_warns() {
        assert_eq!(
            format_event(&BuildEvent::NoImages, "images"),
            vec!["[WARN] No image files found in 'images' folder."]
        );
    }

    #[test]
    fn empty_manifest_reports_zero() {
        let report = BuildReport::Written {
            entries: vec![],
            path: PathBuf::from("/srv/site/gallery.json"),
        };
        assert_eq!(
            format_report(&report),
            vec!["[OK] Wrote 0 entries to /srv/site/gallery.json"]
        );
    }

    #[test]
    fn written_reports_count() {
        let report = BuildReport::Written {
            entries: build_entries("images", &names(&["a.jpg", "b.png"])),
            path: PathBuf::from("/srv/site/gallery.json"),
        };
        assert_eq!(
            format_report(&report),
            vec!["[OK] Wrote 2 entries to /srv/site/gallery.json"]
        );
    }

    #[test]
    fn warning_names_configured_folder() {
        assert_eq!(
            format_no_images("photos"),
            "[WARN] No image files found in 'photos' folder."
        );
    }
}
