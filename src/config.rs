//! Fixed gallery parameters and base-directory resolution.
//!
//! There is no config file: the folder name, output filename and extension
//! set are compile-time constants. They are grouped in [`GalleryConfig`] so
//! every stage receives them explicitly instead of reaching for globals.
//!
//! ## Base Directory
//!
//! Paths are resolved against the directory holding the running executable,
//! never the current working directory, so the tool writes the same file no
//! matter where it is invoked from:
//!
//! ```text
//! site/
//! ├── gallery-manifest      # the binary
//! ├── gallery.json          # written here
//! └── images/               # scanned here
//! ```

use crate::GalleryError;
use std::path::{Path, PathBuf};

/// Images folder, relative to the base directory. Also the URL prefix.
pub const IMAGES_FOLDER: &str = "images";

/// Manifest filename, relative to the base directory.
pub const GALLERY_JSON: &str = "gallery.json";

/// Recognized image extensions, lowercase with leading dot.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp", ".gif"];

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Subdirectory to scan; also used verbatim as the URL prefix.
    pub images_dir: String,
    /// Output file written next to the images folder.
    pub output_file: String,
    /// Lowercase extensions including the leading dot.
    pub extensions: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            images_dir: IMAGES_FOLDER.to_string(),
            output_file: GALLERY_JSON.to_string(),
            extensions: ALLOWED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl GalleryConfig {
    pub fn images_path(&self, base: &Path) -> PathBuf {
        base.join(&self.images_dir)
    }

    pub fn output_path(&self, base: &Path) -> PathBuf {
        base.join(&self.output_file)
    }

    /// Whether `name` carries one of the allowed extensions.
    ///
    /// Comparison is case-insensitive: `PHOTO.JPG` matches `.jpg`.
    pub fn is_allowed(&self, name: &str) -> bool {
        match extension_of(name) {
            Some(ext) => {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|allowed| *allowed == ext)
            }
            None => false,
        }
    }
}

/// Extension of a filename, leading dot included.
///
/// Leading dots belong to the stem, so dotfiles have no extension:
/// - `a.jpg` → Some(".jpg")
/// - `a.b.JPG` → Some(".JPG")
/// - `.jpg` → None
/// - `..jpg` → None
/// - `photo.` → Some(".")
/// - `photo` → None
pub fn extension_of(name: &str) -> Option<&str> {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    name[stem_start..]
        .rfind('.')
        .map(|pos| &name[stem_start + pos..])
}

/// Directory containing the running executable. This is the base directory
/// for every run; the working directory is never consulted.
pub fn executable_dir() -> Result<PathBuf, GalleryError> {
    let exe = std::env::current_exe()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or(GalleryError::NoBaseDir(exe))
}
