//! Case folder scanning.
//!
//! Stage 1 of the catalog build. Lists the images of a single case folder,
//! drops format duplicates, and sorts what remains into before/after/gallery
//! groups.
//!
//! ## Folder Layout
//!
//! ```text
//! 2025-12/가방/                    # Category root
//! └── 에르메스_버킨/               # Case folder
//!     ├── A1.HEIC                  # dropped: A1.jpg is preferred
//!     ├── A1.jpg                   # before (A + digit)
//!     ├── B1.jpg                   # after  (B + digit)
//!     ├── 복원후 정면.png          # after  (contains 후)
//!     ├── detail.webp              # gallery
//!     ├── notes.txt                # ignored: not an image
//!     └── raw/                     # ignored: subdirectory
//! ```
//!
//! ## Rules
//!
//! - Only direct children are considered; nested folders are not scanned.
//! - Extensions are matched in all-lower or all-upper case (`.jpg`, `.JPG`).
//! - Files sharing a trimmed, NFC-normalized stem are one photo; the copy with
//!   the most preferred extension is kept (see [`EXTENSION_PREFERENCE`]).
//! - Order within each group follows the NFC filename, by codepoint.

use crate::classify::{self, ImageGroup};
use crate::naming::nfc;
use crate::paths::{LinkError, PublishPaths};
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory listing failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Cannot link image: {0}")]
    Link(#[from] LinkError),
}

/// Extensions recognized as images, lower-case form.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "heic"];

/// Which duplicate survives when one photo exists in several formats, best first.
pub const EXTENSION_PREFERENCE: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "heic"];

/// An image file found in a case folder.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub path: PathBuf,
    /// NFC filename including extension.
    pub name: String,
    /// NFC stem, trimmed. Duplicates share this.
    pub base: String,
    /// Extension as found on disk.
    pub extension: String,
}

impl ImageFile {
    /// Build from a path if it has a recognized image extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_string_lossy().into_owned();
        if !is_image_extension(&extension) {
            return None;
        }
        let name = nfc(&path.file_name()?.to_string_lossy());
        let base = nfc(&path.file_stem()?.to_string_lossy()).trim().to_string();
        Some(Self {
            path: path.to_path_buf(),
            name,
            base,
            extension,
        })
    }

    /// Position in [`EXTENSION_PREFERENCE`], if listed.
    fn preference_rank(&self) -> Option<usize> {
        let ext = self.extension.to_lowercase();
        EXTENSION_PREFERENCE.iter().position(|p| *p == ext)
    }
}

/// Classified image links for one case folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseImages {
    pub before: Vec<String>,
    pub after: Vec<String>,
    pub gallery: Vec<String>,
}

impl CaseImages {
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.after.is_empty() && self.gallery.is_empty()
    }

    pub fn len(&self) -> usize {
        self.before.len() + self.after.len() + self.gallery.len()
    }

    /// Representative image: first after, else first before, else first gallery.
    pub fn cover(&self) -> Option<&str> {
        self.after
            .first()
            .or_else(|| self.before.first())
            .or_else(|| self.gallery.first())
            .map(String::as_str)
    }

    fn push(&mut self, group: ImageGroup, link: String) {
        match group {
            ImageGroup::Before => self.before.push(link),
            ImageGroup::After => self.after.push(link),
            ImageGroup::Gallery => self.gallery.push(link),
        }
    }
}

/// Scan one case folder into classified image links.
///
/// A folder that does not exist yields empty groups; one that exists but
/// cannot be listed is an error.
pub fn scan_case(dir: &Path, paths: &PublishPaths) -> Result<CaseImages, ScanError> {
    if !dir.is_dir() {
        return Ok(CaseImages::default());
    }
    let files = dedupe_formats(list_images(dir)?);

    let mut images = CaseImages::default();
    for file in files {
        let group = classify::classify(&file.name);
        let link = paths.link_for(&file.path)?;
        images.push(group, link);
    }
    Ok(images)
}

/// Direct child image files of `dir`, in filename order.
pub fn list_images(dir: &Path) -> Result<Vec<ImageFile>, ScanError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let path = entry?.into_path();
        // Follows symlinks; a dangling link is simply not a file.
        if !path.is_file() {
            continue;
        }
        if let Some(file) = ImageFile::from_path(&path) {
            files.push(file);
        }
    }
    Ok(files)
}

/// Subdirectories of `dir`, sorted by NFC name.
pub fn list_case_dirs(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut dirs: Vec<(String, PathBuf)> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let path = entry?.into_path();
        if path.is_dir() {
            let name = path
                .file_name()
                .map(|n| nfc(&n.to_string_lossy()))
                .unwrap_or_default();
            dirs.push((name, path));
        }
    }
    dirs.sort();
    Ok(dirs.into_iter().map(|(_, path)| path).collect())
}

/// Keep one file per base name, then order by normalized filename.
///
/// Input order decides ties when no member has a preferred extension.
pub fn dedupe_formats(files: Vec<ImageFile>) -> Vec<ImageFile> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<ImageFile>> = HashMap::new();
    for file in files {
        let members = groups.entry(file.base.clone()).or_insert_with(|| {
            order.push(file.base.clone());
            Vec::new()
        });
        members.push(file);
    }

    let mut kept: Vec<ImageFile> = order
        .into_iter()
        .filter_map(|base| groups.remove(&base))
        .filter_map(pick_preferred)
        .collect();

    kept.sort_by(|a, b| a.name.cmp(&b.name));
    kept
}

fn pick_preferred(mut members: Vec<ImageFile>) -> Option<ImageFile> {
    let best = members
        .iter()
        .enumerate()
        .filter_map(|(i, f)| f.preference_rank().map(|rank| (rank, i)))
        .min()
        .map(|(_, i)| i)
        .unwrap_or(0);

    if members.len() > 1 {
        for (i, dropped) in members.iter().enumerate() {
            if i != best {
                debug!(
                    "Dropping {} in favour of .{}",
                    dropped.path.display(),
                    members[best].extension
                );
            }
        }
    }

    if members.is_empty() {
        None
    } else {
        Some(members.swap_remove(best))
    }
}

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| ext == *known || ext == known.to_uppercase())
}
