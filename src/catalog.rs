//! Catalog assembly across all category roots.
//!
//! Stage 2 of the build. Walks each configured `(label, root)` pair in order,
//! scans every case folder below it, and turns the non-empty ones into
//! [`Case`] entries with catalog-unique slugs.
//!
//! ## Ordering
//!
//! Cases appear in root order, then by NFC folder name inside each root. Two
//! roots may share a label (`주얼리` and `주얼리-추가` both list as `주얼리`);
//! their cases are listed under the same category but remain separate
//! folders, so colliding titles get numbered slugs.
//!
//! ## Slugs
//!
//! The first case with a given base slug keeps it; later ones get `-2`, `-3`
//! and so on, in processing order. Numbering therefore depends on root and
//! folder order and is stable as long as neither changes.

use crate::naming;
use crate::paths::PublishPaths;
use crate::scan::{self, ScanError};
use crate::types::{Case, Catalog};
use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// A category root to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRoot {
    pub label: String,
    pub path: PathBuf,
}

impl ScanRoot {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Hands out catalog-unique slugs for one build.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    counts: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unique slug for the next case with this base slug.
    ///
    /// The n-th claim of a base gets `{base}-{n}`. If that is already taken
    /// by an earlier case the count keeps advancing.
    pub fn claim(&mut self, base: &str) -> String {
        let count = self.counts.entry(base.to_string()).or_insert(0);
        loop {
            *count += 1;
            let candidate = if *count == 1 {
                base.to_string()
            } else {
                format!("{base}-{count}")
            };
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// Build the catalog from scan roots, in order.
pub fn build_catalog(
    roots: &[ScanRoot],
    paths: &PublishPaths,
    generated_from: &str,
) -> Result<Catalog, ScanError> {
    let mut slugs = SlugRegistry::new();
    let mut cases = Vec::new();

    for root in roots {
        if !root.path.is_dir() {
            debug!("Skipping missing root {} ({})", root.path.display(), root.label);
            continue;
        }

        for dir in scan::list_case_dirs(&root.path)? {
            if let Some(case) = build_case(&root.label, &dir, paths, &mut slugs)? {
                cases.push(case);
            }
        }
    }

    let catalog = Catalog::new(generated_from, cases);
    info!("Catalog built: {} cases", catalog.case_count);
    Ok(catalog)
}

/// Scan one folder into a case; `None` when it has no images.
fn build_case(
    label: &str,
    dir: &Path,
    paths: &PublishPaths,
    slugs: &mut SlugRegistry,
) -> Result<Option<Case>, ScanError> {
    let images = scan::scan_case(dir, paths)?;
    let Some(cover) = images.cover().map(str::to_string) else {
        debug!("Skipping {}: no images", dir.display());
        return Ok(None);
    };

    let folder_name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let title = naming::case_title(&folder_name);
    let slug = slugs.claim(&naming::base_slug(label, &title));

    Ok(Some(Case {
        slug,
        category: label.to_string(),
        title,
        cover_image: cover,
        before_images: images.before,
        after_images: images.after,
        gallery_images: images.gallery,
    }))
}
