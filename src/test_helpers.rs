//! Shared test utilities for the case-catalog test suite.
//!
//! Provides a throwaway workspace with the usual `2025-12/` primary folder,
//! builders for case folders, and lookup helpers over the built [`Catalog`].
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let ws = TestWorkspace::new();
//! ws.case("가방", "에르메스_버킨", &["A1.jpg", "B1.jpg"]);
//!
//! let catalog = ws.build(&[("가방", "가방")]);
//! let case = find_case(&catalog, "가방-에르메스-버킨");
//! assert_eq!(case.title, "에르메스 · 버킨");
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::catalog::{ScanRoot, build_catalog};
use crate::paths::PublishPaths;
use crate::types::{Case, Catalog};

pub const PRIMARY_DIR: &str = "2025-12";

// =========================================================================
// Workspace setup
// =========================================================================

/// A temporary workspace root containing an empty primary folder.
pub struct TestWorkspace {
    _tmp: TempDir,
    root: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        // canonical so link resolution compares like with like (macOS /private/var)
        let root = tmp.path().canonicalize().unwrap();
        fs::create_dir_all(root.join(PRIMARY_DIR)).unwrap();
        Self { _tmp: tmp, root }
    }

    /// Copy `fixtures/workspace/` into a fresh temp workspace.
    pub fn from_fixtures() -> Self {
        let ws = Self::new();
        let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/workspace");
        copy_dir_recursive(&fixtures, &ws.root).unwrap();
        ws
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn primary(&self) -> PathBuf {
        self.root.join(PRIMARY_DIR)
    }

    pub fn paths(&self) -> PublishPaths {
        PublishPaths::new(&self.root, self.primary())
    }

    /// Create `2025-12/<category>/<name>/` holding placeholder files.
    pub fn case(&self, category: &str, name: &str, files: &[&str]) -> PathBuf {
        let dir = self.primary().join(category).join(name);
        fs::create_dir_all(&dir).unwrap();
        for file in files {
            fs::write(dir.join(file), "fake image").unwrap();
        }
        dir
    }

    /// Build a catalog from `(label, path under 2025-12)` pairs.
    pub fn build(&self, roots: &[(&str, &str)]) -> Catalog {
        let roots: Vec<ScanRoot> = roots
            .iter()
            .map(|(label, rel)| ScanRoot::new(*label, self.primary().join(rel)))
            .collect();
        build_catalog(&roots, &self.paths(), "workspace").unwrap()
    }
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Catalog lookups (panic with a clear message on miss)
// =========================================================================

/// Find a case by slug. Panics if not found.
pub fn find_case<'a>(catalog: &'a Catalog, slug: &str) -> &'a Case {
    catalog
        .cases
        .iter()
        .find(|c| c.slug == slug)
        .unwrap_or_else(|| {
            let slugs = case_slugs(catalog);
            panic!("case '{slug}' not found. Available: {slugs:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All case slugs in catalog order.
pub fn case_slugs(catalog: &Catalog) -> Vec<&str> {
    catalog.cases.iter().map(|c| c.slug.as_str()).collect()
}

/// All case titles in catalog order.
pub fn case_titles(catalog: &Catalog) -> Vec<&str> {
    catalog.cases.iter().map(|c| c.title.as_str()).collect()
}
