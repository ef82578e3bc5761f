//! Image links relative to the portfolio page.
//!
//! The portfolio lives two levels below the workspace root, inside the
//! primary (current-period) folder:
//!
//! ```text
//! workspace/
//! ├── 2025-12/                 ← primary folder
//! │   ├── crs-portfolio/       ← pages are served from here
//! │   └── 가방/케이스/A1.jpg   → ../가방/케이스/A1.jpg
//! └── archive/주얼리/x/B1.jpg  → ../../archive/주얼리/x/B1.jpg
//! ```
//!
//! Images under the primary folder get the short `../` form. Anything else is
//! resolved against the workspace root, following symlinks, and gets `../../`.

use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Prefix for images under the primary folder.
const PRIMARY_PREFIX: &str = "../";
/// Prefix for images elsewhere in the workspace.
const WORKSPACE_PREFIX: &str = "../../";

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Image is outside the workspace root: {0}")]
    OutsideWorkspace(PathBuf),
}

/// Rewrites absolute image paths into links usable from the portfolio page.
#[derive(Debug, Clone)]
pub struct PublishPaths {
    workspace_root: PathBuf,
    primary_root: PathBuf,
}

impl PublishPaths {
    pub fn new(workspace_root: impl Into<PathBuf>, primary_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            primary_root: primary_root.into(),
        }
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn primary_root(&self) -> &Path {
        &self.primary_root
    }

    /// Link to `image` as seen from the portfolio page.
    ///
    /// The primary check is lexical, so a symlinked category folder inside the
    /// primary folder keeps the short form.
    pub fn link_for(&self, image: &Path) -> Result<String, LinkError> {
        if let Ok(rel) = image.strip_prefix(&self.primary_root) {
            return Ok(format!("{PRIMARY_PREFIX}{}", to_slash(rel)));
        }

        let resolved = image.canonicalize()?;
        let root = self.workspace_root.canonicalize()?;
        match resolved.strip_prefix(&root) {
            Ok(rel) => Ok(format!("{WORKSPACE_PREFIX}{}", to_slash(rel))),
            Err(_) => Err(LinkError::OutsideWorkspace(image.to_path_buf())),
        }
    }
}

/// Join path components with `/` regardless of platform.
fn to_slash(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
