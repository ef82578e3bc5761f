//! Writing the catalog artifacts.
//!
//! Stage 3 of the build. The same catalog is published twice:
//!
//! - `cases.json`: indented JSON for tooling and fetch-based pages.
//! - `cases-data.js`: `window.CRS_CASES_DATA = {...};` so a page opened from
//!   `file://` can load the catalog with a plain `<script>` tag.
//!
//! Both are rendered in memory before anything touches the output directory,
//! so a serialization failure never leaves a half-written pair behind.

use crate::types::Catalog;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const JSON_FILE: &str = "cases.json";
pub const JS_FILE: &str = "cases-data.js";

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Paths of the files written by [`publish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub json: PathBuf,
    pub js: PathBuf,
}

/// Indented JSON (two spaces), no trailing newline.
pub fn render_json(catalog: &Catalog) -> Result<String, PublishError> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Compact JSON assigned to `global`, newline-terminated.
pub fn render_js(catalog: &Catalog, global: &str) -> Result<String, PublishError> {
    let json = serde_json::to_string(catalog)?;
    Ok(format!("{global} = {json};\n"))
}

/// Render both artifacts and write them into `out_dir`, creating it if needed.
pub fn publish(catalog: &Catalog, out_dir: &Path, global: &str) -> Result<Artifacts, PublishError> {
    let json = render_json(catalog)?;
    let js = render_js(catalog, global)?;

    fs::create_dir_all(out_dir)?;
    let artifacts = Artifacts {
        json: out_dir.join(JSON_FILE),
        js: out_dir.join(JS_FILE),
    };
    fs::write(&artifacts.json, json)?;
    fs::write(&artifacts.js, js)?;
    Ok(artifacts)
}
