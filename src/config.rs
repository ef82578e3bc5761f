//! Catalog configuration module.
//!
//! Handles loading, validating, and merging `catalog.toml`. Stock defaults
//! describe the usual workspace layout; a `catalog.toml` in the workspace root
//! overrides only the keys it names.
//!
//! ## Config File Location
//!
//! ```text
//! workspace/
//! ├── catalog.toml             # Optional overrides
//! └── 2025-12/
//!     ├── 가방/                # Category roots
//!     ├── 주얼리/
//!     └── crs-portfolio/
//!         └── data/            # cases.json, cases-data.js
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! primary_dir = "2025-12"
//! output_dir = "2025-12/crs-portfolio/data"
//! generated_from = "workspace"
//! js_global = "window.CRS_CASES_DATA"
//!
//! [[roots]]
//! label = "가방_지갑"
//! path = "2025-12/가방_지갑"
//!
//! [[roots]]
//! label = "주얼리"
//! path = "2025-12/주얼리"
//! ```
//!
//! All paths are relative to the workspace root. A `roots` list in the user
//! file replaces the default list entirely. Unknown keys are rejected to catch
//! typos early.

use crate::catalog::ScanRoot;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name looked up in the workspace root.
pub const CONFIG_FILE: &str = "catalog.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Catalog configuration loaded from `catalog.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Current-period folder; images under it get short `../` links.
    pub primary_dir: String,
    /// Where `cases.json` and `cases-data.js` are written.
    pub output_dir: String,
    /// Provenance tag stored as `generatedFrom`.
    pub generated_from: String,
    /// Global the JS artifact assigns the catalog to.
    pub js_global: String,
    /// Category roots, scanned in order.
    pub roots: Vec<RootConfig>,
}

/// One category root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootConfig {
    /// Category label shown on every case from this root.
    pub label: String,
    /// Directory holding case folders, relative to the workspace root.
    pub path: String,
}

impl RootConfig {
    fn new(label: &str, path: &str) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            primary_dir: "2025-12".to_string(),
            output_dir: "2025-12/crs-portfolio/data".to_string(),
            generated_from: "workspace".to_string(),
            js_global: "window.CRS_CASES_DATA".to_string(),
            roots: vec![
                RootConfig::new("가방_지갑", "2025-12/가방_지갑"),
                RootConfig::new("주얼리", "2025-12/주얼리"),
                // symlinked into 2025-12 so file:// pages can reach them
                RootConfig::new("가방", "2025-12/가방"),
                RootConfig::new("주얼리", "2025-12/주얼리-추가"),
            ],
        }
    }
}

impl CatalogConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roots.is_empty() {
            return Err(ConfigError::Validation(
                "roots must list at least one category root".into(),
            ));
        }
        if let Some(root) = self.roots.iter().find(|r| r.label.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "roots entry for '{}' has an empty label",
                root.path
            )));
        }
        if self.generated_from.is_empty() {
            return Err(ConfigError::Validation(
                "generated_from must not be empty".into(),
            ));
        }
        if !is_js_member_chain(&self.js_global) {
            return Err(ConfigError::Validation(format!(
                "js_global must be a dotted JavaScript identifier, got '{}'",
                self.js_global
            )));
        }
        Ok(())
    }

    /// Scan roots resolved against the workspace root.
    pub fn scan_roots(&self, workspace: &Path) -> Vec<ScanRoot> {
        self.roots
            .iter()
            .map(|r| ScanRoot::new(r.label.clone(), workspace.join(&r.path)))
            .collect()
    }

    pub fn primary_root(&self, workspace: &Path) -> PathBuf {
        workspace.join(&self.primary_dir)
    }

    pub fn output_root(&self, workspace: &Path) -> PathBuf {
        workspace.join(&self.output_dir)
    }
}

/// `window.CRS_CASES_DATA`, `CASES`, `app.data.cases` and the like.
fn is_js_member_chain(s: &str) -> bool {
    !s.is_empty()
        && s.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        })
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(CatalogConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Arrays and scalars in overlay replace base values entirely.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value; `Ok(None)` if it does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<CatalogConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: CatalogConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from a file path, falling back to defaults if it is absent.
pub fn load_config(path: &Path) -> Result<CatalogConfig, ConfigError> {
    resolve_config(load_raw_config(path)?)
}

/// Returns a fully-commented stock `catalog.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Case Catalog Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Paths are relative to the workspace
# root (the directory holding this file).
# Unknown keys will cause an error.

# Current-period folder. Images under it are linked as ../<path>; images
# anywhere else in the workspace as ../../<path>.
primary_dir = "2025-12"

# Where cases.json and cases-data.js are written.
output_dir = "2025-12/crs-portfolio/data"

# Provenance tag stored as "generatedFrom" in the catalog.
generated_from = "workspace"

# Global variable the script variant assigns the catalog to.
js_global = "window.CRS_CASES_DATA"

# ---------------------------------------------------------------------------
# Category roots, scanned in order. Each subfolder of a root is one case.
# Missing roots are skipped. Listing roots here replaces the whole default list.
# ---------------------------------------------------------------------------
[[roots]]
label = "가방_지갑"
path = "2025-12/가방_지갑"

[[roots]]
label = "주얼리"
path = "2025-12/주얼리"

[[roots]]
label = "가방"
path = "2025-12/가방"

[[roots]]
label = "주얼리"
path = "2025-12/주얼리-추가"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_layout() {
        let config = CatalogConfig::default();
        assert_eq!(config.primary_dir, "2025-12");
        assert_eq!(config.output_dir, "2025-12/crs-portfolio/data");
        assert_eq!(config.generated_from, "workspace");
        assert_eq!(config.js_global, "window.CRS_CASES_DATA");
    }

    #[test]
    fn default_roots_in_order() {
        let config = CatalogConfig::default();
        let labels: Vec<&str> = config.roots.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["가방_지갑", "주얼리", "가방", "주얼리"]);
        assert_eq!(config.roots[3].path, "2025-12/주얼리-추가");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
generated_from = "portfolio"
"#;
        let config: CatalogConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.generated_from, "portfolio");
        assert_eq!(config.primary_dir, "2025-12");
        assert_eq!(config.roots.len(), 4);
    }

    #[test]
    fn roots_replace_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
[[roots]]
label = "시계"
path = "2026-01/시계"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.roots, vec![RootConfig::new("시계", "2026-01/시계")]);
    }

    #[test]
    fn scan_roots_resolved_against_workspace() {
        let config = CatalogConfig::default();
        let roots = config.scan_roots(Path::new("/ws"));
        assert_eq!(roots[0].label, "가방_지갑");
        assert_eq!(roots[0].path, Path::new("/ws/2025-12/가방_지갑"));
        assert_eq!(config.primary_root(Path::new("/ws")), Path::new("/ws/2025-12"));
        assert_eq!(
            config.output_root(Path::new("/ws")),
            Path::new("/ws/2025-12/crs-portfolio/data")
        );
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.primary_dir, "2025-12");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "primary_dir = \"2026-01\"\njs_global = \"CASES\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.primary_dir, "2026-01");
        assert_eq!(config.js_global, "CASES");
        assert_eq!(config.output_dir, "2025-12/crs-portfolio/data");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "primary_dir = [unclosed").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "primry_dir = \"2026-01\"\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn unknown_root_key_rejected() {
        let toml = r#"
[[roots]]
label = "가방"
path = "x"
depth = 2
"#;
        assert!(toml::from_str::<CatalogConfig>(toml).is_err());
    }

    // =========================================================================
    // Merge tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(1));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_array_replaced() {
        let base: toml::Value = toml::from_str("xs = [1, 2, 3]").unwrap();
        let overlay: toml::Value = toml::from_str("xs = [9]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("xs").unwrap().as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(CatalogConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_empty_roots() {
        let config = CatalogConfig {
            roots: vec![],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_blank_label() {
        let config = CatalogConfig {
            roots: vec![RootConfig::new("  ", "2025-12/x")],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_js_global() {
        for ok in ["CASES", "window.CRS_CASES_DATA", "$app._data"] {
            let config = CatalogConfig {
                js_global: ok.into(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "{ok} should be accepted");
        }
        for bad in ["", "window.", "1abc", "a b", "x;alert(1)", "a..b"] {
            let config = CatalogConfig {
                js_global: bad.into(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn validate_empty_generated_from() {
        let config = CatalogConfig {
            generated_from: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "roots = []\n").unwrap();
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    // =========================================================================
    // Stock config
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: CatalogConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = CatalogConfig::default();
        assert_eq!(config.primary_dir, defaults.primary_dir);
        assert_eq!(config.output_dir, defaults.output_dir);
        assert_eq!(config.generated_from, defaults.generated_from);
        assert_eq!(config.js_global, defaults.js_global);
        assert_eq!(config.roots, defaults.roots);
    }

    #[test]
    fn stock_defaults_value_is_table() {
        let value = stock_defaults_value();
        assert!(value.is_table());
        assert!(value.get("roots").unwrap().is_array());
    }
}
