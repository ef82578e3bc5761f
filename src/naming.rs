//! Centralized name handling for case folders and image files.
//!
//! Folder and file names arrive from the filesystem in whatever Unicode form
//! the OS stored them in (macOS keeps Hangul decomposed, most other systems
//! keep it composed). Everything that compares, sorts or displays names goes
//! through [`nfc`] first so the same folder always yields the same title and
//! slug regardless of where it was copied from.
//!
//! ## Display Titles
//!
//! Underscores in folder names separate parts of a case description and are
//! shown as a middle dot:
//! - `에르메스_버킨_복원/` → "에르메스 · 버킨 · 복원"
//! - `Case #1 (gold)/` → "Case #1 (gold)"
//!
//! ## Slugs
//!
//! A slug is built from `"{category}-{title}"`:
//! - `("가방", "Case #1 (gold)")` → `가방-Case-1-gold`
//! - `("주얼리", "반지 · 사이즈")` → `주얼리-반지-사이즈`
//! - `("", "###")` → `case`

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Fallback slug when nothing survives filtering.
pub const FALLBACK_SLUG: &str = "case";

/// Separator shown in titles where the folder name has an underscore.
const TITLE_SEPARATOR: &str = " · ";

static WHITESPACE_OR_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("static regex"));

// ASCII alphanumerics, hyphen, and the Hangul jamo/compatibility/syllable blocks.
static NOT_SLUG_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[^0-9A-Za-z\-\x{1100}-\x{11FF}\x{3130}-\x{318F}\x{A960}-\x{A97F}\x{AC00}-\x{D7A3}\x{D7B0}-\x{D7FF}]+",
    )
    .expect("static regex")
});

static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("static regex"));

/// Canonical composition (NFC) of a name.
pub fn nfc(name: &str) -> String {
    name.nfc().collect()
}

/// Display title for a case folder: NFC name with `_` shown as ` · `.
pub fn case_title(folder_name: &str) -> String {
    nfc(folder_name).replace('_', TITLE_SEPARATOR)
}

/// Reduce arbitrary text to a URL-safe slug.
///
/// Letter case is preserved; only characters outside ASCII alphanumerics,
/// `-` and Hangul are removed.
pub fn slugify(text: &str) -> String {
    let normalized = nfc(text);
    let hyphenated = WHITESPACE_OR_UNDERSCORE.replace_all(normalized.trim(), "-");
    let kept = NOT_SLUG_CHAR.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&kept, "-");
    let slug = collapsed.trim_matches('-');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Base slug for a case before uniqueness resolution.
pub fn base_slug(category: &str, title: &str) -> String {
    slugify(&format!("{category}-{title}"))
}
