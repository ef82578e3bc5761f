//! Catalog types serialized into `cases.json` and `cases-data.js`.
//!
//! Field names are camelCase because the portfolio front-end reads them
//! directly (`data.cases`, `c.beforeImages`, ...). Field order here is the
//! key order in the output.

use serde::{Deserialize, Serialize};

/// One restoration job: a case folder with at least one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// Catalog-unique identifier, used in detail page URLs.
    pub slug: String,
    /// Label of the scan root the folder came from.
    pub category: String,
    /// Folder name with `_` shown as ` · `.
    pub title: String,
    pub cover_image: String,
    pub before_images: Vec<String>,
    pub after_images: Vec<String>,
    pub gallery_images: Vec<String>,
}

/// Root object of the generated catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub generated_from: String,
    pub case_count: usize,
    pub cases: Vec<Case>,
}

/// Image counts across the whole catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageTotals {
    pub before: usize,
    pub after: usize,
    pub gallery: usize,
}

impl Catalog {
    pub fn new(generated_from: impl Into<String>, cases: Vec<Case>) -> Self {
        Self {
            generated_from: generated_from.into(),
            case_count: cases.len(),
            cases,
        }
    }

    pub fn image_totals(&self) -> ImageTotals {
        self.cases
            .iter()
            .fold(ImageTotals::default(), |acc, c| ImageTotals {
                before: acc.before + c.before_images.len(),
                after: acc.after + c.after_images.len(),
                gallery: acc.gallery + c.gallery_images.len(),
            })
    }

    /// Categories in first-appearance order, without repeats.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for case in &self.cases {
            if !seen.contains(&case.category.as_str()) {
                seen.push(&case.category);
            }
        }
        seen
    }
}
