//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Cases are listed by what they are (category, title, photo counts), with
//! slug and cover as indented context lines. This makes the output readable
//! as a portfolio inventory while still showing the keys the front-end uses.
//!
//! # Output Format
//!
//! ```text
//! 가방
//! 001 에르메스 · 버킨 (2 before, 3 after, 1 gallery)
//!     Slug: 가방-에르메스-버킨
//!     Cover: ../가방/에르메스_버킨/B1.jpg
//!
//! 주얼리
//! 001 반지 (1 before, 1 after, 0 gallery)
//!     Slug: 주얼리-반지
//!     Cover: ../주얼리/반지/후.jpg
//!
//! 2 cases: 3 before, 4 after, 1 gallery
//! ```
//!
//! A category spread over several roots is shown once, with all its cases.
//!
//! # Architecture
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::publish::Artifacts;
use crate::types::{Case, Catalog};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn case_header(index: usize, case: &Case) -> String {
    format!(
        "{} {} ({} before, {} after, {} gallery)",
        format_index(index),
        case.title,
        case.before_images.len(),
        case.after_images.len(),
        case.gallery_images.len()
    )
}

/// Inventory of the catalog, grouped by category.
pub fn format_catalog_output(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();

    for category in catalog.categories() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(category.to_string());
        let cases = catalog.cases.iter().filter(|c| c.category == category);
        for (i, case) in cases.enumerate() {
            lines.push(case_header(i + 1, case));
            lines.push(format!("{}Slug: {}", indent(1), case.slug));
            lines.push(format!("{}Cover: {}", indent(1), case.cover_image));
        }
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    let totals = catalog.image_totals();
    lines.push(format!(
        "{} cases: {} before, {} after, {} gallery",
        catalog.case_count, totals.before, totals.after, totals.gallery
    ));
    lines
}

/// Confirmation after the artifacts are written.
pub fn format_write_output(artifacts: &Artifacts, catalog: &Catalog) -> Vec<String> {
    vec![
        format!("Wrote {} ({} cases)", artifacts.json.display(), catalog.case_count),
        format!("{}Script: {}", indent(1), artifacts.js.display()),
    ]
}

pub fn print_catalog_output(catalog: &Catalog) {
    for line in format_catalog_output(catalog) {
        println!("{}", line);
    }
}

pub fn print_write_output(artifacts: &Artifacts, catalog: &Catalog) {
    for line in format_write_output(artifacts, catalog) {
        println!("{}", line);
    }
}
