//! # Case Catalog
//!
//! Builds the case catalog for a restoration portfolio from folders of
//! before/after photos. The filesystem is the data source: every subfolder of
//! a category root is one case, and filenames say which photos are "before"
//! and which are "after".
//!
//! # Architecture: Three Stages
//!
//! ```text
//! 1. Scan      case folder    →  CaseImages   (dedupe formats, classify, link)
//! 2. Catalog   category roots →  Catalog      (titles, unique slugs, covers)
//! 3. Publish   Catalog        →  cases.json + cases-data.js
//! ```
//!
//! Stages run strictly in sequence on one thread. Slug numbering depends on
//! processing order, and the workload is a few hundred folders at most.
//! Output files are only written once the whole catalog is in memory, so a
//! failed run never leaves a partial catalog behind.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: lists a case folder, drops format duplicates, groups images |
//! | [`classify`] | Ordered filename rules deciding before / after / gallery |
//! | [`paths`] | Image links relative to the portfolio page (`../` or `../../`) |
//! | [`catalog`] | Stage 2: walks category roots, assigns slugs and covers |
//! | [`publish`] | Stage 3: renders and writes the JSON and script artifacts |
//! | [`naming`] | NFC normalization, display titles, slugs |
//! | [`types`] | `Case` and `Catalog`, serialized for the front-end |
//! | [`config`] | `catalog.toml` loading, merging over stock defaults, validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Unicode Normalization Everywhere
//!
//! Folders are created on macOS (decomposed Hangul) and copied to other
//! systems (composed Hangul). Names are normalized to NFC before any compare,
//! sort, title or slug, so the same folder always produces the same entry.
//! Image links keep the on-disk bytes so they resolve on the machine that
//! built them.
//!
//! ## Rules as Data
//!
//! Classification is a table in [`classify::RULES`]. A new naming convention
//! is one more row, not another branch.
//!
//! ## Explicit Slug Registry
//!
//! Slug collisions are resolved by a [`catalog::SlugRegistry`] owned by one
//! build call. Two builds over the same tree give byte-identical output.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod naming;
pub mod output;
pub mod paths;
pub mod publish;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
