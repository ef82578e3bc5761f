//! Filename-based before/after classification.
//!
//! Case folders come from different people and different years, so there is
//! no single naming convention. The rules below cover the ones in use:
//!
//! | Filename                | Group   | Rule                          |
//! |-------------------------|---------|-------------------------------|
//! | `복원전_01.jpg`         | before  | contains `전`                 |
//! | `before 2.png`          | before  | whole word `before`           |
//! | `수선후.jpg`            | after   | contains `후`                 |
//! | `AFTER-front.jpg`       | after   | whole word `after`            |
//! | `A1.jpg`, ` a_03.heic`  | before  | `A` + optional `_`/`-` + digit|
//! | `B-2.jpg`               | after   | `B` + optional `_`/`-` + digit|
//! | `detail.jpg`            | gallery | fallback                      |
//!
//! Rules are evaluated top to bottom and the first match wins, so `전-A1.jpg`
//! is `before` through the `전` rule. New conventions go into [`RULES`].

use regex::Regex;
use std::sync::LazyLock;

/// Which group of a case an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageGroup {
    Before,
    After,
    Gallery,
}

/// How a rule tests a (normalized) filename.
#[derive(Debug)]
pub enum Matcher {
    /// Filename contains this character anywhere.
    Contains(char),
    /// Filename matches this pattern.
    Pattern(&'static LazyLock<Regex>),
}

impl Matcher {
    fn matches(&self, filename: &str) -> bool {
        match self {
            Matcher::Contains(c) => filename.contains(*c),
            Matcher::Pattern(re) => re.is_match(filename),
        }
    }
}

/// One classification rule: any matcher hitting sends the file to `group`.
#[derive(Debug)]
pub struct Rule {
    pub matchers: &'static [Matcher],
    pub group: ImageGroup,
}

impl Rule {
    pub fn matches(&self, filename: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(filename))
    }
}

static WORD_BEFORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bbefore\b").expect("static regex"));
static WORD_AFTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bafter\b").expect("static regex"));
static PREFIX_A: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*A[\s_-]*\d").expect("static regex"));
static PREFIX_B: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*B[\s_-]*\d").expect("static regex"));

/// Ordered classification table.
pub static RULES: &[Rule] = &[
    Rule {
        matchers: &[Matcher::Contains('전'), Matcher::Pattern(&WORD_BEFORE)],
        group: ImageGroup::Before,
    },
    Rule {
        matchers: &[Matcher::Contains('후'), Matcher::Pattern(&WORD_AFTER)],
        group: ImageGroup::After,
    },
    Rule {
        matchers: &[Matcher::Pattern(&PREFIX_A)],
        group: ImageGroup::Before,
    },
    Rule {
        matchers: &[Matcher::Pattern(&PREFIX_B)],
        group: ImageGroup::After,
    },
];

/// Classify a normalized filename (extension included).
pub fn classify(filename: &str) -> ImageGroup {
    RULES
        .iter()
        .find(|rule| rule.matches(filename))
        .map(|rule| rule.group)
        .unwrap_or(ImageGroup::Gallery)
}
