#![forbid(unsafe_code)]
//! Authored academy content and the shared immutable catalog.

mod content;
mod placeholders;

use aljude_academy_model::{Catalog, ValidationError};
use std::sync::OnceLock;

pub const CRATE_NAME: &str = "aljude-academy-catalog";

/// Search prompts offered when the query box is empty.
pub const SUGGESTED_KEYWORDS: [&str; 8] = [
    "budgeting",
    "volunteers",
    "governance",
    "fundraising",
    "impact",
    "reporting",
    "strategy",
    "mission",
];

#[must_use]
pub fn suggested_keywords() -> &'static [&'static str] {
    &SUGGESTED_KEYWORDS
}

/// Builds a fresh catalog from the authored content, running the full model
/// validation pass.
pub fn build_catalog() -> Result<Catalog, ValidationError> {
    Catalog::from_categories(content::categories()?)
}

/// Shared immutable catalog for binaries and tests. Built once per process;
/// the authored content passing validation is a crate invariant covered by
/// this crate's test suite.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| build_catalog().expect("authored catalog must satisfy model invariants"))
}
