use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub const SLUG_MAX_LEN: usize = 64;
pub const SUB_SLUG_MAX_LEN: usize = 4;

pub fn parse_category_slug(input: &str) -> Result<CategorySlug, ValidationError> {
    CategorySlug::parse(input)
}

pub fn parse_capability_slug(input: &str) -> Result<CapabilitySlug, ValidationError> {
    CapabilitySlug::parse(input)
}

pub fn parse_sub_capability_slug(input: &str) -> Result<SubCapabilitySlug, ValidationError> {
    SubCapabilitySlug::parse(input)
}

/// Lowercases and collapses every run of non-alphanumeric characters to a
/// single hyphen, the form the published URLs use.
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for c in input.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

fn check_hyphenated_slug(kind: &str, s: &str) -> Result<(), ValidationError> {
    if s.is_empty() {
        return Err(ValidationError(format!("{kind} slug must not be empty")));
    }
    if s.len() > SLUG_MAX_LEN {
        return Err(ValidationError(format!(
            "{kind} slug exceeds max length {SLUG_MAX_LEN}"
        )));
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError(format!(
            "{kind} slug must match [a-z0-9-]+ (e.g. financial-management)"
        )));
    }
    if s.starts_with('-') || s.ends_with('-') || s.contains("--") {
        return Err(ValidationError(format!(
            "{kind} slug must not start/end with '-' or contain '--'"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct CategorySlug(String);

impl CategorySlug {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        check_hyphenated_slug("category", s)?;
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CategorySlug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct CapabilitySlug(String);

impl CapabilitySlug {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        check_hyphenated_slug("capability", s)?;
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CapabilitySlug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct SubCapabilitySlug(String);

impl SubCapabilitySlug {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError(
                "sub-capability slug must not be empty".to_string(),
            ));
        }
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError(
                "sub-capability slug must be a numeric string (e.g. 3)".to_string(),
            ));
        }
        if s.len() > SUB_SLUG_MAX_LEN {
            return Err(ValidationError(format!(
                "sub-capability slug exceeds max length {SUB_SLUG_MAX_LEN}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for SubCapabilitySlug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
