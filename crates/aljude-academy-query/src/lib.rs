#![forbid(unsafe_code)]
//! Read-side services over the catalog: slug lookups with parent context,
//! substring search in encounter order, and route enumeration for
//! pre-rendering.
//!
//! Every function takes the catalog by reference; nothing in this crate owns
//! state or touches globals.

use aljude_academy_model::{
    Capability, CapabilitySlug, Catalog, Category, CategorySlug, SubCapability, SubCapabilitySlug,
};
use serde::{Deserialize, Serialize};

pub const CRATE_NAME: &str = "aljude-academy-query";

/// A capability together with the category that owns it.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityRef<'a> {
    pub category: &'a Category,
    pub capability: &'a Capability,
}

/// A sub-capability with its full ancestor chain.
#[derive(Debug, Clone, Copy)]
pub struct SubCapabilityRef<'a> {
    pub category: &'a Category,
    pub capability: &'a Capability,
    pub sub_capability: &'a SubCapability,
}

/// Position of a sub-capability within its capability, plus its neighbors in
/// authored order.
#[derive(Debug, Clone, Copy)]
pub struct SubCapabilityNeighbors<'a> {
    pub position: usize,
    pub total: usize,
    pub prev: Option<&'a SubCapability>,
    pub next: Option<&'a SubCapability>,
}

/// Exact, case-sensitive slug match.
#[must_use]
pub fn find_category<'a>(catalog: &'a Catalog, slug: &str) -> Option<&'a Category> {
    catalog.categories.iter().find(|c| c.slug.as_str() == slug)
}

/// Scans categories in order and returns the first capability carrying the
/// slug. Capability slugs are globally unique by construction, so the first
/// match is the only match.
#[must_use]
pub fn find_capability<'a>(catalog: &'a Catalog, slug: &str) -> Option<CapabilityRef<'a>> {
    for category in &catalog.categories {
        if let Some(capability) = category
            .capabilities
            .iter()
            .find(|cap| cap.slug.as_str() == slug)
        {
            return Some(CapabilityRef {
                category,
                capability,
            });
        }
    }
    None
}

/// Composite lookup over (capability slug, sub-capability slug). Either part
/// failing to resolve yields `None`.
#[must_use]
pub fn find_sub_capability<'a>(
    catalog: &'a Catalog,
    capability_slug: &str,
    sub_slug: &str,
) -> Option<SubCapabilityRef<'a>> {
    let found = find_capability(catalog, capability_slug)?;
    let sub_capability = found
        .capability
        .sub_capabilities
        .iter()
        .find(|s| s.slug.as_str() == sub_slug)?;
    Some(SubCapabilityRef {
        category: found.category,
        capability: found.capability,
        sub_capability,
    })
}

#[must_use]
pub fn sub_capability_neighbors<'a>(
    capability: &'a Capability,
    sub_slug: &str,
) -> Option<SubCapabilityNeighbors<'a>> {
    let position = capability
        .sub_capabilities
        .iter()
        .position(|s| s.slug.as_str() == sub_slug)?;
    Some(SubCapabilityNeighbors {
        position,
        total: capability.sub_capabilities.len(),
        prev: position
            .checked_sub(1)
            .map(|i| &capability.sub_capabilities[i]),
        next: capability.sub_capabilities.get(position + 1),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Category,
    Capability,
    SubCapability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchResult {
    pub kind: SearchKind,
    pub title: String,
    pub description: String,
    pub href: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability: Option<String>,
}

fn matches_query(field_a: &str, field_b: &str, needle: &str) -> bool {
    field_a.to_lowercase().contains(needle) || field_b.to_lowercase().contains(needle)
}

/// Case-insensitive substring search over the whole tree.
///
/// A category matches on name or description, a capability on name or
/// definition, a sub-capability on name or benefit. Results come back in
/// depth-first encounter order (each category's own hit before its
/// capabilities' hits), with no ranking, deduplication, or cap. A blank
/// query returns no results without scanning.
#[must_use]
pub fn search(catalog: &Catalog, query: &str) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    for category in &catalog.categories {
        if matches_query(&category.name, &category.description, &needle) {
            results.push(SearchResult {
                kind: SearchKind::Category,
                title: category.name.clone(),
                description: category.description.clone(),
                href: category.href(),
                category: category.name.clone(),
                capability: None,
            });
        }
        for capability in &category.capabilities {
            if matches_query(&capability.name, &capability.definition, &needle) {
                results.push(SearchResult {
                    kind: SearchKind::Capability,
                    title: capability.name.clone(),
                    description: capability.definition.clone(),
                    href: capability.href(),
                    category: category.name.clone(),
                    capability: Some(capability.name.clone()),
                });
            }
            for sub in &capability.sub_capabilities {
                if matches_query(&sub.name, &sub.benefit, &needle) {
                    results.push(SearchResult {
                        kind: SearchKind::SubCapability,
                        title: sub.name.clone(),
                        description: sub.benefit.clone(),
                        href: sub.href(&capability.slug),
                        category: category.name.clone(),
                        capability: Some(capability.name.clone()),
                    });
                }
            }
        }
    }
    results
}

/// One pre-renderable sub-capability page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubCapabilityRoute<'a> {
    pub capability: &'a CapabilitySlug,
    pub sub: &'a SubCapabilitySlug,
}

#[must_use]
pub fn all_category_slugs(catalog: &Catalog) -> Vec<&CategorySlug> {
    catalog.categories.iter().map(|c| &c.slug).collect()
}

#[must_use]
pub fn all_capability_slugs(catalog: &Catalog) -> Vec<&CapabilitySlug> {
    catalog
        .categories
        .iter()
        .flat_map(|c| &c.capabilities)
        .map(|cap| &cap.slug)
        .collect()
}

#[must_use]
pub fn all_sub_capability_routes(catalog: &Catalog) -> Vec<SubCapabilityRoute<'_>> {
    catalog
        .categories
        .iter()
        .flat_map(|c| &c.capabilities)
        .flat_map(|cap| {
            cap.sub_capabilities
                .iter()
                .map(move |sub| SubCapabilityRoute {
                    capability: &cap.slug,
                    sub: &sub.slug,
                })
        })
        .collect()
}
