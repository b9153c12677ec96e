use crate::entity::Category;
use crate::slug::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const SUB_CAPABILITIES_PER_CAPABILITY: usize = 5;
pub const OUTCOMES_PER_CAPABILITY: usize = 3;

/// The whole published tree. Immutable once constructed; every slug
/// invariant the lookup layer relies on is checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn from_categories(categories: Vec<Category>) -> Result<Self, ValidationError> {
        let catalog = Self { categories };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Category slugs and capability slugs are unique across the whole tree,
    /// sub-capability slugs within their capability, question ids within
    /// their assessment. Capabilities carry a fixed card shape: five
    /// sub-capabilities, three outcomes. Plan weeks run 1..=n in order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut category_slugs = BTreeSet::new();
        let mut capability_slugs = BTreeSet::new();
        for category in &self.categories {
            if !category_slugs.insert(category.slug.as_str()) {
                return Err(ValidationError(format!(
                    "duplicate category slug '{}'",
                    category.slug
                )));
            }
            for capability in &category.capabilities {
                if !capability_slugs.insert(capability.slug.as_str()) {
                    return Err(ValidationError(format!(
                        "duplicate capability slug '{}'",
                        capability.slug
                    )));
                }
                if capability.outcomes.len() != OUTCOMES_PER_CAPABILITY {
                    return Err(ValidationError(format!(
                        "capability '{}' must list exactly {OUTCOMES_PER_CAPABILITY} outcomes, found {}",
                        capability.slug,
                        capability.outcomes.len()
                    )));
                }
                if capability.sub_capabilities.len() != SUB_CAPABILITIES_PER_CAPABILITY {
                    return Err(ValidationError(format!(
                        "capability '{}' must carry exactly {SUB_CAPABILITIES_PER_CAPABILITY} sub-capabilities, found {}",
                        capability.slug,
                        capability.sub_capabilities.len()
                    )));
                }
                let mut sub_slugs = BTreeSet::new();
                for sub in &capability.sub_capabilities {
                    if !sub_slugs.insert(sub.slug.as_str()) {
                        return Err(ValidationError(format!(
                            "duplicate sub-capability slug '{}' in capability '{}'",
                            sub.slug, capability.slug
                        )));
                    }
                    let mut question_ids = BTreeSet::new();
                    for question in &sub.assessment.questions {
                        if !question_ids.insert(question.id.as_str()) {
                            return Err(ValidationError(format!(
                                "duplicate question id '{}' in sub-capability '{}/{}'",
                                question.id, capability.slug, sub.slug
                            )));
                        }
                    }
                    for (idx, week) in sub.plan_30_days.weeks.iter().enumerate() {
                        if usize::from(week.week) != idx + 1 {
                            return Err(ValidationError(format!(
                                "sub-capability '{}/{}' plan week {} out of sequence",
                                capability.slug, sub.slug, week.week
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn capability_count(&self) -> usize {
        self.categories.iter().map(|c| c.capabilities.len()).sum()
    }

    #[must_use]
    pub fn sub_capability_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| &c.capabilities)
            .map(|cap| cap.sub_capabilities.len())
            .sum()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| &c.capabilities)
            .flat_map(|cap| &cap.sub_capabilities)
            .map(|sub| sub.assessment.questions.len())
            .sum()
    }
}
