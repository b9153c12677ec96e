#![forbid(unsafe_code)]
//! Academy catalog model SSOT.

mod catalog;
mod entity;
mod slug;

pub use catalog::{Catalog, OUTCOMES_PER_CAPABILITY, SUB_CAPABILITIES_PER_CAPABILITY};
pub use entity::{
    Assessment, AssessmentQuestion, Capability, Category, FaqEntry, Metric, SubCapability,
    Template, ThirtyDayPlan, Video, WeekPlan, Workbook,
};
pub use slug::{
    parse_capability_slug, parse_category_slug, parse_sub_capability_slug, slugify,
    CapabilitySlug, CategorySlug, SubCapabilitySlug, ValidationError, SLUG_MAX_LEN,
    SUB_SLUG_MAX_LEN,
};

pub const CRATE_NAME: &str = "aljude-academy-model";
