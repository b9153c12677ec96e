use crate::slug::{CapabilitySlug, CategorySlug, SubCapabilitySlug};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssessmentQuestion {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Assessment {
    pub intro: String,
    pub questions: Vec<AssessmentQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub thumbnail: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Workbook {
    pub intro: String,
    pub download_url: String,
    pub guide_video_url: String,
    pub outputs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Template {
    pub id: String,
    pub title: String,
    pub description: String,
    pub download_url: String,
    pub preview_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeekPlan {
    pub week: u8,
    pub title: String,
    pub tasks: Vec<String>,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metric {
    pub label: String,
    pub description: String,
}

/// Four-week implementation plan shown on every sub-capability page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThirtyDayPlan {
    pub intro: String,
    pub weeks: Vec<WeekPlan>,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubCapability {
    pub id: String,
    pub slug: SubCapabilitySlug,
    pub name: String,
    pub benefit: String,
    pub outcome: String,
    pub outputs: Vec<String>,
    pub assessment: Assessment,
    pub videos: Vec<Video>,
    pub workbook: Workbook,
    pub templates: Vec<Template>,
    pub plan_30_days: ThirtyDayPlan,
}

impl SubCapability {
    #[must_use]
    pub fn href(&self, capability_slug: &CapabilitySlug) -> String {
        format!("/capabilities/{capability_slug}/{}", self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Capability {
    pub id: String,
    pub slug: CapabilitySlug,
    pub name: String,
    pub promise: String,
    pub definition: String,
    pub outcomes: Vec<String>,
    pub deliverables: Vec<String>,
    pub time_estimate: String,
    pub implementation_days: u16,
    pub faq: Vec<FaqEntry>,
    pub sub_capabilities: Vec<SubCapability>,
}

impl Capability {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/capabilities/{}", self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub id: String,
    pub slug: CategorySlug,
    pub name: String,
    pub short_label: String,
    pub icon: String,
    pub description: String,
    pub capabilities: Vec<Capability>,
}

impl Category {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/categories/{}", self.slug)
    }
}
