mod financial_management;

use crate::placeholders::{
    placeholder_plan, placeholder_templates, placeholder_videos, quick_assessment,
    standard_workbook,
};
use aljude_academy_model::{
    parse_capability_slug, parse_category_slug, parse_sub_capability_slug, slugify, Capability,
    Category, FaqEntry, SubCapability, ValidationError,
};

/// Generated capability content for the categories that are not fully
/// authored yet. One capability per name, five formulaic steps each.
fn stub_capabilities(
    slug_prefix: &str,
    names: &[&str],
) -> Result<Vec<Capability>, ValidationError> {
    names
        .iter()
        .enumerate()
        .map(|(ci, name)| {
            let sub_capabilities = (1..=5)
                .map(|si| stub_sub_capability(slug_prefix, ci + 1, si, name))
                .collect::<Result<Vec<_>, ValidationError>>()?;
            Ok(Capability {
                id: format!("{slug_prefix}-{}", ci + 1),
                slug: parse_capability_slug(&format!("{slug_prefix}-{}", slugify(name)))?,
                name: (*name).to_string(),
                promise: format!(
                    "You will leave with a clear plan and ready tools for {}.",
                    name.to_lowercase()
                ),
                definition: format!(
                    "{name} is a critical capability that helps your organisation achieve sustainable impact."
                ),
                outcomes: vec![
                    "A clear action plan".to_string(),
                    "Ready-to-use templates".to_string(),
                    "A 30-day implementation roadmap".to_string(),
                ],
                deliverables: vec![
                    "Action plan document".to_string(),
                    "Template pack".to_string(),
                    "Implementation checklist".to_string(),
                ],
                time_estimate: "2–4 hours".to_string(),
                implementation_days: 30,
                faq: vec![
                    FaqEntry {
                        question: "Do I need a team?".to_string(),
                        answer: "You can start alone and involve your team later.".to_string(),
                    },
                    FaqEntry {
                        question: "Can I apply it alone?".to_string(),
                        answer: "Yes. All materials are designed for solo use.".to_string(),
                    },
                    FaqEntry {
                        question: "What if I don't have data?".to_string(),
                        answer: "Start with estimates; refine over time.".to_string(),
                    },
                ],
                sub_capabilities,
            })
        })
        .collect()
}

fn stub_sub_capability(
    slug_prefix: &str,
    capability_index: usize,
    step: usize,
    capability_name: &str,
) -> Result<SubCapability, ValidationError> {
    Ok(SubCapability {
        id: format!("{slug_prefix}-{capability_index}-{step}"),
        slug: parse_sub_capability_slug(&step.to_string())?,
        name: format!("{capability_name} – Step {step}"),
        benefit: format!("You will get a clear output for step {step} of {capability_name}."),
        outcome: format!(
            "Today you will complete step {step} of {}.",
            capability_name.to_lowercase()
        ),
        outputs: vec![
            format!("Output {step}A"),
            format!("Output {step}B"),
            format!("Output {step}C"),
        ],
        assessment: quick_assessment(8),
        videos: placeholder_videos(capability_name),
        workbook: standard_workbook(&["Doc A", "Doc B", "Doc C"]),
        templates: placeholder_templates(3, capability_name),
        plan_30_days: placeholder_plan(capability_name),
    })
}

struct CategorySpec {
    slug: &'static str,
    name: &'static str,
    short_label: &'static str,
    icon: &'static str,
    description: &'static str,
}

fn assemble(
    spec: &CategorySpec,
    capabilities: Vec<Capability>,
) -> Result<Category, ValidationError> {
    Ok(Category {
        id: spec.slug.to_string(),
        slug: parse_category_slug(spec.slug)?,
        name: spec.name.to_string(),
        short_label: spec.short_label.to_string(),
        icon: spec.icon.to_string(),
        description: spec.description.to_string(),
        capabilities,
    })
}

pub(crate) fn categories() -> Result<Vec<Category>, ValidationError> {
    Ok(vec![
        assemble(
            &CategorySpec {
                slug: "strategy-governance",
                name: "Strategy & Governance",
                short_label: "Strategy",
                icon: "🎯",
                description: "Clarify your direction, strengthen your board, and build accountability systems that last.",
            },
            stub_capabilities(
                "strategy",
                &[
                    "Clarify Your Organisation's Direction",
                    "Strengthen Board Governance",
                    "Build an Accountability Framework",
                    "Manage Organisational Risk",
                    "Plan for the Long Term",
                ],
            )?,
        )?,
        assemble(
            &CategorySpec {
                slug: "impact-programs-services",
                name: "Impact Programs & Services",
                short_label: "Programs",
                icon: "🌍",
                description: "Design, deliver, and measure programmes that create real change for the people you serve.",
            },
            stub_capabilities(
                "programs",
                &[
                    "Design High-Impact Programmes",
                    "Measure Programme Outcomes",
                    "Manage Programme Delivery",
                    "Engage Beneficiaries",
                    "Improve Programme Quality",
                ],
            )?,
        )?,
        assemble(
            &CategorySpec {
                slug: "leadership",
                name: "Leadership",
                short_label: "Leadership",
                icon: "🧭",
                description: "Build the personal and organisational leadership that motivates teams and drives results.",
            },
            stub_capabilities(
                "leadership",
                &[
                    "Lead with Purpose",
                    "Make Better Decisions",
                    "Communicate as a Leader",
                    "Build a Leadership Pipeline",
                    "Navigate Change",
                ],
            )?,
        )?,
        assemble(
            &CategorySpec {
                slug: "people-volunteers",
                name: "People & Volunteers",
                short_label: "Team",
                icon: "🤝",
                description: "Attract, develop, and retain the people – paid and volunteer – who power your mission.",
            },
            stub_capabilities(
                "people",
                &[
                    "Recruit the Right People",
                    "Onboard Effectively",
                    "Manage Volunteers",
                    "Develop Your Team",
                    "Retain Key People",
                ],
            )?,
        )?,
        assemble(
            &CategorySpec {
                slug: "systems-operations",
                name: "Systems & Operations",
                short_label: "Systems",
                icon: "⚙️",
                description: "Put the processes, tools, and infrastructure in place to run a well-organised organisation.",
            },
            stub_capabilities(
                "systems",
                &[
                    "Document Your Processes",
                    "Choose the Right Tools",
                    "Manage Projects Effectively",
                    "Build a Knowledge Management System",
                    "Improve Operational Efficiency",
                ],
            )?,
        )?,
        assemble(
            &CategorySpec {
                slug: "financial-management",
                name: "Financial Management",
                short_label: "Money",
                icon: "💰",
                description: "Build financial systems that give you clarity, confidence, and control over your resources.",
            },
            financial_management::financial_management_capabilities()?,
        )?,
        assemble(
            &CategorySpec {
                slug: "fundraising",
                name: "Fundraising",
                short_label: "Funding",
                icon: "🎗️",
                description: "Build stable, diversified funding through grants, individual donors, and earned income.",
            },
            stub_capabilities(
                "fundraising",
                &[
                    "Build a Stable Funding Base",
                    "Write Winning Grant Proposals",
                    "Engage Individual Donors",
                    "Run Fundraising Campaigns",
                    "Diversify Your Income",
                ],
            )?,
        )?,
        assemble(
            &CategorySpec {
                slug: "marketing-communications",
                name: "Marketing & Communications",
                short_label: "Comms",
                icon: "📣",
                description: "Tell your story, grow your audience, and build the brand trust that attracts support.",
            },
            stub_capabilities(
                "comms",
                &[
                    "Define Your Brand Voice",
                    "Build Your Online Presence",
                    "Grow Your Audience",
                    "Communicate Your Impact",
                    "Manage Media Relations",
                ],
            )?,
        )?,
    ])
}
