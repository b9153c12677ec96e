//! The fully authored category. Everything else in the catalog still runs on
//! generated stub content.

use crate::placeholders::{
    placeholder_plan, placeholder_questions, placeholder_templates, placeholder_videos,
    quick_assessment, standard_workbook,
};
use aljude_academy_model::{
    parse_capability_slug, parse_sub_capability_slug, Assessment, Capability, FaqEntry,
    SubCapability, ValidationError, Workbook,
};

const EMBED_URL: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

pub(crate) fn financial_management_capabilities() -> Result<Vec<Capability>, ValidationError> {
    Ok(vec![budgeting()?, reporting()?])
}

fn budgeting() -> Result<Capability, ValidationError> {
    Ok(Capability {
        id: "fin-budgeting".to_string(),
        slug: parse_capability_slug("financial-management-budgeting")?,
        name: "Budgeting & Financial Planning".to_string(),
        promise: "A realistic annual budget, a monthly tracking sheet, and confidence in every spending decision.".to_string(),
        definition: "Budgeting is the process of estimating income and expenses over a defined period so your organisation can make intentional financial decisions.".to_string(),
        outcomes: vec![
            "A complete annual budget linked to your programmes".to_string(),
            "A monthly variance-tracking system".to_string(),
            "A simple decision-making framework for unplanned expenses".to_string(),
        ],
        deliverables: vec![
            "Annual budget spreadsheet".to_string(),
            "Monthly tracking template".to_string(),
            "Expense approval policy".to_string(),
        ],
        time_estimate: "2–4 hours (split over 2 sessions)".to_string(),
        implementation_days: 30,
        faq: vec![
            FaqEntry {
                question: "Do I need an accountant?".to_string(),
                answer: "No. This capability is designed for non-finance managers. The templates do the heavy lifting.".to_string(),
            },
            FaqEntry {
                question: "Can I apply it alone?".to_string(),
                answer: "Yes. One person can build the first draft, then share with leadership for sign-off.".to_string(),
            },
            FaqEntry {
                question: "What if I don't have historical data?".to_string(),
                answer: "Start with estimates. The workbook guides you through reasonable assumptions.".to_string(),
            },
        ],
        sub_capabilities: vec![
            SubCapability {
                id: "fin-bud-1".to_string(),
                slug: parse_sub_capability_slug("1")?,
                name: "Write your mission in one line".to_string(),
                benefit: "You will get a clear one-sentence financial purpose statement.".to_string(),
                outcome: "You will write a ready one-line mission that guides all budget decisions.".to_string(),
                outputs: vec![
                    "A one-line financial mission statement".to_string(),
                    "Alignment on what \"enough\" looks like".to_string(),
                    "A filter for every future spending decision".to_string(),
                ],
                assessment: Assessment {
                    intro: "Answer quickly to know where you stand. Then we'll suggest a clear starting point.".to_string(),
                    questions: placeholder_questions(8),
                },
                videos: placeholder_videos("Budget Mission"),
                workbook: Workbook {
                    intro: "This is the practical part. Fill the workbook to produce ready documents.".to_string(),
                    download_url: "#".to_string(),
                    guide_video_url: EMBED_URL.to_string(),
                    outputs: vec![
                        "Financial mission statement".to_string(),
                        "Spending priority list".to_string(),
                        "Decision checklist".to_string(),
                    ],
                },
                templates: placeholder_templates(3, "Financial Mission"),
                plan_30_days: placeholder_plan("Budget Mission"),
            },
            SubCapability {
                id: "fin-bud-2".to_string(),
                slug: parse_sub_capability_slug("2")?,
                name: "Build your income forecast".to_string(),
                benefit: "You will get a realistic 12-month income projection.".to_string(),
                outcome: "You will leave with a complete income forecast you can show to your board.".to_string(),
                outputs: vec![
                    "12-month income projection".to_string(),
                    "Funding-source breakdown".to_string(),
                    "Risk scenario (best vs worst case)".to_string(),
                ],
                assessment: quick_assessment(7),
                videos: placeholder_videos("Income Forecast"),
                workbook: Workbook {
                    intro: "Fill the workbook section by section to build your projection.".to_string(),
                    download_url: "#".to_string(),
                    guide_video_url: EMBED_URL.to_string(),
                    outputs: vec![
                        "Income projection spreadsheet".to_string(),
                        "Funding gap analysis".to_string(),
                        "Board-ready summary".to_string(),
                    ],
                },
                templates: placeholder_templates(2, "Income Forecast"),
                plan_30_days: placeholder_plan("Income Forecast"),
            },
            SubCapability {
                id: "fin-bud-3".to_string(),
                slug: parse_sub_capability_slug("3")?,
                name: "Map your expenses by programme".to_string(),
                benefit: "You will get a full cost breakdown linked to each programme.".to_string(),
                outcome: "You will leave with an expense map that shows the real cost of delivering your work.".to_string(),
                outputs: vec![
                    "Programme cost breakdown".to_string(),
                    "Overhead allocation model".to_string(),
                    "Cost-per-beneficiary estimate".to_string(),
                ],
                assessment: quick_assessment(9),
                videos: placeholder_videos("Expense Mapping"),
                workbook: Workbook {
                    intro: "This is the practical part. Fill the workbook to produce ready documents.".to_string(),
                    download_url: "#".to_string(),
                    guide_video_url: EMBED_URL.to_string(),
                    outputs: vec![
                        "Expense map spreadsheet".to_string(),
                        "Overhead policy draft".to_string(),
                        "Cost summary for funders".to_string(),
                    ],
                },
                templates: placeholder_templates(2, "Expense Mapping"),
                plan_30_days: placeholder_plan("Expense Mapping"),
            },
            SubCapability {
                id: "fin-bud-4".to_string(),
                slug: parse_sub_capability_slug("4")?,
                name: "Create a monthly tracking system".to_string(),
                benefit: "You will get a simple monthly reporting process your team can follow.".to_string(),
                outcome: "You will leave with a monthly finance meeting template and variance report.".to_string(),
                outputs: vec![
                    "Monthly variance report template".to_string(),
                    "Finance meeting agenda".to_string(),
                    "Traffic-light dashboard".to_string(),
                ],
                assessment: quick_assessment(6),
                videos: placeholder_videos("Monthly Tracking"),
                workbook: Workbook {
                    intro: "This is the practical part. Fill the workbook to produce ready documents.".to_string(),
                    download_url: "#".to_string(),
                    guide_video_url: EMBED_URL.to_string(),
                    outputs: vec![
                        "Tracking spreadsheet".to_string(),
                        "Meeting agenda".to_string(),
                        "Traffic-light template".to_string(),
                    ],
                },
                templates: placeholder_templates(3, "Monthly Tracking"),
                plan_30_days: placeholder_plan("Monthly Tracking"),
            },
            SubCapability {
                id: "fin-bud-5".to_string(),
                slug: parse_sub_capability_slug("5")?,
                name: "Set a reserve & contingency policy".to_string(),
                benefit: "You will get a board-approved reserve policy you can implement immediately.".to_string(),
                outcome: "You will leave with a written reserve policy and a plan to fund it.".to_string(),
                outputs: vec![
                    "Reserve policy document".to_string(),
                    "Funding timeline".to_string(),
                    "Board approval template".to_string(),
                ],
                assessment: quick_assessment(7),
                videos: placeholder_videos("Reserve Policy"),
                workbook: Workbook {
                    intro: "This is the practical part. Fill the workbook to produce ready documents.".to_string(),
                    download_url: "#".to_string(),
                    guide_video_url: EMBED_URL.to_string(),
                    outputs: vec![
                        "Reserve policy draft".to_string(),
                        "Funding gap analysis".to_string(),
                        "Board presentation slide".to_string(),
                    ],
                },
                templates: placeholder_templates(2, "Reserve Policy"),
                plan_30_days: placeholder_plan("Reserve Policy"),
            },
        ],
    })
}

fn reporting() -> Result<Capability, ValidationError> {
    let sub_names = [
        "Build a simple dashboard",
        "Write for non-finance readers",
        "Report to your board",
        "Report to funders",
        "Set up an audit trail",
    ];
    let sub_capabilities = sub_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let n = i + 1;
            Ok(SubCapability {
                id: format!("fin-rep-{n}"),
                slug: parse_sub_capability_slug(&n.to_string())?,
                name: (*name).to_string(),
                benefit: format!("You will get a clear output for sub-capability {n}."),
                outcome: format!(
                    "Today you will produce a ready output for reporting sub-capability {n}."
                ),
                outputs: vec![
                    "Output A".to_string(),
                    "Output B".to_string(),
                    "Output C".to_string(),
                ],
                assessment: quick_assessment(7),
                videos: placeholder_videos("Financial Reporting"),
                workbook: standard_workbook(&["Doc 1", "Doc 2", "Doc 3"]),
                templates: placeholder_templates(3, "Financial Reporting"),
                plan_30_days: placeholder_plan("Financial Reporting"),
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(Capability {
        id: "fin-reporting".to_string(),
        slug: parse_capability_slug("financial-management-reporting")?,
        name: "Financial Reporting & Transparency".to_string(),
        promise: "Clear financial reports your board, funders, and team can actually understand.".to_string(),
        definition: "Financial reporting turns raw numbers into meaningful stories that build trust with all stakeholders.".to_string(),
        outcomes: vec![
            "A monthly financial dashboard".to_string(),
            "A funder-ready financial summary".to_string(),
            "A board report template".to_string(),
        ],
        deliverables: vec![
            "Financial dashboard".to_string(),
            "Funder summary template".to_string(),
            "Board report".to_string(),
        ],
        time_estimate: "2–3 hours".to_string(),
        implementation_days: 30,
        faq: vec![
            FaqEntry {
                question: "Do I need accounting software?".to_string(),
                answer: "No. A spreadsheet is sufficient for most organisations at this stage.".to_string(),
            },
            FaqEntry {
                question: "Can I apply it alone?".to_string(),
                answer: "Yes. The templates are designed for one person to complete.".to_string(),
            },
            FaqEntry {
                question: "What if my data is incomplete?".to_string(),
                answer: "Use estimates with clear notes. Transparency about gaps is better than silence.".to_string(),
            },
        ],
        sub_capabilities,
    })
}
