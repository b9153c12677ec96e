//! Formulaic content shared by every sub-capability that has not yet been
//! fully authored. The wording matches the published site.

use aljude_academy_model::{
    Assessment, AssessmentQuestion, Metric, Template, ThirtyDayPlan, Video, WeekPlan, Workbook,
};

const EMBED_URL: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

pub(crate) fn placeholder_video(n: u8, topic: &str) -> Video {
    Video {
        id: format!("v{n}"),
        title: format!("{topic} – Video {n}"),
        duration: format!("{} min", 6 + n),
        thumbnail: format!("https://placehold.co/640x360/3b5bdb/ffffff?text=Video+{n}"),
        url: EMBED_URL.to_string(),
    }
}

pub(crate) fn placeholder_videos(topic: &str) -> Vec<Video> {
    (1..=3).map(|n| placeholder_video(n, topic)).collect()
}

pub(crate) fn placeholder_template(n: u8, topic: &str) -> Template {
    Template {
        id: format!("t{n}"),
        title: format!("{topic} Template {n}"),
        description: format!(
            "Ready-to-use template for {} – customise with your organisation name.",
            topic.to_lowercase()
        ),
        download_url: "#".to_string(),
        preview_url: "#".to_string(),
    }
}

pub(crate) fn placeholder_templates(count: u8, topic: &str) -> Vec<Template> {
    (1..=count).map(|n| placeholder_template(n, topic)).collect()
}

pub(crate) fn placeholder_weeks(sub_name: &str) -> Vec<WeekPlan> {
    vec![
        WeekPlan {
            week: 1,
            title: "Start fast".to_string(),
            tasks: vec![
                format!("Read the {sub_name} overview"),
                "Complete the self-assessment".to_string(),
                "Identify top 3 gaps".to_string(),
            ],
            output: "Completed assessment + priority list".to_string(),
        },
        WeekPlan {
            week: 2,
            title: "Build the base".to_string(),
            tasks: vec![
                "Watch all videos".to_string(),
                "Fill sections 1–3 of workbook".to_string(),
                "Draft first template".to_string(),
            ],
            output: "Workbook 50 % complete".to_string(),
        },
        WeekPlan {
            week: 3,
            title: "Apply in real work".to_string(),
            tasks: vec![
                "Use templates in your next meeting".to_string(),
                "Share draft with team".to_string(),
                "Collect feedback".to_string(),
            ],
            output: "First version approved by team".to_string(),
        },
        WeekPlan {
            week: 4,
            title: "Stabilise & measure".to_string(),
            tasks: vec![
                "Review against 3 metrics".to_string(),
                "Update workbook with real data".to_string(),
                "Set review date for next month".to_string(),
            ],
            output: "Final document + improvement plan".to_string(),
        },
    ]
}

pub(crate) fn placeholder_metrics(sub_name: &str) -> Vec<Metric> {
    vec![
        Metric {
            label: "Completion rate".to_string(),
            description: format!("% of {sub_name} tasks completed on time"),
        },
        Metric {
            label: "Team alignment".to_string(),
            description: "Team agrees on the outcome (1–5 scale)".to_string(),
        },
        Metric {
            label: "Repeat usage".to_string(),
            description: "Number of times the template is reused in 30 days".to_string(),
        },
    ]
}

pub(crate) fn placeholder_plan(topic: &str) -> ThirtyDayPlan {
    ThirtyDayPlan {
        intro: "Do small steps for 30 days to make the improvement stick.".to_string(),
        weeks: placeholder_weeks(topic),
        metrics: placeholder_metrics(topic),
    }
}

pub(crate) fn placeholder_questions(count: u8) -> Vec<AssessmentQuestion> {
    (1..=count)
        .map(|n| AssessmentQuestion {
            id: format!("q{n}"),
            text: format!(
                "Statement {n}: We have a clear and documented approach in place for this area."
            ),
        })
        .collect()
}

pub(crate) fn quick_assessment(count: u8) -> Assessment {
    Assessment {
        intro: "Answer quickly to know where you stand.".to_string(),
        questions: placeholder_questions(count),
    }
}

pub(crate) fn standard_workbook(outputs: &[&str]) -> Workbook {
    Workbook {
        intro: "Fill the workbook to produce ready documents.".to_string(),
        download_url: "#".to_string(),
        guide_video_url: EMBED_URL.to_string(),
        outputs: outputs.iter().map(ToString::to_string).collect(),
    }
}
