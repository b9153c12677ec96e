use aljude_academy_catalog::{build_catalog, catalog, suggested_keywords};

#[test]
fn authored_catalog_passes_model_validation() {
    let built = build_catalog().expect("authored catalog");
    assert_eq!(built.categories.len(), 8);
}

#[test]
fn categories_keep_published_order_and_slugs() {
    let built = build_catalog().expect("authored catalog");
    let slugs: Vec<&str> = built.categories.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec![
            "strategy-governance",
            "impact-programs-services",
            "leadership",
            "people-volunteers",
            "systems-operations",
            "financial-management",
            "fundraising",
            "marketing-communications",
        ]
    );
    let money = &built.categories[5];
    assert_eq!(money.name, "Financial Management");
    assert_eq!(money.short_label, "Money");
    assert_eq!(money.icon, "💰");
}

#[test]
fn financial_management_is_fully_authored() {
    let built = build_catalog().expect("authored catalog");
    let money = &built.categories[5];
    assert_eq!(money.capabilities.len(), 2);

    let budgeting = &money.capabilities[0];
    assert_eq!(budgeting.slug.as_str(), "financial-management-budgeting");
    assert_eq!(budgeting.name, "Budgeting & Financial Planning");
    assert_eq!(budgeting.faq.len(), 3);

    let sub_names: Vec<&str> = budgeting
        .sub_capabilities
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(
        sub_names,
        vec![
            "Write your mission in one line",
            "Build your income forecast",
            "Map your expenses by programme",
            "Create a monthly tracking system",
            "Set a reserve & contingency policy",
        ]
    );
    let question_counts: Vec<usize> = budgeting
        .sub_capabilities
        .iter()
        .map(|s| s.assessment.questions.len())
        .collect();
    assert_eq!(question_counts, vec![8, 7, 9, 6, 7]);

    let reporting = &money.capabilities[1];
    assert_eq!(reporting.slug.as_str(), "financial-management-reporting");
    assert_eq!(reporting.sub_capabilities[4].name, "Set up an audit trail");
}

#[test]
fn every_capability_has_five_numbered_steps_and_three_outcomes() {
    let built = build_catalog().expect("authored catalog");
    for category in &built.categories {
        for capability in &category.capabilities {
            assert_eq!(capability.outcomes.len(), 3, "{}", capability.slug);
            let sub_slugs: Vec<&str> = capability
                .sub_capabilities
                .iter()
                .map(|s| s.slug.as_str())
                .collect();
            assert_eq!(sub_slugs, vec!["1", "2", "3", "4", "5"], "{}", capability.slug);
        }
    }
}

#[test]
fn catalog_totals_are_stable() {
    let built = build_catalog().expect("authored catalog");
    assert_eq!(built.capability_count(), 37);
    assert_eq!(built.sub_capability_count(), 185);
    assert_eq!(built.question_count(), 1472);
}

#[test]
fn people_category_names_a_volunteers_capability() {
    let built = build_catalog().expect("authored catalog");
    let people = built
        .categories
        .iter()
        .find(|c| c.slug.as_str() == "people-volunteers")
        .expect("people category");
    assert!(people
        .capabilities
        .iter()
        .any(|cap| cap.name.to_lowercase().contains("volunteers")));
}

#[test]
fn stub_slugs_follow_prefix_plus_slugified_name() {
    let built = build_catalog().expect("authored catalog");
    let strategy = &built.categories[0];
    assert_eq!(
        strategy.capabilities[0].slug.as_str(),
        "strategy-clarify-your-organisation-s-direction"
    );
    let people = &built.categories[3];
    assert_eq!(
        people.capabilities[2].slug.as_str(),
        "people-manage-volunteers"
    );
}

#[test]
fn placeholder_content_keeps_published_formulas() {
    let built = build_catalog().expect("authored catalog");
    let step = &built.categories[0].capabilities[0].sub_capabilities[0];
    assert_eq!(step.videos.len(), 3);
    assert_eq!(step.videos[0].duration, "7 min");
    assert_eq!(step.videos[2].duration, "9 min");
    assert_eq!(step.assessment.questions[0].id, "q1");
    assert!(step.assessment.questions[0]
        .text
        .starts_with("Statement 1:"));

    let weeks = &step.plan_30_days.weeks;
    let titles: Vec<&str> = weeks.iter().map(|w| w.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Start fast", "Build the base", "Apply in real work", "Stabilise & measure"]
    );
    assert_eq!(step.plan_30_days.metrics.len(), 3);
    assert_eq!(step.plan_30_days.metrics[0].label, "Completion rate");
}

#[test]
fn shared_accessor_memoizes_one_instance() {
    let first: *const _ = catalog();
    let second: *const _ = catalog();
    assert_eq!(first, second);
}

#[test]
fn keyword_prompts_are_the_published_eight() {
    let keywords = suggested_keywords();
    assert_eq!(keywords.len(), 8);
    assert!(keywords.contains(&"budgeting"));
    assert!(keywords.contains(&"volunteers"));
}
