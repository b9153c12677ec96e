use aljude_academy_model::{parse_capability_slug, parse_category_slug, slugify};
use proptest::prelude::*;
use proptest::test_runner::Config;

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn well_formed_slugs_parse_and_round_trip(
        slug in "[a-z0-9]{1,8}(-[a-z0-9]{1,8}){0,4}"
    ) {
        let parsed = parse_category_slug(&slug).expect("category slug");
        prop_assert_eq!(parsed.as_str(), slug.as_str());
        let parsed = parse_capability_slug(&slug).expect("capability slug");
        prop_assert_eq!(parsed.as_str(), slug.as_str());
    }

    #[test]
    fn slugify_output_always_parses(
        name in "[A-Za-z][A-Za-z0-9 &']{0,40}"
    ) {
        let slug = slugify(&name);
        prop_assume!(!slug.is_empty());
        let parsed = parse_capability_slug(&slug).expect("slugified name");
        prop_assert_eq!(parsed.as_str(), slug.as_str());
    }

    #[test]
    fn slugify_never_emits_doubled_or_edge_hyphens(
        name in "[ &'A-Za-z0-9]{0,40}"
    ) {
        let slug = slugify(&name);
        prop_assert!(!slug.contains("--"));
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
    }
}
