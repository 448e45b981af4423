use cppython_schema::{Requirement, canonicalize_name};
use proptest::prelude::*;

proptest! {
    #[test]
    fn canonicalization_is_idempotent(name in "[A-Za-z0-9][A-Za-z0-9._-]{0,24}") {
        let once = canonicalize_name(&name);
        prop_assert_eq!(canonicalize_name(&once), once.clone());
        prop_assert!(!once.contains("--"));
        prop_assert_eq!(once.to_lowercase(), once);
    }

    #[test]
    fn separator_runs_become_one_dash(
        prefix in "[-_.]{0,3}",
        body in "[a-z0-9]{1,8}",
        middle in "[-_.]{1,3}",
        tail in "[a-z0-9]{1,8}",
        suffix in "[-_.]{0,3}",
    ) {
        let name = format!("{prefix}{body}{middle}{tail}{suffix}");
        let lead = if prefix.is_empty() { "" } else { "-" };
        let trail = if suffix.is_empty() { "" } else { "-" };
        prop_assert_eq!(canonicalize_name(&name), format!("{lead}{body}-{tail}{trail}"));
    }

    #[test]
    fn rendered_requirements_parse_to_the_same_value(
        name in "[a-z][a-z0-9]{0,8}([-_.][a-z0-9]{1,8}){0,2}",
        major in 0u32..100,
        minor in 0u32..100,
        op in prop::sample::select(vec!["==", ">=", "<=", "~=", "!=", "<", ">"]),
    ) {
        let text = format!("{name}{op}{major}.{minor}");
        let parsed = Requirement::parse(&text).expect("generated requirement is valid");
        let reparsed = Requirement::parse(&parsed.to_string()).expect("rendered requirement is valid");
        prop_assert_eq!(parsed, reparsed);
    }
}
