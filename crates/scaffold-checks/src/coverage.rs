//! Tag coverage checks
//!
//! Guards against fixture authors silently dropping coverage in a category:
//! each category tag must appear on at least [`MIN_PER_CATEGORY`] scenarios.

use crate::report::{CheckKind, CheckOutcome, CheckReport};
use scaffold_fixture::Fixture;

/// Category tags whose coverage is enforced.
pub const COVERED_TAGS: &[&str] = &["infrastructure", "backend", "frontend"];

/// Minimum number of scenarios per covered category.
pub const MIN_PER_CATEGORY: usize = 2;

/// Assert the coverage threshold for one category tag.
#[must_use]
pub fn check_tag_coverage(fixture: &Fixture, tag: &'static str) -> CheckReport {
    let count = fixture.count_tagged(tag);
    CheckReport::fixture(
        CheckKind::TagCoverage(tag),
        CheckOutcome::check(count >= MIN_PER_CATEGORY, || {
            format!(
                "expected at least {MIN_PER_CATEGORY} '{tag}' scenarios, found {count}"
            )
        }),
    )
}

/// Assert coverage for every enforced category.
#[must_use]
pub fn check_all_coverage(fixture: &Fixture) -> Vec<CheckReport> {
    COVERED_TAGS
        .iter()
        .map(|&tag| check_tag_coverage(fixture, tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(yaml: &str) -> Fixture {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn threshold_met_passes() {
        let fixture = parse(
            r#"
scenarios:
  - name: a
    prompt: p
    mock_response: m
    tags: [backend]
  - name: b
    prompt: p
    mock_response: m
    tags: [backend, api]
"#,
        );

        let report = check_tag_coverage(&fixture, "backend");
        assert_eq!(report.outcome, CheckOutcome::Pass);
    }

    #[test]
    fn below_threshold_fails_with_count() {
        let fixture = parse(
            r#"
scenarios:
  - name: a
    prompt: p
    mock_response: m
    tags: [frontend]
"#,
        );

        let report = check_tag_coverage(&fixture, "frontend");
        assert_eq!(
            report.outcome,
            CheckOutcome::Fail("expected at least 2 'frontend' scenarios, found 1".to_string())
        );
    }

    #[test]
    fn all_coverage_emits_one_report_per_tag() {
        let fixture = parse("scenarios: []");
        let reports = check_all_coverage(&fixture);
        assert_eq!(reports.len(), COVERED_TAGS.len());
        assert!(reports.iter().all(|r| r.outcome.is_fail()));
    }
}
