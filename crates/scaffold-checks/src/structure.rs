//! Fixture well-formedness battery
//!
//! Structural assertions over the whole fixture, independent of any single
//! scenario's patterns. Failures that can have multiple culprits report the
//! complete set in one message.

use crate::report::{CheckKind, CheckOutcome, CheckReport};
use scaffold_fixture::Fixture;

/// At least one scenario is defined.
#[must_use]
pub fn check_not_empty(fixture: &Fixture) -> CheckReport {
    CheckReport::fixture(
        CheckKind::NotEmpty,
        CheckOutcome::check(!fixture.is_empty(), || "no scenarios defined".to_string()),
    )
}

/// Every scenario carries all required fields.
///
/// One report per scenario; a failure names exactly which fields are absent.
#[must_use]
pub fn check_required_fields(fixture: &Fixture) -> Vec<CheckReport> {
    fixture
        .scenarios()
        .iter()
        .map(|scenario| {
            let missing = scenario.missing_fields();
            CheckReport::scenario(
                CheckKind::RequiredFields,
                scenario.display_name(),
                CheckOutcome::check(missing.is_empty(), || {
                    format!(
                        "scenario '{}' missing fields: {missing:?}",
                        scenario.display_name()
                    )
                }),
            )
        })
        .collect()
}

/// Every scenario declares at least one expected or forbidden pattern.
#[must_use]
pub fn check_has_patterns(fixture: &Fixture) -> Vec<CheckReport> {
    fixture
        .scenarios()
        .iter()
        .map(|scenario| {
            CheckReport::scenario(
                CheckKind::HasPatterns,
                scenario.display_name(),
                CheckOutcome::check(scenario.has_patterns(), || {
                    format!(
                        "scenario '{}' has no expected_patterns or forbidden_patterns",
                        scenario.display_name()
                    )
                }),
            )
        })
        .collect()
}

/// No two scenarios share a name.
#[must_use]
pub fn check_unique_names(fixture: &Fixture) -> CheckReport {
    let duplicates = fixture.duplicate_names();
    CheckReport::fixture(
        CheckKind::UniqueNames,
        CheckOutcome::check(duplicates.is_empty(), || {
            format!("duplicate scenario names: {duplicates:?}")
        }),
    )
}

/// Every scenario has a non-empty tag list.
#[must_use]
pub fn check_has_tags(fixture: &Fixture) -> Vec<CheckReport> {
    fixture
        .scenarios()
        .iter()
        .map(|scenario| {
            CheckReport::scenario(
                CheckKind::HasTags,
                scenario.display_name(),
                CheckOutcome::check(!scenario.tags().is_empty(), || {
                    format!("scenario '{}' has no tags", scenario.display_name())
                }),
            )
        })
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
    fn empty_fixture_fails_not_empty() {
        let fixture = parse("scenarios: []");
        let report = check_not_empty(&fixture);
        assert_eq!(
            report.outcome,
            CheckOutcome::Fail("no scenarios defined".to_string())
        );
    }

    #[test]
    fn populated_fixture_passes_not_empty() {
        let fixture = parse(
            r#"
scenarios:
  - name: a
    prompt: p
    mock_response: m
"#,
        );
        assert_eq!(check_not_empty(&fixture).outcome, CheckOutcome::Pass);
    }

    #[test]
    fn required_fields_failure_names_fields() {
        let fixture = parse(
            r#"
scenarios:
  - name: partial
    mock_response: m
"#,
        );

        let reports = check_required_fields(&fixture);
        assert_eq!(reports.len(), 1);
        let CheckOutcome::Fail(msg) = &reports[0].outcome else {
            panic!("expected failure");
        };
        assert!(msg.contains("partial"));
        assert!(msg.contains("prompt"));
        assert!(!msg.contains("mock_response"));
    }

    #[test]
    fn scenario_asserting_nothing_fails_has_patterns() {
        let fixture = parse(
            r#"
scenarios:
  - name: silent
    prompt: p
    mock_response: m
    tags: [t]
"#,
        );

        let reports = check_has_patterns(&fixture);
        assert!(reports[0].outcome.is_fail());
    }

    #[test]
    fn duplicate_names_fail_with_full_set() {
        let fixture = parse(
            r#"
scenarios:
  - name: package_json
    prompt: p
    mock_response: m
  - name: package_json
    prompt: p
    mock_response: m
"#,
        );

        let report = check_unique_names(&fixture);
        let CheckOutcome::Fail(msg) = &report.outcome else {
            panic!("expected failure");
        };
        assert!(msg.contains("package_json"));
    }

    #[test]
    fn untagged_scenario_fails_has_tags() {
        let fixture = parse(
            r#"
scenarios:
  - name: bare
    prompt: p
    mock_response: m
    expected_patterns: [m]
"#,
        );

        let reports = check_has_tags(&fixture);
        assert_eq!(
            reports[0].outcome,
            CheckOutcome::Fail("scenario 'bare' has no tags".to_string())
        );
    }

    #[test]
    fn per_scenario_checks_emit_zero_reports_for_empty_fixture() {
        // No false passes when nothing is defined.
        let fixture = parse("scenarios: []");
        assert!(check_required_fields(&fixture).is_empty());
        assert!(check_has_patterns(&fixture).is_empty());
        assert!(check_has_tags(&fixture).is_empty());
    }
}
