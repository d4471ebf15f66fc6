//! Check runner
//!
//! Re-expresses the fixture-driven parametrization as an explicit loop:
//! one report per scenario per per-scenario check kind, so adding a fixture
//! entry automatically yields new coverage without code changes.

use crate::catalog::{evaluate_catalog, CATALOG};
use crate::coverage::{check_all_coverage, COVERED_TAGS};
use crate::matcher::{found_forbidden, missing_expected};
use crate::report::{CheckKind, CheckOutcome, CheckReport};
use crate::structure::{
    check_has_patterns, check_has_tags, check_not_empty, check_required_fields,
    check_unique_names,
};
use scaffold_fixture::{load_fixture, Fixture, FixtureError, Scenario};
use std::path::Path;

/// Every expected pattern occurs in the scenario's mock output.
#[must_use]
pub fn check_expected_patterns(scenario: &Scenario) -> CheckReport {
    let missing = missing_expected(scenario);
    CheckReport::scenario(
        CheckKind::ExpectedPatterns,
        scenario.display_name(),
        CheckOutcome::check(missing.is_empty(), || {
            format!(
                "scenario '{}' mock_response missing expected patterns: {missing:?}",
                scenario.display_name()
            )
        }),
    )
}

/// No forbidden pattern occurs in the scenario's mock output.
#[must_use]
pub fn check_forbidden_patterns(scenario: &Scenario) -> CheckReport {
    let found = found_forbidden(scenario);
    CheckReport::scenario(
        CheckKind::ForbiddenPatterns,
        scenario.display_name(),
        CheckOutcome::check(found.is_empty(), || {
            format!(
                "scenario '{}' mock_response contains forbidden patterns: {found:?}",
                scenario.display_name()
            )
        }),
    )
}

/// Run the full battery over an already-loaded fixture.
#[must_use]
pub fn run_checks(fixture: &Fixture) -> Vec<CheckReport> {
    let mut reports = Vec::new();

    reports.push(CheckReport::fixture(CheckKind::FixtureExists, CheckOutcome::Pass));
    reports.push(check_not_empty(fixture));

    // Pattern checks run independently per scenario; a scenario with both
    // violation kinds reports both.
    for scenario in fixture.scenarios() {
        reports.push(check_expected_patterns(scenario));
        reports.push(check_forbidden_patterns(scenario));
    }

    reports.extend(check_required_fields(fixture));
    reports.extend(check_has_patterns(fixture));
    reports.push(check_unique_names(fixture));
    reports.extend(check_has_tags(fixture));
    reports.extend(evaluate_catalog(fixture));
    reports.extend(check_all_coverage(fixture));

    reports
}

/// The report set emitted when the fixture file does not exist.
///
/// Every fixture-level check reports Skip; per-scenario checks produce zero
/// instances since no scenario list exists to parametrize over.
#[must_use]
pub fn skipped_reports(path: &Path) -> Vec<CheckReport> {
    let reason = format!("fixture file not found: {}", path.display());
    let skip = |check: CheckKind| CheckReport::fixture(check, CheckOutcome::Skip(reason.clone()));

    let mut reports = vec![
        skip(CheckKind::FixtureExists),
        skip(CheckKind::NotEmpty),
        skip(CheckKind::UniqueNames),
    ];
    reports.extend(CATALOG.iter().map(|rule| skip(CheckKind::DomainRule(rule.scenario))));
    reports.extend(COVERED_TAGS.iter().map(|&tag| skip(CheckKind::TagCoverage(tag))));
    reports
}

/// Load the fixture at `path` and run the full battery.
///
/// A missing fixture file is not a defect: the battery degrades to all-Skip.
/// A malformed fixture is fatal and propagates to the caller.
///
/// # Errors
///
/// [`FixtureError::Io`] or [`FixtureError::Syntax`] from the loader.
pub fn run_all(path: impl AsRef<Path>) -> Result<Vec<CheckReport>, FixtureError> {
    let path = path.as_ref();
    match load_fixture(path) {
        Ok(fixture) => Ok(run_checks(&fixture)),
        Err(err) if err.is_skip() => {
            tracing::warn!(path = %path.display(), "fixture absent, all checks skipped");
            Ok(skipped_reports(path))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(yaml: &str) -> Fixture {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn both_pattern_checks_report_independently() {
        let fixture = parse(
            r#"
scenarios:
  - name: broken
    prompt: p
    mock_response: "has forbidden thing"
    tags: [t]
    expected_patterns: ["absent thing"]
    forbidden_patterns: ["forbidden thing"]
"#,
        );

        let scenario = &fixture.scenarios()[0];
        assert!(check_expected_patterns(scenario).outcome.is_fail());
        assert!(check_forbidden_patterns(scenario).outcome.is_fail());
    }

    #[test]
    fn one_report_per_scenario_per_pattern_check() {
        let fixture = parse(
            r#"
scenarios:
  - name: a
    prompt: p
    mock_response: m
    tags: [t]
    expected_patterns: [m]
  - name: b
    prompt: p
    mock_response: m
    tags: [t]
    expected_patterns: [m]
"#,
        );

        let reports = run_checks(&fixture);
        let expected: Vec<_> = reports
            .iter()
            .filter(|r| r.check == CheckKind::ExpectedPatterns)
            .collect();
        let forbidden: Vec<_> = reports
            .iter()
            .filter(|r| r.check == CheckKind::ForbiddenPatterns)
            .collect();
        assert_eq!(expected.len(), 2);
        assert_eq!(forbidden.len(), 2);
    }

    #[test]
    fn empty_fixture_yields_zero_per_scenario_reports() {
        let reports = run_checks(&parse("scenarios: []"));

        assert!(!reports
            .iter()
            .any(|r| r.check == CheckKind::ExpectedPatterns));
        let not_empty = reports
            .iter()
            .find(|r| r.check == CheckKind::NotEmpty)
            .unwrap();
        assert_eq!(
            not_empty.outcome,
            CheckOutcome::Fail("no scenarios defined".to_string())
        );
    }

    #[test]
    fn missing_fixture_skips_everything() {
        let dir = tempfile::tempdir().unwrap();
        let reports = run_all(dir.path().join("scenarios.yaml")).unwrap();

        assert!(!reports.is_empty());
        assert!(reports.iter().all(|r| r.outcome.is_skip()));
    }

    #[test]
    fn malformed_fixture_is_fatal() {
        use std::io::Write;
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(b"scenarios: [broken").unwrap();

        let err = run_all(file.path()).unwrap_err();
        assert!(matches!(err, FixtureError::Syntax { .. }));
    }
}
