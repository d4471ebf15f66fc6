//! Literal substring matching
//!
//! Every pattern is a literal: special characters carry no meaning, matching
//! is case-sensitive, and no whitespace or Unicode normalization is applied.
//! Both per-scenario checks compute their complete violation set rather than
//! stopping at the first offender.

use scaffold_fixture::Scenario;

/// Whether `pattern` occurs anywhere in `body` as a literal substring.
#[inline]
#[must_use]
pub fn contains(body: &str, pattern: &str) -> bool {
    body.contains(pattern)
}

/// Expected patterns absent from the scenario's mock output.
///
/// Non-empty result means the expected-patterns check fails, reporting
/// the full set.
#[must_use]
pub fn missing_expected(scenario: &Scenario) -> Vec<&str> {
    let body = scenario.mock_response();
    scenario
        .expected_patterns()
        .iter()
        .map(String::as_str)
        .filter(|p| !contains(body, p))
        .collect()
}

/// Forbidden patterns present in the scenario's mock output.
///
/// Non-empty result means the forbidden-patterns check fails, reporting
/// the full set.
#[must_use]
pub fn found_forbidden(scenario: &Scenario) -> Vec<&str> {
    let body = scenario.mock_response();
    scenario
        .forbidden_patterns()
        .iter()
        .map(String::as_str)
        .filter(|p| contains(body, p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn scenario(yaml: &str) -> Scenario {
        let fixture: scaffold_fixture::Fixture = serde_yaml::from_str(yaml).unwrap();
        fixture.scenarios()[0].clone()
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(contains("webDarkTheme", "webDarkTheme"));
        assert!(!contains("webdarktheme", "webDarkTheme"));
    }

    #[test]
    fn special_characters_are_literal() {
        // Regex metacharacters must not be interpreted.
        assert!(contains("a.b", "a.b"));
        assert!(!contains("axb", "a.b"));
        assert!(contains("import { defineConfig }", "{ defineConfig }"));
        assert!(contains("price: $1 (usd)", "$1 (usd)"));
    }

    #[test]
    fn missing_expected_reports_full_set() {
        let s = scenario(
            r#"
scenarios:
  - name: fastapi_main
    prompt: p
    mock_response: "app = FastAPI()"
    expected_patterns:
      - "@asynccontextmanager"
      - "FastAPI()"
      - "async def lifespan"
"#,
        );

        assert_eq!(
            missing_expected(&s),
            vec!["@asynccontextmanager", "async def lifespan"]
        );
    }

    #[test]
    fn found_forbidden_reports_full_set() {
        let s = scenario(
            r#"
scenarios:
  - name: dockerfile_frontend
    prompt: p
    mock_response: "RUN npm install && yarn build"
    forbidden_patterns:
      - "RUN npm install"
      - "yarn"
      - "bower"
"#,
        );

        assert_eq!(found_forbidden(&s), vec!["RUN npm install", "yarn"]);
    }

    #[test]
    fn clean_scenario_has_no_violations() {
        let s = scenario(
            r#"
scenarios:
  - name: vite_config
    prompt: p
    mock_response: "import { defineConfig } from 'vite'"
    expected_patterns:
      - "import { defineConfig }"
    forbidden_patterns:
      - "module.exports"
"#,
        );

        assert!(missing_expected(&s).is_empty());
        assert!(found_forbidden(&s).is_empty());
    }

    #[test]
    fn empty_pattern_lists_yield_empty_violations() {
        let s = scenario(
            r#"
scenarios:
  - name: bare
    prompt: p
    mock_response: anything
"#,
        );

        assert!(missing_expected(&s).is_empty());
        assert!(found_forbidden(&s).is_empty());
    }

    proptest! {
        /// A pattern embedded in a body is always found.
        #[test]
        fn embedded_pattern_is_contained(
            prefix in ".*",
            pattern in ".+",
            suffix in ".*",
        ) {
            let body = format!("{prefix}{pattern}{suffix}");
            prop_assert!(contains(&body, &pattern));
        }

        /// Patterns from a disjoint alphabet are never found.
        #[test]
        fn disjoint_alphabet_never_contained(
            body in "[a-m]*",
            pattern in "[n-z]+",
        ) {
            prop_assert!(!contains(&body, &pattern));
        }
    }
}
