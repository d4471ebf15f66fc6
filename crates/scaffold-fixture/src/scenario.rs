//! Scenario and fixture data model
//!
//! Mirrors the on-disk YAML shape: a root `scenarios` key holding an
//! ordered sequence of scenario records. The deserializer is deliberately
//! permissive — required fields land as `Option` so that their absence is
//! reported by the well-formedness checks as a named-field failure instead
//! of aborting the whole parse.

use crate::error::LookupError;
use indexmap::IndexMap;
use serde::Deserialize;

/// Placeholder used in diagnostics when a scenario has no `name` field.
pub const UNNAMED: &str = "UNNAMED";

/// One named unit under test: a static mock output plus pattern assertions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    /// Unique key across the fixture.
    #[serde(default)]
    name: Option<String>,
    /// The prompt that produced the mock output. Opaque to the checks.
    #[serde(default)]
    prompt: Option<String>,
    /// The artifact under test.
    #[serde(default)]
    mock_response: Option<String>,
    /// Category labels used by the coverage checks.
    #[serde(default)]
    tags: Vec<String>,
    /// Literal substrings that must occur in `mock_response`.
    #[serde(default)]
    expected_patterns: Vec<String>,
    /// Literal substrings that must not occur in `mock_response`.
    #[serde(default)]
    forbidden_patterns: Vec<String>,
}

impl Scenario {
    /// Scenario name, if the record carries one.
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name for diagnostics, falling back to [`UNNAMED`].
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    /// The prompt text, if present. Not interpreted by any check.
    #[inline]
    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// The mock output under test, empty when the field is absent.
    #[inline]
    #[must_use]
    pub fn mock_response(&self) -> &str {
        self.mock_response.as_deref().unwrap_or("")
    }

    /// Category tags, in fixture order.
    #[inline]
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Patterns required to occur in the mock output.
    #[inline]
    #[must_use]
    pub fn expected_patterns(&self) -> &[String] {
        &self.expected_patterns
    }

    /// Patterns required to be absent from the mock output.
    #[inline]
    #[must_use]
    pub fn forbidden_patterns(&self) -> &[String] {
        &self.forbidden_patterns
    }

    /// Whether the scenario carries the given category tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Names of required fields this record is missing.
    ///
    /// A well-formed scenario returns an empty list.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.prompt.is_none() {
            missing.push("prompt");
        }
        if self.mock_response.is_none() {
            missing.push("mock_response");
        }
        missing
    }

    /// Whether the scenario asserts anything at all.
    ///
    /// A scenario with neither expected nor forbidden patterns is malformed.
    #[inline]
    #[must_use]
    pub fn has_patterns(&self) -> bool {
        !self.expected_patterns.is_empty() || !self.forbidden_patterns.is_empty()
    }
}

/// Root fixture document: the ordered scenario sequence for one run.
///
/// Loaded once at the start of a run and treated as read-only for its
/// duration. Names, not positions, are the lookup key; source order is
/// still preserved for report stability.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    scenarios: Vec<Scenario>,
}

impl Fixture {
    /// Build a fixture from an already-deserialized scenario list.
    #[inline]
    #[must_use]
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// Scenarios in source order.
    #[inline]
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Number of scenarios defined.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the fixture defines no scenarios.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Look up a scenario by name.
    ///
    /// `None` is the skip form used by the domain-specific checks, where a
    /// fixture is not required to define every optional scenario.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Scenario> {
        self.scenarios
            .iter()
            .find(|s| s.name().is_some_and(|n| n == name))
    }

    /// Look up a scenario by name, failing when it is absent.
    ///
    /// This is the test-failure form: the caller expected the named
    /// scenario to exist.
    pub fn require(&self, name: &str) -> Result<&Scenario, LookupError> {
        self.get(name).ok_or_else(|| LookupError::NotFound {
            name: name.to_string(),
        })
    }

    /// Names that appear on more than one scenario, in first-seen order.
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for scenario in &self.scenarios {
            if let Some(name) = scenario.name() {
                *counts.entry(name).or_insert(0) += 1;
            }
        }
        counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Number of scenarios carrying the given category tag.
    #[must_use]
    pub fn count_tagged(&self, tag: &str) -> usize {
        self.scenarios.iter().filter(|s| s.has_tag(tag)).count()
    }
}
