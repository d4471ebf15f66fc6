//! Check outcome and report model
//!
//! Every check emits exactly one [`CheckReport`]. Three outcome kinds:
//! Pass, Fail (always with a message naming the violation), and Skip
//! (precondition not met — never counted as a defect).

use std::fmt;

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The assertion held.
    Pass,
    /// The assertion did not hold; the message names the scenario, the kind
    /// of violation, and the complete offending pattern set.
    Fail(String),
    /// The check's precondition (fixture or scenario existence) was not met.
    Skip(String),
}

impl CheckOutcome {
    /// Whether this outcome is a failure.
    #[inline]
    #[must_use]
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// Whether this outcome is a skip.
    #[inline]
    #[must_use]
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip(_))
    }

    /// Build a Pass/Fail outcome from a condition and a lazily-built message.
    pub fn check(ok: bool, message: impl FnOnce() -> String) -> Self {
        if ok {
            Self::Pass
        } else {
            Self::Fail(message())
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail(msg) => write!(f, "FAIL: {msg}"),
            Self::Skip(reason) => write!(f, "SKIP: {reason}"),
        }
    }
}

/// The fixed battery of check kinds the runner can emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckKind {
    /// Every expected pattern occurs in the mock output.
    ExpectedPatterns,
    /// No forbidden pattern occurs in the mock output.
    ForbiddenPatterns,
    /// The fixture file exists at the expected location.
    FixtureExists,
    /// At least one scenario is defined.
    NotEmpty,
    /// Every scenario carries name, prompt, and mock_response.
    RequiredFields,
    /// Every scenario declares at least one pattern.
    HasPatterns,
    /// No two scenarios share a name.
    UniqueNames,
    /// Every scenario has a non-empty tag list.
    HasTags,
    /// One rule from the domain-specific catalog.
    DomainRule(&'static str),
    /// Minimum scenario count for a category tag.
    TagCoverage(&'static str),
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedPatterns => write!(f, "expected_patterns"),
            Self::ForbiddenPatterns => write!(f, "forbidden_patterns"),
            Self::FixtureExists => write!(f, "fixture_exists"),
            Self::NotEmpty => write!(f, "scenarios_not_empty"),
            Self::RequiredFields => write!(f, "required_fields"),
            Self::HasPatterns => write!(f, "has_patterns"),
            Self::UniqueNames => write!(f, "unique_names"),
            Self::HasTags => write!(f, "has_tags"),
            Self::DomainRule(name) => write!(f, "domain_rule({name})"),
            Self::TagCoverage(tag) => write!(f, "tag_coverage({tag})"),
        }
    }
}

/// One independently-addressable, independently-reportable result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Which check produced this result.
    pub check: CheckKind,
    /// The scenario in question, when the check is per-scenario.
    pub scenario: Option<String>,
    /// The result.
    pub outcome: CheckOutcome,
}

impl CheckReport {
    /// Fixture-level report (no single scenario in question).
    #[must_use]
    pub fn fixture(check: CheckKind, outcome: CheckOutcome) -> Self {
        Self {
            check,
            scenario: None,
            outcome,
        }
    }

    /// Per-scenario report.
    #[must_use]
    pub fn scenario(check: CheckKind, name: impl Into<String>, outcome: CheckOutcome) -> Self {
        Self {
            check,
            scenario: Some(name.into()),
            outcome,
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scenario {
            Some(name) => write!(f, "[{}::{}] {}", self.check, name, self.outcome),
            None => write!(f, "[{}] {}", self.check, self.outcome),
        }
    }
}

/// Pass/fail/skip tallies over a report set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Checks that held.
    pub passed: usize,
    /// Checks that did not hold.
    pub failed: usize,
    /// Checks whose precondition was not met.
    pub skipped: usize,
}

impl ReportSummary {
    /// Tally a report slice.
    #[must_use]
    pub fn tally(reports: &[CheckReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            match report.outcome {
                CheckOutcome::Pass => summary.passed += 1,
                CheckOutcome::Fail(_) => summary.failed += 1,
                CheckOutcome::Skip(_) => summary.skipped += 1,
            }
        }
        summary
    }

    /// Whether the run is clean. All-skip counts as success.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
