//! Scaffolder scenario checks
//!
//! The check battery for scaffold-foundry-app prompt output: literal
//! pattern containment per scenario, fixture well-formedness, a static
//! domain-rule catalog, and tag coverage thresholds.
//!
//! # Architecture
//!
//! ```text
//! scenarios.yaml → Fixture → run_checks → Vec<CheckReport> → ReportSummary
//! ```
//!
//! Every check is a pure, single-pass computation over in-memory strings;
//! all of them are independently reportable as Pass, Fail, or Skip.
//!
//! # Example
//!
//! ```rust,ignore
//! use scaffold_checks::{run_all, ReportSummary};
//!
//! let reports = run_all("tests/scenarios/scaffold-foundry-app/scenarios.yaml")?;
//! let summary = ReportSummary::tally(&reports);
//! assert!(summary.is_success());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod catalog;
pub mod coverage;
pub mod matcher;
pub mod report;
pub mod runner;
pub mod structure;

// Re-exports for convenience
pub use catalog::{evaluate_catalog, Condition, DomainRule, CATALOG};
pub use coverage::{check_all_coverage, check_tag_coverage, COVERED_TAGS, MIN_PER_CATEGORY};
pub use matcher::{contains, found_forbidden, missing_expected};
pub use report::{CheckKind, CheckOutcome, CheckReport, ReportSummary};
pub use runner::{check_expected_patterns, check_forbidden_patterns, run_all, run_checks};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
