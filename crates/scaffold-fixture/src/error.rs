//! Error types for fixture loading and scenario lookup
//!
//! The loader distinguishes three conditions that downstream checks treat
//! differently: a missing file (skip), an unreadable file (fatal), and a
//! document that is not the expected structure (fatal).

use std::path::PathBuf;

/// Errors while reading and parsing the fixture file.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Fixture file does not exist. A skip condition, not a failure.
    #[error("fixture file not found: {path}")]
    Missing {
        /// The path that was probed.
        path: PathBuf,
    },

    /// IO error during file read.
    #[error("io error reading {path}: {source}")]
    Io {
        /// The path being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Document is not parseable as the expected structure. Fatal for the run.
    #[error("malformed fixture {path}: {message}")]
    Syntax {
        /// The path that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
}

impl FixtureError {
    /// Whether this error means "not applicable" rather than "defect".
    #[inline]
    #[must_use]
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}

/// Errors while resolving a scenario by name.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// No scenario with the requested name exists in the fixture.
    #[error("scenario '{name}' not found in fixture")]
    NotFound {
        /// The requested scenario name.
        name: String,
    },
}
