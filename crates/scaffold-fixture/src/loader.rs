//! Fixture loading
//!
//! One local file read at startup; the parsed fixture is immutable for the
//! rest of the run. A missing file is a skip condition surfaced as
//! [`FixtureError::Missing`]; anything else wrong with the file is fatal.

use crate::error::FixtureError;
use crate::scenario::Fixture;
use std::path::Path;

/// Well-known fixture location, relative to the harness root.
pub const FIXTURE_RELATIVE_PATH: &str = "tests/scenarios/scaffold-foundry-app/scenarios.yaml";

/// Load and parse the fixture at `path`.
///
/// # Errors
///
/// - [`FixtureError::Missing`] when the file does not exist
/// - [`FixtureError::Io`] when the file exists but cannot be read
/// - [`FixtureError::Syntax`] when the document is not the expected shape
pub fn load_fixture(path: impl AsRef<Path>) -> Result<Fixture, FixtureError> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "fixture file not found, skipping");
        return Err(FixtureError::Missing {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let fixture: Fixture =
        serde_yaml::from_str(&raw).map_err(|e| FixtureError::Syntax {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::info!(
        path = %path.display(),
        scenarios = fixture.len(),
        "loaded scenario fixture"
    );
    Ok(fixture)
}
