//! Scaffolder scenario fixture
//!
//! The trusted boundary between the fixture file on disk and the check
//! battery: load a `scenarios.yaml` document once, keep it immutable for
//! the duration of a run, and hand out scenarios by name.
//!
//! # Core Operations
//!
//! - **Load**: Parse a fixture file into a [`Fixture`]
//! - **Lookup**: Resolve a [`Scenario`] by its unique name
//!
//! # Example
//!
//! ```rust,ignore
//! use scaffold_fixture::{load_fixture, FixtureError};
//!
//! let fixture = match load_fixture("tests/scenarios/scaffold-foundry-app/scenarios.yaml") {
//!     Ok(fixture) => fixture,
//!     Err(FixtureError::Missing { .. }) => return, // skip, not a defect
//!     Err(other) => panic!("fixture is malformed: {other}"),
//! };
//!
//! let scenario = fixture.require("fluent_theme_provider")?;
//! assert!(scenario.mock_response().contains("webDarkTheme"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod loader;
pub mod scenario;

// Re-exports for convenience
pub use error::{FixtureError, LookupError};
pub use loader::{load_fixture, FIXTURE_RELATIVE_PATH};
pub use scenario::{Fixture, Scenario};
