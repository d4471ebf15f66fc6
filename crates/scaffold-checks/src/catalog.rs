//! Domain-specific assertion catalog
//!
//! A closed, static table of known scaffolder output conventions keyed by
//! scenario name: infrastructure config must use managed identity, the
//! backend entrypoint must expose a health route, the frontend must ship
//! the dark theme, and so on. A fixture is not required to define every
//! catalog scenario; an absent one skips its rule rather than failing it.
//!
//! Deliberately not a plugin mechanism. Extending the catalog means adding
//! a row here.

use crate::matcher::contains;
use crate::report::{CheckKind, CheckOutcome, CheckReport};
use once_cell::sync::Lazy;
use scaffold_fixture::Fixture;

/// One literal sub-condition of a domain rule.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// Pattern must occur in the mock output.
    Contains(&'static str),
    /// Pattern must not occur in the mock output.
    Absent(&'static str),
    /// Pattern must not occur even ignoring ASCII case.
    AbsentIgnoreCase(&'static str),
}

impl Condition {
    /// Evaluate against a mock output body.
    #[must_use]
    pub fn holds(&self, body: &str) -> bool {
        match self {
            Self::Contains(p) => contains(body, p),
            Self::Absent(p) => !contains(body, p),
            Self::AbsentIgnoreCase(p) => !body.to_lowercase().contains(&p.to_lowercase()),
        }
    }

    /// Failure message naming exactly which expectation was violated.
    #[must_use]
    pub fn violation(&self, message: &str) -> String {
        match self {
            Self::Contains(p) => format!("{message}: expected '{p}' to be present"),
            Self::Absent(p) => format!("{message}: expected '{p}' to be absent"),
            Self::AbsentIgnoreCase(p) => {
                format!("{message}: expected '{p}' to be absent (any case)")
            }
        }
    }
}

/// One (scenario name → sub-conditions) rule from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct DomainRule {
    /// The scenario the rule applies to, when the fixture defines it.
    pub scenario: &'static str,
    /// Sub-conditions, each paired with its descriptive message.
    pub conditions: &'static [(Condition, &'static str)],
}

impl DomainRule {
    /// Evaluate this rule against a fixture.
    ///
    /// Absent scenario → Skip. Present scenario → one Pass, or one Fail
    /// listing every violated sub-condition.
    #[must_use]
    pub fn evaluate(&self, fixture: &Fixture) -> CheckReport {
        let Some(scenario) = fixture.get(self.scenario) else {
            return CheckReport::fixture(
                CheckKind::DomainRule(self.scenario),
                CheckOutcome::Skip(format!("{} scenario not found", self.scenario)),
            );
        };

        let body = scenario.mock_response();
        let violations: Vec<String> = self
            .conditions
            .iter()
            .filter(|(condition, _)| !condition.holds(body))
            .map(|(condition, message)| condition.violation(message))
            .collect();

        CheckReport::scenario(
            CheckKind::DomainRule(self.scenario),
            self.scenario,
            CheckOutcome::check(violations.is_empty(), || violations.join("; ")),
        )
    }
}

/// The full catalog for the scaffold-foundry-app template, in fixed order.
pub static CATALOG: Lazy<Vec<DomainRule>> = Lazy::new(|| {
    use Condition::{Absent, AbsentIgnoreCase, Contains};

    vec![
        // Infrastructure
        DomainRule {
            scenario: "azure_yaml_config",
            conditions: &[
                (Contains("remoteBuild: true"), "azure.yaml should use remoteBuild: true"),
                (Contains("host: containerapp"), "azure.yaml should use Container Apps"),
            ],
        },
        DomainRule {
            scenario: "bicep_main_module",
            conditions: &[
                (Contains("managedIdentity"), "Bicep should reference managed identity"),
                (AbsentIgnoreCase("password"), "Bicep should not contain passwords"),
            ],
        },
        // Backend
        DomainRule {
            scenario: "fastapi_main",
            conditions: &[
                (Contains("@asynccontextmanager"), "Should use asynccontextmanager"),
                (Contains("async def lifespan"), "Should define lifespan function"),
                (Contains("/health"), "Should have /health endpoint"),
            ],
        },
        DomainRule {
            scenario: "pyproject_toml",
            conditions: &[
                (Contains("fastapi"), "pyproject.toml should include fastapi"),
                (Contains("pydantic"), "pyproject.toml should include pydantic"),
                (Contains("pytest"), "pyproject.toml should include pytest"),
                (Contains("ruff"), "pyproject.toml should include ruff"),
                (Contains("azure-identity"), "pyproject.toml should include azure-identity"),
            ],
        },
        DomainRule {
            scenario: "pydantic_models",
            conditions: &[
                (Contains("from pydantic import BaseModel"), "Should import BaseModel"),
                (Absent("class Config:"), "Should not use Pydantic v1 Config class"),
                (Absent("orm_mode"), "Should not use Pydantic v1 orm_mode"),
            ],
        },
        // Frontend
        DomainRule {
            scenario: "vite_config",
            conditions: &[
                (Contains("import { defineConfig }"), "Should use ESM imports"),
                (Absent("module.exports"), "Should not use CommonJS"),
            ],
        },
        DomainRule {
            scenario: "package_json",
            conditions: &[
                (Contains("\"@fluentui/react-components\""), "Should use Fluent UI v9"),
                (Absent("\"@fluentui/react\":"), "Should not use Fluent UI v8"),
            ],
        },
        DomainRule {
            scenario: "fluent_theme_provider",
            conditions: &[
                (Contains("webDarkTheme"), "Should use webDarkTheme"),
                (Contains("FluentProvider"), "Should use FluentProvider"),
                (Absent("webLightTheme"), "Should not use light theme"),
            ],
        },
        DomainRule {
            scenario: "tsconfig_strict",
            conditions: &[
                (Contains("\"strict\": true"), "Should have strict: true"),
                (Absent("\"strict\": false"), "Should not have strict: false"),
            ],
        },
        // Containers
        DomainRule {
            scenario: "dockerfile_backend",
            conditions: &[
                (Contains("uv"), "Should use uv"),
                (Absent("RUN pip install"), "Should not use pip install"),
                (Absent("requirements.txt"), "Should not use requirements.txt"),
            ],
        },
        DomainRule {
            scenario: "dockerfile_frontend",
            conditions: &[
                (Contains("pnpm"), "Should use pnpm"),
                (Contains("nginx"), "Should use nginx for serving"),
                (Absent("RUN npm install"), "Should not use npm install"),
                (Absent("yarn"), "Should not use yarn"),
            ],
        },
    ]
});

/// Evaluate every catalog rule against a fixture, in catalog order.
#[must_use]
pub fn evaluate_catalog(fixture: &Fixture) -> Vec<CheckReport> {
    CATALOG.iter().map(|rule| rule.evaluate(fixture)).collect()
}
