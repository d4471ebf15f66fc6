//! `scenario-verify` — run the full check battery and print a report.

use anyhow::Context;
use clap::{Arg, Command};
use scaffold_checks::{run_all, ReportSummary};
use scaffold_fixture::FIXTURE_RELATIVE_PATH;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Command::new("scenario-verify")
        .version(scaffold_checks::VERSION)
        .about("Validate scaffold-foundry-app scenario fixtures")
        .arg(
            Arg::new("fixture")
                .long("fixture")
                .default_value(FIXTURE_RELATIVE_PATH)
                .help("Path to the scenarios YAML fixture"),
        )
        .get_matches();

    let path = cli
        .get_one::<String>("fixture")
        .expect("fixture has a default value");

    let reports = run_all(path).with_context(|| format!("running checks against {path}"))?;
    for report in &reports {
        println!("{report}");
    }

    let summary = ReportSummary::tally(&reports);
    tracing::info!(
        passed = summary.passed,
        failed = summary.failed,
        skipped = summary.skipped,
        "check battery complete"
    );

    if summary.is_success() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}
