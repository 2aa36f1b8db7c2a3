use crate::OutputFormat;
use anyhow::Result;
use cakewalk_browser::Session;
use cakewalk_suite::pages::MainPage;
use cakewalk_suite::registry::{self, TestCase};
use cakewalk_suite::{CaseOutcome, CaseReport, Marker, RunReport, SuiteConfig};
use console::style;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub fn execute(
    marker: Option<Marker>,
    chrome_path: Option<PathBuf>,
    base_url: String,
    headed: bool,
    profile: Option<String>,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let cases = registry::filtered(marker);
    if cases.is_empty() {
        anyhow::bail!("No checks match the requested marker");
    }

    let config = SuiteConfig {
        base_url,
        chrome_path,
        headless: !headed,
        profile,
        ..SuiteConfig::default()
    };

    if format == OutputFormat::Pretty {
        println!(
            "Running {} checks against {}",
            style(cases.len()).bold(),
            style(&config.base_url).cyan()
        );
    }

    // Create tokio runtime for async operations
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let report = runtime.block_on(run_cases(&cases, &config, format));

    runtime.shutdown_timeout(Duration::from_millis(100));

    if let Some(path) = &output {
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Pretty => {
            println!();
            if report.is_success() {
                println!(
                    "{}",
                    style(format!("✅ {} checks passed", report.passed()))
                        .green()
                        .bold()
                );
            } else {
                println!(
                    "{}",
                    style(format!(
                        "❌ {} passed, {} failed",
                        report.passed(),
                        report.failed()
                    ))
                    .red()
                    .bold()
                );
            }
            if let Some(path) = &output {
                println!("Report written to {}", path.display());
            }
        }
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} checks failed",
            report.failed(),
            report.cases.len()
        );
    }

    Ok(())
}

/// Run each check in its own browser session, sequentially.
async fn run_cases(cases: &[TestCase], config: &SuiteConfig, format: OutputFormat) -> RunReport {
    let mut report = RunReport::new(config.base_url.clone());

    for case in cases {
        let spinner = case_spinner(case.name, format);
        let started = Instant::now();
        let outcome = run_case(case, config).await;
        let duration_ms = started.elapsed().as_millis() as u64;
        spinner.finish_and_clear();

        if format == OutputFormat::Pretty {
            match &outcome {
                CaseOutcome::Passed => println!(
                    "✅ {} ({}, {}ms)",
                    case.name,
                    style(case.marker).dim(),
                    duration_ms
                ),
                CaseOutcome::Failed { reason } => println!(
                    "❌ {} ({}, {}ms)\n   {}",
                    case.name,
                    style(case.marker).dim(),
                    duration_ms,
                    style(reason).red()
                ),
            }
        }

        report.record(CaseReport {
            name: case.name.to_string(),
            marker: case.marker,
            outcome,
            duration_ms,
        });
    }

    report
}

/// A fresh session and main-page fixture per check, torn down afterwards.
async fn run_case(case: &TestCase, config: &SuiteConfig) -> CaseOutcome {
    let session = match Session::start(&config.session()).await {
        Ok(session) => session,
        Err(e) => {
            return CaseOutcome::Failed {
                reason: format!("browser session failed to start: {}", e),
            };
        }
    };

    let result = match MainPage::open(session.driver(), &config.base_url).await {
        Ok(page) => (case.run)(page).await,
        Err(e) => Err(e),
    };

    if let Err(e) = session.shutdown().await {
        tracing::debug!("Session shutdown failed: {}", e);
    }

    match result {
        Ok(()) => CaseOutcome::Passed,
        Err(e) => CaseOutcome::Failed {
            reason: e.to_string(),
        },
    }
}

fn case_spinner(name: &str, format: OutputFormat) -> ProgressBar {
    if format != OutputFormat::Pretty {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
