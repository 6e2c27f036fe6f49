use std::fs;

use crate::config::OutputConfig;
use crate::core::{CombineError, CombineResult};
use crate::reporting::ResultReporter;
use crate::verification::{get_formatter, run_scenarios, Scenario, VerificationReport};

/// Run the scenario table and emit a machine-readable report
pub fn execute_self_check<C, R>(
    scenarios: &[Scenario],
    config: &C,
    reporter: &R,
) -> CombineResult<VerificationReport>
where
    C: OutputConfig + ?Sized,
    R: ResultReporter + ?Sized,
{
    let report = run_scenarios(scenarios);
    let rendered = get_formatter(config.report_format()).format(&report)?;

    match config.report_output() {
        Some(path) => {
            fs::write(&path, rendered).map_err(|e| {
                CombineError::report(
                    anyhow::Error::new(e).context(format!("cannot write {}", path.display())),
                )
            })?;
            reporter.report_diagnostic(&format!("report written to {}", path.display()));
        }
        None => reporter.report_result(rendered.trim_end()),
    }

    reporter.report_diagnostic(&format!(
        "self-check: {} passed, {} failed, {} total",
        report.passed, report.failed, report.total
    ));
    for case in report.failures() {
        reporter.report_diagnostic(&format!("failed: {}", case.scenario.name));
    }

    Ok(report)
}
