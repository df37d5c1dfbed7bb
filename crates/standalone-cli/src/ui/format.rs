//! Formatting utilities for durations and batch build reports.

use crate::bundler::BuildReport;
use owo_colors::OwoColorize;
use std::time::Duration;

/// Format duration in human-readable format.
///
/// Converts to the most appropriate unit (ms, s, m:s).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use standalone_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let total_secs = duration.as_secs();
        format!("{}m {}s", total_secs / 60, total_secs % 60)
    }
}

/// Print a per-component summary of a batch build.
///
/// One line per component, successes first, then failures with their reasons,
/// followed by a totals line with the elapsed time.
pub fn print_build_report(report: &BuildReport, elapsed: Duration) {
    for outcome in report.successes() {
        eprintln!(
            "  {} {} → {}",
            "✓".green().bold(),
            outcome.component,
            outcome.entry_file_name()
        );
    }

    for outcome in report.failures() {
        let reason = outcome.failure_reason().unwrap_or("unknown failure");
        eprintln!(
            "  {} {} — {}",
            "✗".red().bold(),
            outcome.component.red(),
            reason
        );
    }

    let failed = report.failed_count();
    let total = report.len();
    if failed == 0 {
        eprintln!(
            "{} {} component{} built in {}",
            "✓".green().bold(),
            total,
            if total == 1 { "" } else { "s" },
            format_duration(elapsed)
        );
    } else {
        eprintln!(
            "{} {} of {} component builds failed ({})",
            "✗".red().bold(),
            failed,
            total,
            format_duration(elapsed)
        );
    }
}
