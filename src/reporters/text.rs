//! Text (terminal) reporter with colors and formatting

use crate::models::{AssessmentReport, OverallStatus, Severity, WellbeingLevel};
use anyhow::Result;

/// Severity colors (ANSI escape codes)
fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Normal => "\x1b[32m",          // Green
        Severity::Mild => "\x1b[33m",            // Yellow
        Severity::Moderate => "\x1b[93m",        // Light yellow
        Severity::Severe => "\x1b[91m",          // Light red
        Severity::ExtremelySevere => "\x1b[31m", // Red
    }
}

/// Well-being level colors
fn level_color(level: WellbeingLevel) -> &'static str {
    match level {
        WellbeingLevel::Low => "\x1b[91m",       // Light red
        WellbeingLevel::Moderate => "\x1b[33m",  // Yellow
        WellbeingLevel::High => "\x1b[92m",      // Light green
        WellbeingLevel::Excellent => "\x1b[32m", // Green
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render report as formatted terminal output
pub fn render(report: &AssessmentReport) -> Result<String> {
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{BOLD}Mindgauge Assessment{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Date: {}  Report: {DIM}{}{RESET}\n\n",
        report.generated_at.format("%Y-%m-%d"),
        if report.id.is_empty() {
            "-"
        } else {
            report.id.as_str()
        }
    ));

    if let Some(dass) = &report.dass {
        out.push_str(&format!("{BOLD}DASS-21{RESET}\n"));
        for (label, score) in dass.categories() {
            let color = severity_color(score.severity);
            out.push_str(&format!(
                "  {:<12} {:>3}%  {color}{}{RESET}\n",
                label, score.percentage, score.severity
            ));
        }
        let status_color = match dass.overall_status {
            OverallStatus::Healthy => "\x1b[32m",
            OverallStatus::AtRisk => "\x1b[31m",
        };
        out.push_str(&format!(
            "  {:<12} {:>3}%  {status_color}{BOLD}{}{RESET}\n\n",
            "Overall", dass.overall_percentage, dass.overall_status
        ));
    }

    if let Some(star) = &report.star {
        out.push_str(&format!("{BOLD}STAR of Well-Being{RESET}\n"));
        for (label, category) in [("Inherent", &star.inherent), ("Coherent", &star.coherent)] {
            let color = level_color(category.level);
            out.push_str(&format!(
                "  {:<12} {:>3}%  {color}{}{RESET}\n",
                label, category.percentage, category.level
            ));
            for attr in &category.attributes {
                let color = level_color(attr.level);
                out.push_str(&format!(
                    "    {DIM}{:<22}{RESET} {:>3}%  {color}{}{RESET}\n",
                    attr.attribute.label(),
                    attr.percentage,
                    attr.level
                ));
            }
        }
        let color = level_color(star.overall_level);
        out.push_str(&format!(
            "  {:<12} {:>3}%  {color}{BOLD}{}{RESET}\n\n",
            "Overall", star.overall_percentage, star.overall_level
        ));

        for insight in crate::scoring::star::insights(star) {
            out.push_str(&format!("  {DIM}• {}{RESET}\n", insight));
        }
        out.push('\n');
    }

    // Closing guidance, keyed off the clinical result when present
    match report.dass.as_ref().map(|d| d.overall_status) {
        Some(OverallStatus::AtRisk) => {
            out.push_str(&format!(
                "{DIM}These results suggest talking to a professional. Run `mindgauge book` to schedule a consultation.{RESET}\n"
            ));
        }
        _ => {
            out.push_str(&format!(
                "{DIM}This is a self-screening, not a diagnosis. Re-run `mindgauge assess` any time.{RESET}\n"
            ));
        }
    }

    Ok(out)
}
