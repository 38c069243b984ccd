//! Markdown reporter
//!
//! GitHub-flavored Markdown suitable for pasting into issues, wikis, or
//! sharing with a practitioner.

use crate::models::AssessmentReport;
use anyhow::Result;

/// Render report as Markdown
pub fn render(report: &AssessmentReport) -> Result<String> {
    let mut out = String::new();

    out.push_str("# Mindgauge Assessment\n\n");
    out.push_str(&format!(
        "**Date:** {}  \n",
        report.generated_at.format("%Y-%m-%d")
    ));
    if !report.id.is_empty() {
        out.push_str(&format!("**Report:** `{}`\n", report.id));
    }
    out.push('\n');

    if let Some(dass) = &report.dass {
        out.push_str("## DASS-21\n\n");
        out.push_str("| Category | Score | Percentage | Severity |\n");
        out.push_str("|----------|------:|-----------:|----------|\n");
        for (label, score) in dass.categories() {
            out.push_str(&format!(
                "| {} | {} | {}% | {} |\n",
                label, score.score, score.percentage, score.severity
            ));
        }
        out.push_str(&format!(
            "\n**Overall:** {}% — **{}**\n\n",
            dass.overall_percentage, dass.overall_status
        ));
    }

    if let Some(star) = &report.star {
        out.push_str("## STAR of Well-Being\n\n");
        for (label, category) in [("Inherent", &star.inherent), ("Coherent", &star.coherent)] {
            out.push_str(&format!(
                "### {} — {}% ({})\n\n",
                label, category.percentage, category.level
            ));
            out.push_str("| Attribute | Score | Percentage | Level |\n");
            out.push_str("|-----------|------:|-----------:|-------|\n");
            for attr in &category.attributes {
                out.push_str(&format!(
                    "| {} | {} | {}% | {} |\n",
                    attr.attribute.label(),
                    attr.score,
                    attr.percentage,
                    attr.level
                ));
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "**Overall:** {}% — **{}**\n\n",
            star.overall_percentage, star.overall_level
        ));

        let insights = crate::scoring::star::insights(star);
        if !insights.is_empty() {
            out.push_str("### Insights\n\n");
            for insight in insights {
                out.push_str(&format!("- {}\n", insight));
            }
            out.push('\n');
        }
    }

    if !report.answers.is_empty() {
        out.push_str("<details>\n<summary>All answers</summary>\n\n");
        out.push_str("| # | Question | Answer | Level | Category |\n");
        out.push_str("|--:|----------|--------|------:|----------|\n");
        for (i, a) in report.answers.iter().enumerate() {
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                i + 1,
                a.question,
                a.answer,
                a.level,
                a.category
            ));
        }
        out.push_str("\n</details>\n");
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_markdown_render_structure() {
        let rendered = render(&test_report()).expect("render markdown");
        assert!(rendered.starts_with("# Mindgauge Assessment"));
        assert!(rendered.contains("## DASS-21"));
        assert!(rendered.contains("| Depression |"));
        assert!(rendered.contains("### Inherent"));
        assert!(rendered.contains("<details>"));
    }

    #[test]
    fn test_markdown_omits_missing_sections() {
        let report = AssessmentReport::new(None, None);
        let rendered = render(&report).expect("render markdown");
        assert!(!rendered.contains("## DASS-21"));
        assert!(!rendered.contains("## STAR"));
        assert!(!rendered.contains("<details>"));
    }
}
