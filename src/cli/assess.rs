//! Interactive assessment command
//!
//! Runs the selected questionnaires in the terminal: one question at a
//! time, numbered options, `b` to step back, `q` to abandon. Scoring only
//! happens once a catalog is complete (or the run is exported), through the
//! same engine the TUI and `score` command use.

use anyhow::{Context, Result};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::catalog::Scale;
use crate::models::{
    deterministic_report_id, AnsweredQuestion, AssessmentReport, OptionKey, UserAnswer,
};
use crate::reporters::{self, OutputFormat};
use crate::scoring;
use crate::session::{Advance, AssessmentSession, SessionState};

use super::{book, ScaleSelection};

pub(crate) fn run(selection: ScaleSelection, format: &str, output: Option<&Path>) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let term = Term::stdout();

    let mut dass_report = None;
    let mut star_report = None;
    let mut answered = Vec::new();
    let mut all_answers: Vec<UserAnswer> = Vec::new();

    for &scale in selection.scales() {
        let answers = match run_session(&term, scale)? {
            Some(answers) => answers,
            None => {
                println!("\n{}", style("Assessment abandoned. Nothing was kept.").dim());
                return Ok(());
            }
        };

        match scale {
            Scale::Dass => dass_report = Some(scoring::dass::compute(&answers)),
            Scale::Star => star_report = Some(scoring::star::compute(&answers)),
        }
        answered.extend(AnsweredQuestion::collect(scale.questions(), &answers));
        all_answers.extend(answers);
    }

    let report = AssessmentReport::new(dass_report, star_report)
        .with_answers(answered)
        .with_id(deterministic_report_id(&all_answers));

    let rendered = reporters::report_with_format(&report, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!(
                "{} Report written to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => println!("{rendered}"),
    }

    // Offer the follow-up flow only when showing results on a terminal
    if format == OutputFormat::Text && output.is_none() {
        offer_booking(&term, &report)?;
    }

    Ok(())
}

/// Run one catalog to completion. Returns `None` if the user abandons.
fn run_session(term: &Term, scale: Scale) -> Result<Option<Vec<UserAnswer>>> {
    let mut session = AssessmentSession::new(scale);
    session.start();

    println!("\n{}", style(scale.label()).bold());
    println!(
        "{}",
        style("Answer with 1-4. b = back, q = quit.").dim()
    );

    let total = scale.questions().len() as u64;
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("  {bar:30.cyan/blue} {pos}/{len}")
            .expect("static progress template"),
    );

    loop {
        match session.state() {
            SessionState::Completed => break,
            // Backed out of the first question
            SessionState::NotStarted => {
                bar.finish_and_clear();
                return Ok(None);
            }
            SessionState::InProgress => {}
        }

        let question = session.current_question().expect("session in progress");
        bar.println(format!(
            "\n{} {}",
            style(format!("[Level {}]", question.level)).cyan(),
            style(question.prompt).bold()
        ));
        for option in &question.options {
            bar.println(format!(
                "  {}. {}",
                style(option.key.ordinal()).yellow(),
                option.label
            ));
        }
        if let Some(pending) = session.pending() {
            bar.println(format!(
                "  {}",
                style(format!(
                    "(previous answer: {})",
                    question.option(pending).label
                ))
                .dim()
            ));
        }

        term.write_str("> ")?;
        let input = term.read_line()?;
        match input.trim() {
            "b" | "back" => session.go_back(),
            "q" | "quit" => {
                bar.finish_and_clear();
                return Ok(None);
            }
            s => match s.parse::<u8>().ok().and_then(OptionKey::from_ordinal) {
                Some(key) => {
                    session.select_option(key);
                    if let Advance::Next {
                        level_up: Some(level),
                    } = session.confirm_and_advance()
                    {
                        bar.println(format!(
                            "\n  {}",
                            style(format!("★ Level {} reached", level)).green().bold()
                        ));
                    }
                }
                None => {
                    bar.println(format!(
                        "  {}",
                        style("Pick an option 1-4, b to go back, q to quit.").red()
                    ));
                }
            },
        }
        bar.set_position(session.answers().len() as u64);
    }

    bar.finish_and_clear();
    println!(
        "{} {} complete",
        style("✓").green(),
        scale.label()
    );
    Ok(Some(session.answers().to_vec()))
}

/// Post-results prompt into the booking flow.
fn offer_booking(term: &Term, report: &AssessmentReport) -> Result<()> {
    term.write_str(&format!(
        "\nBook a consultation to discuss these results? {} ",
        style("[y/N]").dim()
    ))?;
    let input = term.read_line()?;
    if matches!(input.trim().to_lowercase().as_str(), "y" | "yes") {
        book::run_interactive(term, report)?;
    }
    Ok(())
}
