//! CLI command definitions and handlers

mod assess;
mod book;
mod init;
mod questions;
mod score;
mod tui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::Scale;

/// Which questionnaires an assessment run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScaleSelection {
    Dass,
    Star,
    Full,
}

impl ScaleSelection {
    fn parse(s: &str) -> Self {
        match s {
            "dass" => ScaleSelection::Dass,
            "star" => ScaleSelection::Star,
            _ => ScaleSelection::Full,
        }
    }

    fn scales(self) -> &'static [Scale] {
        match self {
            ScaleSelection::Dass => &[Scale::Dass],
            ScaleSelection::Star => &[Scale::Star],
            ScaleSelection::Full => &[Scale::Dass, Scale::Star],
        }
    }
}

/// Mindgauge - terminal mental-wellness self-assessment
///
/// 100% LOCAL - Nothing is sent anywhere. No account, no network.
#[derive(Parser, Debug)]
#[command(name = "mindgauge")]
#[command(
    version,
    about = "Mental-wellness self-assessment — DASS-21 clinical screening and STAR well-being scoring in your terminal",
    long_about = "Mindgauge walks you through the DASS-21 (Depression, Anxiety and Stress Scale) \
and the STAR of Well-Being questionnaire, scores your answers against the published \
rubrics, and renders severity bands and well-being levels.\n\n\
100% LOCAL — answers live in memory for the run and are gone afterwards unless \
you export them yourself.\n\n\
Run without a subcommand to start a full assessment:\n  \
mindgauge",
    after_help = "\
Examples:
  mindgauge                                Take the full assessment (DASS-21 + STAR)
  mindgauge assess --scale dass            DASS-21 only
  mindgauge assess --format json -o r.json Machine-readable results
  mindgauge tui                            Full-screen assessment
  mindgauge questions --scale star         Print the STAR catalog
  mindgauge score answers.json             Score a recorded answer file
  mindgauge book                           Book a follow-up consultation

These results are a self-screening aid, not a diagnosis."
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Take an assessment interactively in the terminal
    #[command(after_help = "\
Examples:
  mindgauge assess                         Full assessment, text results
  mindgauge assess --scale star            STAR of Well-Being only
  mindgauge assess --format markdown -o report.md
  mindgauge assess --format json           JSON results (includes every answer)")]
    Assess {
        /// Scales to run: dass, star, full
        #[arg(long, default_value = "full", value_parser = ["dass", "star", "full"])]
        scale: String,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Take an assessment in a full-screen terminal UI
    Tui {
        /// Scales to run: dass, star, full
        #[arg(long, default_value = "full", value_parser = ["dass", "star", "full"])]
        scale: String,
    },

    /// Print a question catalog
    Questions {
        /// Catalog to print: dass, star
        #[arg(long, default_value = "dass", value_parser = ["dass", "star"])]
        scale: String,

        /// Only questions at this progression level
        #[arg(long)]
        level: Option<u32>,

        /// JSON output
        #[arg(long)]
        json: bool,
    },

    /// Score a recorded answers file without the interactive flow
    #[command(after_help = "\
The file is a JSON array of answers:
  [{\"question_id\": 1, \"selected\": \"often\", \"score\": 2}, ...]

DASS and STAR question ids are disjoint, so one file can carry both scales.

Examples:
  mindgauge score answers.json
  mindgauge score answers.json --format json -o report.json")]
    Score {
        /// Path to the answers JSON file
        answers: PathBuf,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Book a consultation and send the results (simulated delivery)
    #[command(after_help = "\
Without flags this walks through service, date, time, and contact details
interactively. With all flags present it books in one shot.

Examples:
  mindgauge book
  mindgauge book --name \"Ada Lovelace\" --email ada@example.com \\
      --service zoom-assessment --date 2026-09-01 --time \"10:00 AM\" \\
      --answers answers.json")]
    Book {
        /// Contact name
        #[arg(long)]
        name: Option<String>,

        /// Contact email (receives the personal results email)
        #[arg(long)]
        email: Option<String>,

        /// Contact phone (optional)
        #[arg(long)]
        phone: Option<String>,

        /// Service id: zoom-assessment, voice-assessment
        #[arg(long, value_parser = ["zoom-assessment", "voice-assessment"])]
        service: Option<String>,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Time slot, e.g. "10:00 AM"
        #[arg(long)]
        time: Option<String>,

        /// Recorded answers file to score and attach to the emails
        #[arg(long)]
        answers: Option<PathBuf>,
    },

    /// Create the user config file with example settings
    Init,
}

/// Dispatch a parsed CLI invocation.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => assess::run(ScaleSelection::Full, "text", None),
        Some(Commands::Assess {
            scale,
            format,
            output,
        }) => assess::run(ScaleSelection::parse(&scale), &format, output.as_deref()),
        Some(Commands::Tui { scale }) => tui::run(ScaleSelection::parse(&scale)),
        Some(Commands::Questions { scale, level, json }) => {
            let scale: Scale = scale.parse().map_err(anyhow::Error::msg)?;
            questions::run(scale, level, json)
        }
        Some(Commands::Score {
            answers,
            format,
            output,
        }) => score::run(&answers, &format, output.as_deref()),
        Some(Commands::Book {
            name,
            email,
            phone,
            service,
            date,
            time,
            answers,
        }) => book::run(book::BookArgs {
            name,
            email,
            phone,
            service,
            date,
            time,
            answers,
        }),
        Some(Commands::Init) => init::run(),
    }
}
