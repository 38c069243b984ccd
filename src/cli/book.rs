//! Book command - consultation booking and simulated result delivery
//!
//! Mirrors the three-step booking flow of the results screen: pick a
//! service, pick a slot, leave contact details. Confirmation composes the
//! admin and user emails and hands them to the simulated outbox.

use anyhow::{Context, Result};
use chrono::Local;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::booking::email::{compose_admin, compose_user, Outbox};
use crate::booking::{self, BookingRequest};
use crate::config::UserConfig;
use crate::models::{AssessmentReport, UserAnswer};

use super::score;

#[derive(Debug, Default)]
pub(crate) struct BookArgs {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub answers: Option<PathBuf>,
}

pub(crate) fn run(args: BookArgs) -> Result<()> {
    let term = Term::stdout();

    let report = match &args.answers {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read answers file: {}", path.display()))?;
            let answers: Vec<UserAnswer> =
                serde_json::from_str(&content).context("Failed to parse answers file")?;
            score::score_answers(&answers)
        }
        None => AssessmentReport::new(None, None),
    };

    // Fully flag-driven invocations skip the prompts
    if let (Some(name), Some(email), Some(service), Some(date), Some(time)) = (
        args.name.clone(),
        args.email.clone(),
        args.service.clone(),
        args.date.clone(),
        args.time.clone(),
    ) {
        let request = BookingRequest {
            name,
            email,
            phone: args.phone,
            service_id: service,
            date,
            time,
        };
        return complete_booking(request, &report);
    }

    run_interactive(&term, &report)
}

/// Walk through service, date, time, and contact details.
pub(crate) fn run_interactive(term: &Term, report: &AssessmentReport) -> Result<()> {
    println!("\n{}\n", style("Book a Consultation").bold());

    // Step 1: service
    let services = booking::services();
    for (i, service) in services.iter().enumerate() {
        println!(
            "  {}. {} {}",
            style(i + 1).yellow(),
            style(service.name).bold(),
            style(format!("({})", service.duration)).dim()
        );
        println!("     {}", style(service.description).dim());
    }
    let service = services[prompt_choice(term, "Service", services.len())? - 1];

    // Step 2: date
    let date = loop {
        let input = prompt(term, "Date (YYYY-MM-DD)")?;
        match chrono::NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
            Ok(_) => break input.trim().to_string(),
            Err(_) => println!("  {}", style("Use YYYY-MM-DD, e.g. 2026-09-01").red()),
        }
    };

    // Step 3: time slot
    for (i, slot) in booking::TIME_SLOTS.iter().enumerate() {
        println!("  {:>2}. {}", style(i + 1).yellow(), slot);
    }
    let time = booking::TIME_SLOTS[prompt_choice(term, "Time slot", booking::TIME_SLOTS.len())? - 1];

    // Step 4: contact details
    let name = prompt(term, "Your name")?;
    let email = prompt(term, "Your email")?;
    let phone = prompt(term, "Phone (optional)")?;

    let request = BookingRequest {
        name,
        email,
        phone: (!phone.trim().is_empty()).then(|| phone.trim().to_string()),
        service_id: service.id.to_string(),
        date,
        time: time.to_string(),
    };
    complete_booking(request, report)
}

fn complete_booking(request: BookingRequest, report: &AssessmentReport) -> Result<()> {
    let config = UserConfig::load()?;
    let booking = request
        .confirm(Local::now().date_naive())
        .context("Booking was not confirmed")?;

    println!("\n{} Booking confirmed", style("✓").green().bold());
    println!("  Reference: {}", style(&booking.reference).cyan());
    println!(
        "  {} on {} at {}",
        booking.service.name,
        booking.date.format("%Y-%m-%d"),
        booking.time
    );

    let payloads = vec![
        compose_admin(
            report,
            &booking,
            config.admin_email(),
            config.from_address(),
        ),
        compose_user(report, &booking, config.from_address()),
    ];

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("static spinner template"),
    );
    spinner.set_message("Sending results...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    Outbox::new(config.delivery_delay()).send(&payloads);

    spinner.finish_and_clear();
    println!(
        "{} Results prepared for {} and {}",
        style("✓").green(),
        style(config.admin_email()).cyan(),
        style(&booking.email).cyan()
    );
    println!(
        "{}",
        style("Delivery is simulated; run with --log-level info to see the full payloads.").dim()
    );
    Ok(())
}

fn prompt(term: &Term, label: &str) -> Result<String> {
    term.write_str(&format!("{}: ", label))?;
    Ok(term.read_line()?)
}

fn prompt_choice(term: &Term, label: &str, n: usize) -> Result<usize> {
    loop {
        let input = prompt(term, &format!("{} [1-{}]", label, n))?;
        match input.trim().parse::<usize>() {
            Ok(choice) if (1..=n).contains(&choice) => return Ok(choice),
            _ => println!("  {}", style(format!("Pick a number 1-{}", n)).red()),
        }
    }
}
