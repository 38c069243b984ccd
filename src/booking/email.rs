//! Simulated email delivery
//!
//! Composes the admin and user notification emails for a completed
//! assessment and "sends" them by logging the full payload after an
//! artificial delay. There is no SMTP client here and none is planned for
//! the core; a delivery backend would consume the same [`EmailPayload`]
//! records.

use std::thread;
use std::time::Duration;

use tracing::info;

use crate::models::AssessmentReport;

use super::Booking;

/// A fully composed email, ready for a delivery backend.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EmailPayload {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

/// Compose the admin notification: complete data, every answer included.
pub fn compose_admin(
    report: &AssessmentReport,
    booking: &Booking,
    admin_email: &str,
    from: &str,
) -> EmailPayload {
    let mut body = String::new();
    body.push_str(&format!("User Name: {}\n", booking.name));
    body.push_str(&format!("User Email: {}\n", booking.email));
    if let Some(phone) = &booking.phone {
        body.push_str(&format!("User Phone: {}\n", phone));
    }
    body.push_str(&format!(
        "Assessment Date: {}\n\n",
        report.generated_at.format("%Y-%m-%d")
    ));

    push_results_summary(&mut body, report);

    if !report.answers.is_empty() {
        body.push_str("All Question Answers:\n");
        for (i, a) in report.answers.iter().enumerate() {
            body.push_str(&format!("{}. Question: {}\n", i + 1, a.question));
            body.push_str(&format!("   Answer: {}\n", a.answer));
            body.push_str(&format!("   Level: {}\n", a.level));
            body.push_str(&format!("   Category: {}\n\n", a.category));
        }
    }

    push_booking_info(&mut body, booking);

    EmailPayload {
        to: admin_email.to_string(),
        from: from.to_string(),
        subject: "New Assessment Results - Complete Data".to_string(),
        body,
    }
}

/// Compose the user's personal results email.
pub fn compose_user(report: &AssessmentReport, booking: &Booking, from: &str) -> EmailPayload {
    let mut body = String::new();
    body.push_str(&format!("Name: {}\n", booking.name));
    body.push_str(&format!(
        "Assessment Date: {}\n\n",
        report.generated_at.format("%Y-%m-%d")
    ));

    push_results_summary(&mut body, report);

    body.push_str("Recommendations:\n");
    body.push_str("- Based on your results, we recommend professional consultation\n");
    body.push_str("- Your data has been shared with our mental health team\n");
    body.push_str("- You will receive follow-up support within 24 hours\n\n");

    push_booking_info(&mut body, booking);
    body.push_str("Meeting link will be sent separately\n");

    EmailPayload {
        to: booking.email.clone(),
        from: from.to_string(),
        subject: "Your Mental Health Assessment Results".to_string(),
        body,
    }
}

fn push_results_summary(body: &mut String, report: &AssessmentReport) {
    body.push_str("Results Summary:\n");
    if let Some(dass) = &report.dass {
        for (label, score) in dass.categories() {
            body.push_str(&format!(
                "{}: {}% - {}\n",
                label, score.percentage, score.severity
            ));
        }
        body.push_str(&format!("Overall: {}\n", dass.overall_status));
    }
    if let Some(star) = &report.star {
        body.push_str(&format!(
            "Well-Being: {}% - {}\n",
            star.overall_percentage, star.overall_level
        ));
    }
    body.push('\n');
}

fn push_booking_info(body: &mut String, booking: &Booking) {
    body.push_str("Booking Information:\n");
    body.push_str(&format!("Reference: {}\n", booking.reference));
    body.push_str(&format!("Service: {}\n", booking.service.name));
    body.push_str(&format!("Date: {}\n", booking.date.format("%Y-%m-%d")));
    body.push_str(&format!("Time: {}\n\n", booking.time));
}

/// Simulated outbox: waits, then logs what would have been sent.
pub struct Outbox {
    delay: Duration,
}

impl Outbox {
    pub fn new(delay: Duration) -> Self {
        Outbox { delay }
    }

    /// "Send" the payloads. Blocks for the configured delay once, then
    /// logs each payload in full. Always succeeds - there is nothing real
    /// to fail.
    pub fn send(&self, payloads: &[EmailPayload]) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        for p in payloads {
            info!(
                to = %p.to,
                from = %p.from,
                subject = %p.subject,
                "simulated email delivery\n{}",
                p.body
            );
        }
    }
}
