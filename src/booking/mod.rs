//! Consultation booking
//!
//! The follow-up flow offered after an assessment: pick a service, pick a
//! date and time slot, leave contact details. Validation is the only
//! fallible surface in this crate's core-adjacent code; everything else is
//! fail-soft. Confirmed bookings are handed to the simulated email outbox
//! together with a read-only copy of the assessment report.

pub mod email;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// How a consultation call is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallKind {
    Zoom,
    Voice,
}

/// A bookable consultation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: CallKind,
    pub duration: &'static str,
    pub description: &'static str,
}

static SERVICES: [Service; 2] = [
    Service {
        id: "zoom-assessment",
        name: "Zoom Call Assessment",
        kind: CallKind::Zoom,
        duration: "1 hr",
        description: "Professional mental wellness assessment via Zoom video call",
    },
    Service {
        id: "voice-assessment",
        name: "Voice Call Assessment",
        kind: CallKind::Voice,
        duration: "1 hr",
        description: "Professional mental wellness assessment via voice call",
    },
];

/// The bookable services.
pub fn services() -> &'static [Service] {
    &SERVICES
}

/// Find a service by its id.
pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

/// Bookable slots, one-hour grid.
pub const TIME_SLOTS: [&str; 10] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "01:00 PM", "02:00 PM", "03:00 PM", "04:00 PM",
    "05:00 PM", "06:00 PM",
];

/// Unvalidated booking input, as collected from a form or CLI flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub service_id: String,
    pub date: String,
    pub time: String,
}

/// Booking validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("a contact name is required")]
    MissingName,
    #[error("a contact email is required")]
    MissingEmail,
    #[error("'{0}' does not look like an email address")]
    InvalidEmail(String),
    #[error("unknown service '{0}'; valid services: zoom-assessment, voice-assessment")]
    UnknownService(String),
    #[error("invalid date '{0}'; expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("date {0} is in the past")]
    DateInPast(NaiveDate),
    #[error("'{0}' is not an available time slot")]
    UnknownTimeSlot(String),
}

/// A validated, confirmed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    /// Confirmation reference shown to the user.
    pub reference: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: &'static Service,
    pub date: NaiveDate,
    pub time: String,
}

impl BookingRequest {
    /// Validate against the service and slot tables. `today` is passed in
    /// so callers (and tests) control the clock.
    pub fn confirm(self, today: NaiveDate) -> Result<Booking, BookingError> {
        if self.name.trim().is_empty() {
            return Err(BookingError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(BookingError::MissingEmail);
        }
        if !self.email.contains('@') {
            return Err(BookingError::InvalidEmail(self.email));
        }

        let service = find_service(&self.service_id)
            .ok_or_else(|| BookingError::UnknownService(self.service_id.clone()))?;

        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| BookingError::InvalidDate(self.date.clone()))?;
        if date < today {
            return Err(BookingError::DateInPast(date));
        }

        if !TIME_SLOTS.contains(&self.time.as_str()) {
            return Err(BookingError::UnknownTimeSlot(self.time));
        }

        Ok(Booking {
            reference: Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.filter(|p| !p.trim().is_empty()),
            service,
            date,
            time: self.time,
        })
    }
}
