//! Event creation payload and its validation.

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use eventhub_core::error::FieldViolation;
use eventhub_entity::event::{EventType, SCHEDULE_FORMAT};

/// Prefix every event image must carry.
const IMAGE_PREFIX: &str = "data:image";

/// Payload for creating an event.
///
/// Missing fields decode as empty and are reported by validation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateEventRequest {
    /// Event title.
    #[serde(default, rename = "eventTitle")]
    #[validate(length(min = 1, message = "Event title is required"))]
    pub title: String,
    /// Venue.
    #[serde(default, rename = "eventVenue")]
    #[validate(length(min = 1, message = "Event venue is required"))]
    pub venue: String,
    /// Start time, `HH:MM`.
    #[serde(default, rename = "startTime")]
    #[validate(length(min = 1, message = "Start time is required"))]
    pub start_time: String,
    /// End time, `HH:MM`.
    #[serde(default, rename = "endTime")]
    #[validate(length(min = 1, message = "End time is required"))]
    pub end_time: String,
    /// Start date, `YYYY-MM-DD`.
    #[serde(default, rename = "startDate")]
    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date: String,
    /// End date, `YYYY-MM-DD`.
    #[serde(default, rename = "endDate")]
    #[validate(length(min = 1, message = "End date is required"))]
    pub end_date: String,
    /// Cost as a number or numeric string; required for paid events.
    #[serde(default, rename = "eventCost")]
    pub cost: Option<Value>,
    /// Description.
    #[serde(default, rename = "eventDescription")]
    #[validate(length(min = 1, message = "Event description is required"))]
    pub description: String,
    /// Base64 image data URI.
    #[serde(default, rename = "eventImage")]
    #[validate(length(min = 1, message = "Event image is required"))]
    pub image: String,
    /// `FREE` or `PAID`, case-insensitive.
    #[serde(default = "default_event_type", rename = "type")]
    pub event_type: String,
}

/// A creation payload that passed every rule.
#[derive(Debug, Clone)]
pub(crate) struct CheckedEvent {
    pub title: String,
    pub venue: String,
    pub description: String,
    pub image: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub event_type: EventType,
    pub cost: f64,
}

impl CreateEventRequest {
    /// Trim free-text fields the way they are stored.
    fn trimmed(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.venue = self.venue.trim().to_string();
        self.description = self.description.trim().to_string();
        self
    }

    /// Validate every rule, collecting all violations.
    pub(crate) fn check(self) -> Result<CheckedEvent, Vec<FieldViolation>> {
        let req = self.trimmed();
        let mut violations = match req.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => FieldViolation::from_errors(&errors),
        };

        if !req.image.is_empty() && !req.image.starts_with(IMAGE_PREFIX) {
            violations.push(FieldViolation::new(
                "eventImage",
                "Invalid image format. Must be base64 encoded.",
            ));
        }

        let event_type = req
            .event_type
            .parse::<EventType>()
            .map_err(|e| violations.push(FieldViolation::new("type", e.message)))
            .ok();

        let cost = match event_type {
            Some(EventType::Paid) => match parse_cost(req.cost.as_ref()) {
                Ok(cost) => Some(cost),
                Err(message) => {
                    violations.push(FieldViolation::new("eventCost", message));
                    None
                }
            },
            _ => Some(0.0),
        };

        let window = schedule(&req).map_err(|message| {
            if let Some(message) = message {
                violations.push(FieldViolation::new("schedule", message));
            }
        });

        match (violations.is_empty(), event_type, cost, window) {
            (true, Some(event_type), Some(cost), Ok((starts_at, ends_at))) => Ok(CheckedEvent {
                title: req.title,
                venue: req.venue,
                description: req.description,
                image: req.image,
                starts_at,
                ends_at,
                event_type,
                cost,
            }),
            _ => Err(violations),
        }
    }
}

/// Parse start and end; `Err(None)` when a part is missing (already reported).
fn schedule(
    req: &CreateEventRequest,
) -> Result<(NaiveDateTime, NaiveDateTime), Option<&'static str>> {
    let parts = [&req.start_date, &req.start_time, &req.end_date, &req.end_time];
    if parts.iter().any(|p| p.is_empty()) {
        return Err(None);
    }

    let parse = |date: &str, time: &str| {
        NaiveDateTime::parse_from_str(&format!("{date} {time}"), SCHEDULE_FORMAT)
            .map_err(|_| Some("Invalid date or time format"))
    };
    let starts_at = parse(&req.start_date, &req.start_time)?;
    let ends_at = parse(&req.end_date, &req.end_time)?;

    if ends_at <= starts_at {
        return Err(Some("End date and time must be after start date and time"));
    }
    Ok((starts_at, ends_at))
}

fn parse_cost(raw: Option<&Value>) -> Result<f64, &'static str> {
    let cost = match raw {
        None | Some(Value::Null) => return Err("Event cost is required for paid events"),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    }
    .filter(|c| c.is_finite())
    .ok_or("Invalid cost format")?;

    if cost < 0.0 {
        return Err("Event cost cannot be negative");
    }
    Ok(cost)
}

fn default_event_type() -> String {
    EventType::Free.as_str().to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid() -> CreateEventRequest {
        serde_json::from_value(json!({
            "eventTitle": "  Rust Meetup ",
            "eventVenue": "Hall A",
            "startDate": "2030-05-01",
            "startTime": "18:00",
            "endDate": "2030-05-01",
            "endTime": "21:00",
            "eventDescription": "Talks and pizza",
            "eventImage": "data:image/png;base64,AAAA",
        }))
        .unwrap()
    }

    fn fields(violations: &[FieldViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn test_valid_free_event() {
        let checked = valid().check().unwrap();
        assert_eq!(checked.title, "Rust Meetup");
        assert_eq!(checked.event_type, EventType::Free);
        assert_eq!(checked.cost, 0.0);
    }

    #[test]
    fn test_free_event_ignores_submitted_cost() {
        let mut req = valid();
        req.cost = Some(json!(25));
        assert_eq!(req.check().unwrap().cost, 0.0);
    }

    #[test]
    fn test_paid_event_cost_rules() {
        let mut req = valid();
        req.event_type = "paid".into();
        req.cost = Some(json!("12.5"));
        let checked = req.clone().check().unwrap();
        assert_eq!(checked.event_type, EventType::Paid);
        assert_eq!(checked.cost, 12.5);

        req.cost = None;
        assert_eq!(fields(&req.clone().check().unwrap_err()), ["eventCost"]);

        req.cost = Some(json!(-1));
        let err = req.clone().check().unwrap_err();
        assert_eq!(err[0].message, "Event cost cannot be negative");

        req.cost = Some(json!("abc"));
        let err = req.check().unwrap_err();
        assert_eq!(err[0].message, "Invalid cost format");
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut req = valid();
        req.end_time = "17:00".into();
        let err = req.check().unwrap_err();
        assert_eq!(
            err[0].message,
            "End date and time must be after start date and time"
        );
    }

    #[test]
    fn test_bad_date_format() {
        let mut req = valid();
        req.start_date = "01/05/2030".into();
        let err = req.check().unwrap_err();
        assert_eq!(err[0].message, "Invalid date or time format");
    }

    #[test]
    fn test_bad_image_and_type() {
        let mut req = valid();
        req.image = "https://example.com/a.png".into();
        req.event_type = "DONATION".into();
        let err = req.check().unwrap_err();
        assert_eq!(fields(&err), ["eventImage", "type"]);
    }

    #[test]
    fn test_empty_payload_reports_everything() {
        let req: CreateEventRequest = serde_json::from_value(json!({})).unwrap();
        let err = req.check().unwrap_err();
        assert_eq!(err.len(), 8);
        assert!(err.iter().any(|v| v.message == "Event title is required"));
        assert!(err.iter().any(|v| v.message == "Event image is required"));
    }

    #[test]
    fn test_blank_title_counts_as_missing() {
        let mut req = valid();
        req.title = "   ".into();
        let err = req.check().unwrap_err();
        assert_eq!(err[0].message, "Event title is required");
    }
}
