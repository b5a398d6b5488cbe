//! Example request bodies shown for webhook events.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::error::CoreResult;
use crate::types::WebhookEvent;

/// Example payload for `event`, stamped with the current time.
pub fn example_payload(event: WebhookEvent) -> CoreResult<String> {
    render_with(event, Utc::now())
}

/// Pretty-printed example payload stamped with `now`.
pub fn render_with(event: WebhookEvent, now: DateTime<Utc>) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(&payload_value(event, now))?)
}

/// Example payload as a JSON value.
#[must_use]
pub fn payload_value(event: WebhookEvent, now: DateTime<Utc>) -> Value {
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let data = match event {
        WebhookEvent::StudentCreated => json!({
            "id": 123,
            "firstName": "John",
            "lastName": "Smith",
            "email": "john.smith@example.com",
            "status": "active",
            "createdAt": timestamp,
        }),
        WebhookEvent::ApplicationSubmitted => json!({
            "id": 456,
            "studentId": 123,
            "universityId": 45,
            "programId": 67,
            "status": "submitted",
            "submittedAt": timestamp,
        }),
        WebhookEvent::PaymentReceived => json!({
            "id": 789,
            "studentId": 123,
            "amount": 1500.00,
            "currency": "USD",
            "paymentMethod": "credit_card",
            "status": "completed",
            "receivedAt": timestamp,
        }),
        other => json!({
            "id": 123,
            "details": format!("Example payload for {} event", other.as_str()),
        }),
    };
    json!({
        "event": event.as_str(),
        "timestamp": timestamp,
        "data": data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::datetime::ts;

    #[test]
    fn student_created_payload() {
        let now = ts("2023-05-02T14:20:00Z");
        let body = render_with(WebhookEvent::StudentCreated, now).unwrap();
        let value: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(value["event"], "student.created");
        assert_eq!(value["timestamp"], "2023-05-02T14:20:00.000Z");
        assert_eq!(value["data"]["firstName"], "John");
        assert_eq!(value["data"]["createdAt"], value["timestamp"]);
    }

    #[test]
    fn payment_amount_is_numeric() {
        let value = payload_value(WebhookEvent::PaymentReceived, Utc::now());
        assert_eq!(value["data"]["amount"].as_f64(), Some(1500.0));
        assert_eq!(value["data"]["currency"], "USD");
    }

    #[test]
    fn application_submitted_payload() {
        let value = payload_value(WebhookEvent::ApplicationSubmitted, Utc::now());
        assert_eq!(value["data"]["universityId"], 45);
        assert_eq!(value["data"]["status"], "submitted");
    }

    #[test]
    fn every_event_renders_valid_json() {
        let now = Utc::now();
        for event in WebhookEvent::ALL {
            let body = render_with(*event, now).unwrap();
            let value: Value = serde_json::from_str(&body).unwrap();
            assert_eq!(value["event"], event.as_str());
            assert!(value["timestamp"].is_string());
        }
    }

    #[test]
    fn fallback_mentions_event() {
        let value = payload_value(WebhookEvent::OfferDeclined, Utc::now());
        assert_eq!(value["data"]["details"], "Example payload for offer.declined event");
    }
}
