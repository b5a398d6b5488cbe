//! Webhook type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ActiveStatus, EntityId};

/// Group an event belongs to in the event picker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Students,
    Applications,
    Admissions,
    Payments,
    Documents,
}

impl EventCategory {
    pub const ALL: [Self; 5] = [
        Self::Students,
        Self::Applications,
        Self::Admissions,
        Self::Payments,
        Self::Documents,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Students => "Students",
            Self::Applications => "Applications",
            Self::Admissions => "Admissions",
            Self::Payments => "Payments",
            Self::Documents => "Documents",
        }
    }
}

macro_rules! webhook_events {
    ($( $variant:ident => $wire:literal, $label:literal, $category:ident; )+) => {
        /// Event a webhook can subscribe to.
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub enum WebhookEvent {
            $( #[serde(rename = $wire)] $variant, )+
        }

        impl WebhookEvent {
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Dotted wire name, e.g. `student.created`.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self { $( Self::$variant => $wire, )+ }
            }

            #[must_use]
            pub fn label(self) -> &'static str {
                match self { $( Self::$variant => $label, )+ }
            }

            #[must_use]
            pub fn category(self) -> EventCategory {
                match self { $( Self::$variant => EventCategory::$category, )+ }
            }

            /// Looks up an event by its wire name.
            #[must_use]
            pub fn parse(name: &str) -> Option<Self> {
                match name {
                    $( $wire => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

webhook_events! {
    StudentCreated => "student.created", "Student Created", Students;
    StudentUpdated => "student.updated", "Student Updated", Students;
    StudentDeleted => "student.deleted", "Student Deleted", Students;
    StudentStatusChanged => "student.status_changed", "Student Status Changed", Students;
    ApplicationSubmitted => "application.submitted", "Application Submitted", Applications;
    ApplicationUpdated => "application.updated", "Application Updated", Applications;
    ApplicationStatusChanged => "application.status_changed", "Application Status Changed", Applications;
    ApplicationDocumentUploaded => "application.document_uploaded", "Application Document Uploaded", Applications;
    AdmissionDecision => "admission.decision", "Admission Decision Made", Admissions;
    OfferSent => "offer.sent", "Offer Letter Sent", Admissions;
    OfferAccepted => "offer.accepted", "Offer Accepted", Admissions;
    OfferDeclined => "offer.declined", "Offer Declined", Admissions;
    PaymentReceived => "payment.received", "Payment Received", Payments;
    PaymentFailed => "payment.failed", "Payment Failed", Payments;
    PaymentRefunded => "payment.refunded", "Payment Refunded", Payments;
    DocumentUploaded => "document.uploaded", "Document Uploaded", Documents;
    DocumentVerified => "document.verified", "Document Verified", Documents;
    DocumentRejected => "document.rejected", "Document Rejected", Documents;
}

/// Outcome of the most recent delivery attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryResponse {
    #[serde(rename = "status")]
    pub status_code: u16,
    pub message: String,
}

impl DeliveryResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Webhook endpoint registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Webhook {
    pub id: EntityId,
    pub name: String,
    pub url: String,
    /// Optional signing secret
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    pub events: Vec<WebhookEvent>,
    pub status: ActiveStatus,
    #[serde(rename = "createdAt", with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "lastTriggered", with = "crate::utils::datetime::option")]
    pub last_triggered: Option<DateTime<Utc>>,
    #[serde(rename = "lastResponse", skip_serializing_if = "Option::is_none")]
    pub last_response: Option<DeliveryResponse>,
}

impl Webhook {
    #[must_use]
    pub fn subscribes_to(&self, category: EventCategory) -> bool {
        self.events.iter().any(|e| e.category() == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighteen_events_in_five_categories() {
        assert_eq!(WebhookEvent::ALL.len(), 18);
        for category in EventCategory::ALL {
            assert!(WebhookEvent::ALL.iter().any(|e| e.category() == category));
        }
    }

    #[test]
    fn wire_name_matches_serde() {
        for event in WebhookEvent::ALL {
            let json = serde_json::to_string(event).unwrap();
            assert_eq!(json, format!("\"{}\"", event.as_str()));
            assert_eq!(WebhookEvent::parse(event.as_str()), Some(*event));
        }
        assert_eq!(WebhookEvent::parse("student.exploded"), None);
    }

    #[test]
    fn labels() {
        assert_eq!(WebhookEvent::AdmissionDecision.label(), "Admission Decision Made");
        assert_eq!(WebhookEvent::OfferSent.label(), "Offer Letter Sent");
    }
}
