use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// RabbitMQ Event envelope wrapping all domain events.
///
/// Routing key format: `rishta.{domain}.{entity}.{action}`
/// Example: `rishta.match.interest.sent`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event<T: Serialize> {
    pub id: Uuid,
    pub source: String,
    pub event_type: String,
    pub timestamp: DateTime<Utc>,
    pub correlation_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub data: T,
}

impl<T: Serialize> Event<T> {
    pub fn new(source: impl Into<String>, event_type: impl Into<String>, data: T) -> Self {
        Self {
            id: Uuid::now_v7(),
            source: source.into(),
            event_type: event_type.into(),
            timestamp: Utc::now(),
            correlation_id: None,
            user_id: None,
            data,
        }
    }

    pub fn with_user(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_correlation(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }
}

/// RabbitMQ routing keys
pub mod routing_keys {
    // Match events
    pub const MATCH_PROFILE_UPDATED: &str = "rishta.match.profile.updated";
    pub const MATCH_PREFERENCES_UPDATED: &str = "rishta.match.preferences.updated";
    pub const MATCH_INTEREST_SENT: &str = "rishta.match.interest.sent";
    pub const MATCH_INTEREST_ACCEPTED: &str = "rishta.match.interest.accepted";
    pub const MATCH_INTEREST_DECLINED: &str = "rishta.match.interest.declined";
}

/// Common event data payloads
pub mod payloads {
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ProfileUpdated {
        pub profile_id: Uuid,
        pub credential_id: Uuid,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct PreferencesUpdated {
        pub profile_id: Uuid,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct InterestSent {
        pub interest_id: Uuid,
        pub sender_id: Uuid,
        pub receiver_id: Uuid,
        pub receiver_credential_id: Uuid,
        pub sender_display_name: String,
        pub message: Option<String>,
        /// Delivery targets for the receiver, resolved by the publisher so
        /// the notification service needs no cross-service profile read.
        pub receiver_email: Option<String>,
        pub receiver_phone: Option<String>,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct InterestAccepted {
        pub interest_id: Uuid,
        pub sender_id: Uuid,
        pub receiver_id: Uuid,
        pub sender_credential_id: Uuid,
        pub accepter_display_name: String,
        pub mutual: bool,
        pub sender_email: Option<String>,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct InterestDeclined {
        pub interest_id: Uuid,
        pub sender_id: Uuid,
        pub receiver_id: Uuid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_round_trip() {
        let event = Event::new(
            "rishta-match",
            routing_keys::MATCH_INTEREST_DECLINED,
            payloads::InterestDeclined {
                interest_id: Uuid::nil(),
                sender_id: Uuid::nil(),
                receiver_id: Uuid::nil(),
            },
        )
        .with_user(Uuid::nil());

        let json = serde_json::to_string(&event).unwrap();
        let parsed: Event<payloads::InterestDeclined> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.event_type, routing_keys::MATCH_INTEREST_DECLINED);
        assert_eq!(parsed.user_id, Some(Uuid::nil()));
    }
}
