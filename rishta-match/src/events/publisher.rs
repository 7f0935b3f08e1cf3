use uuid::Uuid;

use rishta_shared::clients::rabbitmq::RabbitMQClient;
use rishta_shared::types::event::{payloads, routing_keys, Event};

use crate::models::Profile;

pub async fn publish_profile_updated(rabbitmq: &RabbitMQClient, profile_id: Uuid, credential_id: Uuid) {
    let event = Event::new(
        "rishta-match",
        routing_keys::MATCH_PROFILE_UPDATED,
        payloads::ProfileUpdated {
            profile_id,
            credential_id,
        },
    )
    .with_user(credential_id);

    if let Err(e) = rabbitmq.publish(routing_keys::MATCH_PROFILE_UPDATED, &event).await {
        tracing::error!(error = %e, "failed to publish profile.updated event");
    }
}

pub async fn publish_preferences_updated(rabbitmq: &RabbitMQClient, profile_id: Uuid) {
    let event = Event::new(
        "rishta-match",
        routing_keys::MATCH_PREFERENCES_UPDATED,
        payloads::PreferencesUpdated { profile_id },
    );

    if let Err(e) = rabbitmq.publish(routing_keys::MATCH_PREFERENCES_UPDATED, &event).await {
        tracing::error!(error = %e, "failed to publish preferences.updated event");
    }
}

pub async fn publish_interest_sent(
    rabbitmq: &RabbitMQClient,
    interest_id: Uuid,
    sender: &Profile,
    receiver: &Profile,
    message: Option<String>,
) {
    let display_name = sender.display_name.as_deref().unwrap_or("A member");
    let event = Event::new(
        "rishta-match",
        routing_keys::MATCH_INTEREST_SENT,
        payloads::InterestSent {
            interest_id,
            sender_id: sender.id,
            receiver_id: receiver.id,
            receiver_credential_id: receiver.credential_id,
            sender_display_name: display_name.to_string(),
            message,
            receiver_email: receiver.contact_email.clone(),
            receiver_phone: receiver.contact_phone.clone(),
        },
    )
    .with_user(sender.credential_id);

    if let Err(e) = rabbitmq.publish(routing_keys::MATCH_INTEREST_SENT, &event).await {
        tracing::error!(error = %e, "failed to publish interest.sent event");
    }
}

pub async fn publish_interest_accepted(
    rabbitmq: &RabbitMQClient,
    interest_id: Uuid,
    sender: &Profile,
    accepter: &Profile,
    mutual: bool,
) {
    let display_name = accepter.display_name.as_deref().unwrap_or("A member");
    let event = Event::new(
        "rishta-match",
        routing_keys::MATCH_INTEREST_ACCEPTED,
        payloads::InterestAccepted {
            interest_id,
            sender_id: sender.id,
            receiver_id: accepter.id,
            sender_credential_id: sender.credential_id,
            accepter_display_name: display_name.to_string(),
            mutual,
            sender_email: sender.contact_email.clone(),
        },
    )
    .with_user(accepter.credential_id);

    if let Err(e) = rabbitmq.publish(routing_keys::MATCH_INTEREST_ACCEPTED, &event).await {
        tracing::error!(error = %e, "failed to publish interest.accepted event");
    }
}

pub async fn publish_interest_declined(
    rabbitmq: &RabbitMQClient,
    interest_id: Uuid,
    sender_id: Uuid,
    receiver_id: Uuid,
) {
    let event = Event::new(
        "rishta-match",
        routing_keys::MATCH_INTEREST_DECLINED,
        payloads::InterestDeclined {
            interest_id,
            sender_id,
            receiver_id,
        },
    );

    if let Err(e) = rabbitmq.publish(routing_keys::MATCH_INTEREST_DECLINED, &event).await {
        tracing::error!(error = %e, "failed to publish interest.declined event");
    }
}
