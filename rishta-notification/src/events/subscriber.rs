use std::sync::Arc;

use futures_lite::StreamExt;
use lapin::options::BasicAckOptions;

use rishta_shared::types::event::{payloads, routing_keys, Event};

use crate::services::notification_service;
use crate::AppState;

/// Listen for interest events (interest.sent, interest.accepted).
///
/// Delivery is best-effort throughout: the interest transition has already
/// committed in the match service, so a failed insert, email, or SMS here is
/// logged and the delivery dropped, never retried into the hot path.
pub async fn listen_interest_events(state: Arc<AppState>) -> anyhow::Result<()> {
    let mut consumer = state.rabbitmq.subscribe(
        "rishta-notification.interest",
        &[
            routing_keys::MATCH_INTEREST_SENT,
            routing_keys::MATCH_INTEREST_ACCEPTED,
        ],
    ).await?;

    tracing::info!("listening for interest events");

    while let Some(delivery) = consumer.next().await {
        match delivery {
            Ok(delivery) => {
                let routing_key = delivery.routing_key.to_string();

                if routing_key == routing_keys::MATCH_INTEREST_SENT {
                    match serde_json::from_slice::<Event<payloads::InterestSent>>(&delivery.data) {
                        Ok(event) => handle_interest_sent(&state, &event.data).await,
                        Err(e) => {
                            tracing::error!(error = %e, "failed to deserialize interest.sent event");
                        }
                    }
                } else if routing_key == routing_keys::MATCH_INTEREST_ACCEPTED {
                    match serde_json::from_slice::<Event<payloads::InterestAccepted>>(&delivery.data) {
                        Ok(event) => handle_interest_accepted(&state, &event.data).await,
                        Err(e) => {
                            tracing::error!(error = %e, "failed to deserialize interest.accepted event");
                        }
                    }
                }

                let _ = delivery.ack(BasicAckOptions::default()).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "interest consumer error");
            }
        }
    }

    Ok(())
}

async fn handle_interest_sent(state: &AppState, data: &payloads::InterestSent) {
    tracing::info!(
        interest_id = %data.interest_id,
        sender_id = %data.sender_id,
        receiver_id = %data.receiver_id,
        "received interest.sent event"
    );

    if let Err(e) = notification_service::create_notification(
        &state.db,
        data.receiver_credential_id,
        "interest_received",
        "New interest received",
        &format!("{} has expressed interest in your profile", data.sender_display_name),
        Some(serde_json::json!({
            "interest_id": data.interest_id,
            "sender_id": data.sender_id,
            "sender_display_name": data.sender_display_name,
            "message": data.message,
        })),
    ) {
        tracing::error!(error = %e, "failed to create interest_received notification");
    }

    if let Some(email) = &data.receiver_email {
        if let Err(e) = state.email.send_interest_received(email, &data.sender_display_name).await {
            tracing::warn!(error = %e, "interest_received email delivery failed");
        }
    }

    if let Some(phone) = &data.receiver_phone {
        let body = format!(
            "Rishta: {} has expressed interest in your profile. Sign in to respond.",
            data.sender_display_name
        );
        if let Err(e) = state.sms.send_sms(phone, &body).await {
            tracing::warn!(error = %e, "interest_received sms delivery failed");
        }
    }
}

async fn handle_interest_accepted(state: &AppState, data: &payloads::InterestAccepted) {
    tracing::info!(
        interest_id = %data.interest_id,
        sender_id = %data.sender_id,
        receiver_id = %data.receiver_id,
        mutual = data.mutual,
        "received interest.accepted event"
    );

    let body = if data.mutual {
        format!("You and {} are now a mutual match", data.accepter_display_name)
    } else {
        format!("{} accepted your interest", data.accepter_display_name)
    };

    if let Err(e) = notification_service::create_notification(
        &state.db,
        data.sender_credential_id,
        "interest_accepted",
        "Interest accepted",
        &body,
        Some(serde_json::json!({
            "interest_id": data.interest_id,
            "receiver_id": data.receiver_id,
            "accepter_display_name": data.accepter_display_name,
            "mutual": data.mutual,
        })),
    ) {
        tracing::error!(error = %e, "failed to create interest_accepted notification");
    }

    if let Some(email) = &data.sender_email {
        if let Err(e) = state
            .email
            .send_interest_accepted(email, &data.accepter_display_name, data.mutual)
            .await
        {
            tracing::warn!(error = %e, "interest_accepted email delivery failed");
        }
    }
}
