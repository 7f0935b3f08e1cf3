use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use rishta_shared::errors::{AppError, AppResult};
use rishta_shared::types::auth::ActingUser;
use rishta_shared::types::ApiResponse;

use crate::domain::{InterestStatus, RespondAction};
use crate::events::publisher;
use crate::models::{ContactCard, Interest, Profile};
use crate::services::interest_service;
use crate::AppState;

// --- POST /interests ---

#[derive(Debug, Deserialize, Validate)]
pub struct ExpressInterestRequest {
    pub receiver_id: Uuid,
    #[validate(length(max = 500, message = "message must be at most 500 characters"))]
    pub message: Option<String>,
}

pub async fn express_interest(
    acting: ActingUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExpressInterestRequest>,
) -> AppResult<Json<ApiResponse<Interest>>> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let outcome = interest_service::express_interest(
        &state.db,
        acting.id,
        req.receiver_id,
        req.message.clone(),
    )?;

    publisher::publish_interest_sent(
        &state.rabbitmq,
        outcome.interest.id,
        &outcome.sender,
        &outcome.receiver,
        req.message,
    )
    .await;

    Ok(Json(ApiResponse::ok(outcome.interest)))
}

// --- PUT /interests/:id/respond ---

#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub action: RespondAction,
}

#[derive(Debug, Serialize)]
pub struct RespondResponse {
    pub interest: Interest,
    pub mutual: bool,
    /// Present only when the transition produced a mutual match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactCard>,
}

pub async fn respond_interest(
    acting: ActingUser,
    State(state): State<Arc<AppState>>,
    Path(interest_id): Path<Uuid>,
    Json(req): Json<RespondRequest>,
) -> AppResult<Json<ApiResponse<RespondResponse>>> {
    let outcome = interest_service::respond(&state.db, acting.id, interest_id, req.action)?;

    // Notification dispatch is fire-and-forget: the transition has already
    // committed, a publish failure only logs.
    if outcome.interest.status == InterestStatus::Accepted.to_string() {
        publisher::publish_interest_accepted(
            &state.rabbitmq,
            outcome.interest.id,
            &outcome.sender,
            &outcome.actor,
            outcome.mutual,
        )
        .await;
    } else if outcome.interest.status == InterestStatus::Rejected.to_string() {
        publisher::publish_interest_declined(
            &state.rabbitmq,
            outcome.interest.id,
            outcome.interest.sender_id,
            outcome.interest.receiver_id,
        )
        .await;
    }

    Ok(Json(ApiResponse::ok(RespondResponse {
        interest: outcome.interest,
        mutual: outcome.mutual,
        contact: outcome.contact,
    })))
}

// --- GET /interests/sent, GET /interests/received ---

#[derive(Debug, Serialize)]
pub struct InterestWithProfile {
    pub interest: Interest,
    pub profile: Profile,
}

pub async fn list_sent(
    acting: ActingUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<Vec<InterestWithProfile>>>> {
    let items = interest_service::list_sent(&state.db, acting.id)?
        .into_iter()
        .map(|(interest, profile)| InterestWithProfile { interest, profile })
        .collect();

    Ok(Json(ApiResponse::ok(items)))
}

pub async fn list_received(
    acting: ActingUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<Vec<InterestWithProfile>>>> {
    let items = interest_service::list_received(&state.db, acting.id)?
        .into_iter()
        .map(|(interest, profile)| InterestWithProfile { interest, profile })
        .collect();

    Ok(Json(ApiResponse::ok(items)))
}
