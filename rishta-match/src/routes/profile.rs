use axum::extract::State;
use axum::Json;
use diesel::prelude::*;
use std::sync::Arc;

use rishta_shared::errors::{AppError, AppResult, ErrorCode};
use rishta_shared::types::auth::ActingUser;
use rishta_shared::types::ApiResponse;

use crate::events::publisher;
use crate::models::{Profile, UpdateProfile};
use crate::normalize;
use crate::schema::profiles;
use crate::services::candidate_service;
use crate::AppState;

// --- GET /me ---

pub async fn get_profile(
    acting: ActingUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<Profile>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let profile = profiles::table
        .filter(profiles::credential_id.eq(acting.id))
        .first::<Profile>(&mut conn)
        .map_err(|_| AppError::new(ErrorCode::ProfileNotFound, "profile not found"))?;

    Ok(Json(ApiResponse::ok(profile)))
}

// --- PATCH /me ---

pub async fn update_profile(
    acting: ActingUser,
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<UpdateProfile>,
) -> AppResult<Json<ApiResponse<Profile>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let profile = profiles::table
        .filter(profiles::credential_id.eq(acting.id))
        .first::<Profile>(&mut conn)
        .map_err(|_| AppError::new(ErrorCode::ProfileNotFound, "profile not found"))?;

    normalize::normalize_profile_update(&mut payload);

    let updated = diesel::update(profiles::table.filter(profiles::id.eq(profile.id)))
        .set((
            &payload,
            profiles::updated_at.eq(chrono::Utc::now()),
        ))
        .get_result::<Profile>(&mut conn)?;

    candidate_service::invalidate_cache(&state.redis, updated.id).await;
    publisher::publish_profile_updated(&state.rabbitmq, updated.id, updated.credential_id).await;

    Ok(Json(ApiResponse::ok(updated)))
}
