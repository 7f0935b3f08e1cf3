use axum::extract::State;
use axum::Json;
use diesel::prelude::*;
use std::sync::Arc;

use rishta_shared::errors::{AppError, AppResult, ErrorCode};
use rishta_shared::types::auth::ActingUser;
use rishta_shared::types::ApiResponse;

use crate::compat::height::parse_height;
use crate::events::publisher;
use crate::models::{NewPartnerPreferences, PartnerPreferences, Profile, UpdatePartnerPreferences};
use crate::normalize;
use crate::schema::{partner_preferences, profiles};
use crate::services::candidate_service;
use crate::AppState;

// --- GET /preferences ---

pub async fn get_preferences(
    acting: ActingUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<PartnerPreferences>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let profile = profiles::table
        .filter(profiles::credential_id.eq(acting.id))
        .first::<Profile>(&mut conn)
        .map_err(|_| AppError::new(ErrorCode::ProfileNotFound, "profile not found"))?;

    let prefs = partner_preferences::table
        .find(profile.id)
        .first::<PartnerPreferences>(&mut conn)
        .optional()?
        .unwrap_or_else(|| PartnerPreferences::unconstrained(profile.id));

    Ok(Json(ApiResponse::ok(prefs)))
}

// --- PATCH /preferences ---

pub async fn update_preferences(
    acting: ActingUser,
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<UpdatePartnerPreferences>,
) -> AppResult<Json<ApiResponse<PartnerPreferences>>> {
    if let (Some(min), Some(max)) = (payload.age_min, payload.age_max) {
        if min > max {
            return Err(AppError::Validation("age_min must not exceed age_max".into()));
        }
    }
    for age in [payload.age_min, payload.age_max].into_iter().flatten() {
        if !(18..=100).contains(&age) {
            return Err(AppError::Validation("age preference must be between 18 and 100".into()));
        }
    }
    for height in [payload.height_min.as_deref(), payload.height_max.as_deref()]
        .into_iter()
        .flatten()
    {
        if !height.trim().is_empty() && parse_height(height).is_none() {
            return Err(AppError::Validation(format!(
                "height preference must be a token like 5'8\", got {height}"
            )));
        }
    }

    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let profile = profiles::table
        .filter(profiles::credential_id.eq(acting.id))
        .first::<Profile>(&mut conn)
        .map_err(|_| AppError::new(ErrorCode::ProfileNotFound, "profile not found"))?;

    normalize::normalize_preferences_update(&mut payload, &profile);

    // Ensure the row exists before applying the changeset.
    diesel::insert_into(partner_preferences::table)
        .values(&NewPartnerPreferences { profile_id: profile.id })
        .on_conflict(partner_preferences::profile_id)
        .do_nothing()
        .execute(&mut conn)?;

    let updated = diesel::update(
        partner_preferences::table.filter(partner_preferences::profile_id.eq(profile.id)),
    )
    .set((
        &payload,
        partner_preferences::updated_at.eq(chrono::Utc::now()),
    ))
    .get_result::<PartnerPreferences>(&mut conn)?;

    candidate_service::invalidate_cache(&state.redis, profile.id).await;
    publisher::publish_preferences_updated(&state.rabbitmq, profile.id).await;

    Ok(Json(ApiResponse::ok(updated)))
}
