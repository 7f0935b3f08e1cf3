use axum::extract::{Query, State};
use axum::Json;
use std::sync::Arc;

use rishta_shared::errors::AppResult;
use rishta_shared::types::auth::ActingUser;
use rishta_shared::types::pagination::{Paginated, PaginationParams};
use rishta_shared::types::ApiResponse;

use crate::models::Profile;
use crate::services::candidate_service;
use crate::AppState;

/// GET /candidates?page=1&per_page=20
///
/// The full pool is evaluated (or read from cache) and paginated in memory;
/// contact fields never serialize on this path.
pub async fn list_candidates(
    acting: ActingUser,
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<ApiResponse<Paginated<Profile>>>> {
    let candidates = candidate_service::list_candidates(
        &state.db,
        &state.redis,
        state.config.candidate_cache_ttl_secs,
        acting.id,
    )
    .await?;

    let total = candidates.len() as u64;
    let offset = params.offset() as usize;
    let limit = params.limit() as usize;

    let page: Vec<Profile> = candidates.into_iter().skip(offset).take(limit).collect();

    Ok(Json(ApiResponse::ok(Paginated::new(page, total, &params))))
}
