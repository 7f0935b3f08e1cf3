//! Candidate listing: bulk read of eligible opposite-gender profiles,
//! in-memory evaluation through the compatibility gates, and a Redis-cached
//! id list so repeat page loads skip the evaluation sweep.

use diesel::prelude::*;
use uuid::Uuid;

use rishta_shared::clients::db::DbPool;
use rishta_shared::clients::redis::RedisClient;
use rishta_shared::errors::{AppError, AppResult, ErrorCode};

use crate::compat;
use crate::domain::{Gender, ModerationStatus};
use crate::models::{PartnerPreferences, Profile};
use crate::schema::{declined_profiles, partner_preferences, profiles};

fn cache_key(profile_id: Uuid) -> String {
    format!("candidates:{profile_id}")
}

/// Drop the cached candidate list for a profile. Called whenever the
/// profile or its preferences change.
pub async fn invalidate_cache(redis: &RedisClient, profile_id: Uuid) {
    if let Err(e) = redis.del(&cache_key(profile_id)).await {
        tracing::warn!(error = %e, profile_id = %profile_id, "failed to invalidate candidate cache");
    }
}

/// Candidates for the seeker, evaluated from the seeker's side only.
pub async fn list_candidates(
    pool: &DbPool,
    redis: &RedisClient,
    cache_ttl_secs: u64,
    seeker_credential: Uuid,
) -> AppResult<Vec<Profile>> {
    let mut conn = pool.get().map_err(|e| AppError::internal(e.to_string()))?;

    let seeker = profiles::table
        .filter(profiles::credential_id.eq(seeker_credential))
        .first::<Profile>(&mut conn)
        .map_err(|_| AppError::new(ErrorCode::ProfileNotFound, "profile not found"))?;

    let key = cache_key(seeker.id);
    if let Ok(Some(cached)) = redis.get(&key).await {
        if let Ok(ids) = serde_json::from_str::<Vec<Uuid>>(&cached) {
            tracing::debug!(profile_id = %seeker.id, count = ids.len(), "candidate cache hit");
            return load_in_order(&mut conn, &ids);
        }
    }

    let prefs = partner_preferences::table
        .find(seeker.id)
        .first::<PartnerPreferences>(&mut conn)
        .optional()?
        .unwrap_or_else(|| PartnerPreferences::unconstrained(seeker.id));

    let opposite = seeker
        .gender
        .parse::<Gender>()
        .map_err(|e| AppError::internal(e))?
        .opposite();

    // Profiles the seeker previously declined stay out of the pool.
    let declined_ids: Vec<Uuid> = declined_profiles::table
        .filter(declined_profiles::user_id.eq(seeker.id))
        .select(declined_profiles::declined_user_id)
        .load::<Uuid>(&mut conn)?;

    let pool_profiles = profiles::table
        .filter(profiles::gender.eq(opposite.to_string()))
        .filter(profiles::moderation_status.eq(ModerationStatus::Approved.to_string()))
        .filter(profiles::onboarding_complete.eq(true))
        .filter(profiles::id.ne(seeker.id))
        .filter(profiles::id.ne_all(&declined_ids))
        .order(profiles::updated_at.desc())
        .load::<Profile>(&mut conn)?;

    let candidates: Vec<Profile> = pool_profiles
        .into_iter()
        .filter(|candidate| compat::is_candidate_acceptable(&prefs, candidate))
        .collect();

    let ids: Vec<Uuid> = candidates.iter().map(|p| p.id).collect();
    match serde_json::to_string(&ids) {
        Ok(payload) => {
            if let Err(e) = redis.set(&key, &payload, cache_ttl_secs).await {
                tracing::warn!(error = %e, "failed to cache candidate list");
            }
        }
        Err(e) => tracing::warn!(error = %e, "failed to serialize candidate ids"),
    }

    tracing::debug!(
        profile_id = %seeker.id,
        pool = ids.len(),
        "candidate list evaluated"
    );

    Ok(candidates)
}

fn load_in_order(conn: &mut PgConnection, ids: &[Uuid]) -> AppResult<Vec<Profile>> {
    let mut loaded = profiles::table
        .filter(profiles::id.eq_any(ids))
        .load::<Profile>(conn)?;

    // Preserve the cached ordering.
    let order: std::collections::HashMap<Uuid, usize> =
        ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
    loaded.sort_by_key(|p| order.get(&p.id).copied().unwrap_or(usize::MAX));

    Ok(loaded)
}
