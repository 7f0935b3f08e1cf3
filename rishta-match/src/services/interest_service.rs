//! The interest state machine.
//!
//! A row in `interests` is a directed edge `sender -> receiver`, unique per
//! ordered pair, with status pending/accepted/rejected. Rows are never
//! deleted. The transition rules themselves are pure (`transition` module);
//! this service applies them against the store, keeping the edge update, the
//! reciprocal-edge update, and the declined-profile bookkeeping in one
//! transaction.

use diesel::prelude::*;
use uuid::Uuid;

use rishta_shared::clients::db::DbPool;
use rishta_shared::errors::{AppError, AppResult, ErrorCode};

use crate::domain::{InterestStatus, ModerationStatus, RespondAction};
use crate::models::{ContactCard, Interest, NewDeclinedProfile, NewInterest, Profile};
use crate::schema::{declined_profiles, interests, profiles};

/// Pure transition rules, separated so they can be reasoned about (and
/// tested) without a database.
pub mod transition {
    use crate::domain::{InterestStatus, RespondAction};

    /// What the transition does to the receiver's declined-profile row
    /// for the edge's sender.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum DeclinedBookkeeping {
        Upsert,
        Remove,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Outcome {
        pub next: InterestStatus,
        pub declined: DeclinedBookkeeping,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TransitionError {
        /// The actor is not the edge's receiver.
        NotReceiver,
        /// Reconsider on an edge that is not rejected.
        NotReconsiderable(InterestStatus),
    }

    /// Decides the outcome of a respond action. Accept lands in `accepted`
    /// from any prior status; reject lands in `rejected`; reconsider is the
    /// only path back out of `rejected` and runs the accept outcome.
    pub fn evaluate(
        current: InterestStatus,
        action: RespondAction,
        actor_is_receiver: bool,
    ) -> Result<Outcome, TransitionError> {
        if !actor_is_receiver {
            return Err(TransitionError::NotReceiver);
        }

        match action {
            RespondAction::Accept => Ok(Outcome {
                next: InterestStatus::Accepted,
                declined: DeclinedBookkeeping::Remove,
            }),
            RespondAction::Reject => Ok(Outcome {
                next: InterestStatus::Rejected,
                declined: DeclinedBookkeeping::Upsert,
            }),
            RespondAction::Reconsider => {
                if current != InterestStatus::Rejected {
                    return Err(TransitionError::NotReconsiderable(current));
                }
                Ok(Outcome {
                    next: InterestStatus::Accepted,
                    declined: DeclinedBookkeeping::Remove,
                })
            }
        }
    }
}

pub struct ExpressOutcome {
    pub interest: Interest,
    pub sender: Profile,
    pub receiver: Profile,
}

pub struct RespondOutcome {
    pub interest: Interest,
    pub mutual: bool,
    /// The sender's contact card, present only when the transition produced
    /// a mutual match. Contact fields leave the service nowhere else.
    pub contact: Option<ContactCard>,
    pub actor: Profile,
    pub sender: Profile,
}

fn load_profile_by_credential(conn: &mut PgConnection, credential_id: Uuid) -> AppResult<Profile> {
    profiles::table
        .filter(profiles::credential_id.eq(credential_id))
        .first::<Profile>(conn)
        .map_err(|_| AppError::new(ErrorCode::ProfileNotFound, "profile not found"))
}

/// The reverse edge of `edge`, if one exists. Mutuality is derived, not
/// stored: `edge` is mutual exactly when its reciprocal is (or is being
/// forced) `accepted`. Every caller goes through this query so the
/// derivation cannot drift between call sites.
pub fn reciprocal_of(
    conn: &mut PgConnection,
    edge: &Interest,
) -> Result<Option<Interest>, diesel::result::Error> {
    interests::table
        .filter(interests::sender_id.eq(edge.receiver_id))
        .filter(interests::receiver_id.eq(edge.sender_id))
        .first::<Interest>(conn)
        .optional()
}

/// Create the edge `sender -> receiver` in `pending`. Exactly one edge may
/// ever exist per ordered pair; re-expressing after a rejection goes through
/// `reconsider` on the receiver's side, never through a second create.
pub fn express_interest(
    pool: &DbPool,
    sender_credential: Uuid,
    receiver_ref: Uuid,
    message: Option<String>,
) -> AppResult<ExpressOutcome> {
    let mut conn = pool.get().map_err(|e| AppError::internal(e.to_string()))?;

    let sender = load_profile_by_credential(&mut conn, sender_credential)?;

    // receiver_ref can be either profile id or credential id
    let receiver = profiles::table
        .filter(
            profiles::id.eq(receiver_ref)
                .or(profiles::credential_id.eq(receiver_ref)),
        )
        .first::<Profile>(&mut conn)
        .map_err(|_| AppError::new(ErrorCode::ProfileNotFound, "receiver profile not found"))?;

    if sender.id == receiver.id {
        return Err(AppError::new(ErrorCode::SelfInterest, "cannot express interest in yourself"));
    }

    let approved = receiver
        .moderation_status
        .parse::<ModerationStatus>()
        .map(|s| s == ModerationStatus::Approved)
        .unwrap_or(false);
    if !approved {
        return Err(AppError::new(ErrorCode::ProfileNotApproved, "receiver profile is not approved"));
    }

    let existing: bool = interests::table
        .filter(interests::sender_id.eq(sender.id))
        .filter(interests::receiver_id.eq(receiver.id))
        .count()
        .get_result::<i64>(&mut conn)
        .map(|c| c > 0)
        .unwrap_or(false);

    if existing {
        return Err(AppError::new(ErrorCode::InterestAlreadySent, "interest already sent to this profile"));
    }

    let new_interest = NewInterest {
        sender_id: sender.id,
        receiver_id: receiver.id,
        status: InterestStatus::Pending.to_string(),
        message,
    };

    // The unique constraint on (sender_id, receiver_id) backs the check
    // above under concurrent sends.
    let interest = diesel::insert_into(interests::table)
        .values(&new_interest)
        .get_result::<Interest>(&mut conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => AppError::new(ErrorCode::InterestAlreadySent, "interest already sent to this profile"),
            other => AppError::Database(other),
        })?;

    tracing::info!(
        interest_id = %interest.id,
        sender_id = %sender.id,
        receiver_id = %receiver.id,
        "interest created"
    );

    Ok(ExpressOutcome { interest, sender, receiver })
}

/// Apply accept/reject/reconsider to an edge as `actor_credential`.
pub fn respond(
    pool: &DbPool,
    actor_credential: Uuid,
    interest_id: Uuid,
    action: RespondAction,
) -> AppResult<RespondOutcome> {
    let mut conn = pool.get().map_err(|e| AppError::internal(e.to_string()))?;

    let actor = load_profile_by_credential(&mut conn, actor_credential)?;

    let interest = interests::table
        .find(interest_id)
        .first::<Interest>(&mut conn)
        .map_err(|_| AppError::new(ErrorCode::InterestNotFound, "interest not found"))?;

    let current: InterestStatus = interest
        .status
        .parse()
        .map_err(|e: String| AppError::internal(e))?;

    let outcome = transition::evaluate(current, action, actor.id == interest.receiver_id)
        .map_err(|e| match e {
            transition::TransitionError::NotReceiver => AppError::new(
                ErrorCode::NotInterestRecipient,
                "only the recipient can respond to an interest",
            ),
            transition::TransitionError::NotReconsiderable(status) => AppError::new(
                ErrorCode::InvalidTransition,
                format!("only rejected interests can be reconsidered (status is {status})"),
            ),
        })?;

    let now = chrono::Utc::now();

    let (updated, mutual) = conn.transaction::<_, AppError, _>(|conn| {
        let updated = diesel::update(interests::table.filter(interests::id.eq(interest.id)))
            .set((
                interests::status.eq(outcome.next.to_string()),
                interests::updated_at.eq(now),
            ))
            .get_result::<Interest>(conn)?;

        match outcome.declined {
            transition::DeclinedBookkeeping::Upsert => {
                diesel::insert_into(declined_profiles::table)
                    .values(&NewDeclinedProfile {
                        user_id: actor.id,
                        declined_user_id: interest.sender_id,
                    })
                    .on_conflict((declined_profiles::user_id, declined_profiles::declined_user_id))
                    .do_nothing()
                    .execute(conn)?;
            }
            transition::DeclinedBookkeeping::Remove => {
                diesel::delete(
                    declined_profiles::table
                        .filter(declined_profiles::user_id.eq(actor.id))
                        .filter(declined_profiles::declined_user_id.eq(interest.sender_id)),
                )
                .execute(conn)?;
            }
        }

        // Accepting one direction completes the pair: an existing reciprocal
        // edge is forced to accepted too, whatever its prior status.
        let mutual = if outcome.next == InterestStatus::Accepted {
            match reciprocal_of(conn, &interest)? {
                Some(reciprocal) => {
                    if reciprocal.status != InterestStatus::Accepted.to_string() {
                        diesel::update(interests::table.filter(interests::id.eq(reciprocal.id)))
                            .set((
                                interests::status.eq(InterestStatus::Accepted.to_string()),
                                interests::updated_at.eq(now),
                            ))
                            .execute(conn)?;
                    }
                    // Keep the reciprocal edge's declined row in sync: its
                    // receiver is this edge's sender.
                    diesel::delete(
                        declined_profiles::table
                            .filter(declined_profiles::user_id.eq(interest.sender_id))
                            .filter(declined_profiles::declined_user_id.eq(interest.receiver_id)),
                    )
                    .execute(conn)?;
                    true
                }
                None => false,
            }
        } else {
            false
        };

        Ok((updated, mutual))
    })?;

    let sender = profiles::table
        .find(interest.sender_id)
        .first::<Profile>(&mut conn)
        .map_err(|_| AppError::new(ErrorCode::ProfileNotFound, "sender profile not found"))?;

    let contact = if mutual { Some(sender.contact_card()) } else { None };

    tracing::info!(
        interest_id = %updated.id,
        status = %updated.status,
        mutual = mutual,
        "interest transition applied"
    );

    Ok(RespondOutcome { interest: updated, mutual, contact, actor, sender })
}

/// Interests the acting user has sent, newest first, with the counterpart
/// profile attached.
pub fn list_sent(pool: &DbPool, credential_id: Uuid) -> AppResult<Vec<(Interest, Profile)>> {
    let mut conn = pool.get().map_err(|e| AppError::internal(e.to_string()))?;
    let me = load_profile_by_credential(&mut conn, credential_id)?;

    let edges = interests::table
        .filter(interests::sender_id.eq(me.id))
        .order(interests::created_at.desc())
        .load::<Interest>(&mut conn)?;

    attach_profiles(&mut conn, edges, |e| e.receiver_id)
}

/// Interests the acting user has received, newest first.
pub fn list_received(pool: &DbPool, credential_id: Uuid) -> AppResult<Vec<(Interest, Profile)>> {
    let mut conn = pool.get().map_err(|e| AppError::internal(e.to_string()))?;
    let me = load_profile_by_credential(&mut conn, credential_id)?;

    let edges = interests::table
        .filter(interests::receiver_id.eq(me.id))
        .order(interests::created_at.desc())
        .load::<Interest>(&mut conn)?;

    attach_profiles(&mut conn, edges, |e| e.sender_id)
}

fn attach_profiles(
    conn: &mut PgConnection,
    edges: Vec<Interest>,
    counterpart: impl Fn(&Interest) -> Uuid,
) -> AppResult<Vec<(Interest, Profile)>> {
    let ids: Vec<Uuid> = edges.iter().map(&counterpart).collect();
    let counterparts = profiles::table
        .filter(profiles::id.eq_any(&ids))
        .load::<Profile>(conn)?;

    let by_id: std::collections::HashMap<Uuid, Profile> =
        counterparts.into_iter().map(|p| (p.id, p)).collect();

    Ok(edges
        .into_iter()
        .filter_map(|edge| {
            let profile = by_id.get(&counterpart(&edge)).cloned()?;
            Some((edge, profile))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::transition::{evaluate, DeclinedBookkeeping, TransitionError};
    use crate::domain::{InterestStatus, RespondAction};

    #[test]
    fn accept_from_pending() {
        let outcome = evaluate(InterestStatus::Pending, RespondAction::Accept, true).unwrap();
        assert_eq!(outcome.next, InterestStatus::Accepted);
        assert_eq!(outcome.declined, DeclinedBookkeeping::Remove);
    }

    #[test]
    fn reject_upserts_declined_row() {
        let outcome = evaluate(InterestStatus::Pending, RespondAction::Reject, true).unwrap();
        assert_eq!(outcome.next, InterestStatus::Rejected);
        assert_eq!(outcome.declined, DeclinedBookkeeping::Upsert);
    }

    #[test]
    fn reconsider_only_from_rejected() {
        let outcome = evaluate(InterestStatus::Rejected, RespondAction::Reconsider, true).unwrap();
        assert_eq!(outcome.next, InterestStatus::Accepted);
        assert_eq!(outcome.declined, DeclinedBookkeeping::Remove);

        assert_eq!(
            evaluate(InterestStatus::Pending, RespondAction::Reconsider, true),
            Err(TransitionError::NotReconsiderable(InterestStatus::Pending))
        );
        assert_eq!(
            evaluate(InterestStatus::Accepted, RespondAction::Reconsider, true),
            Err(TransitionError::NotReconsiderable(InterestStatus::Accepted))
        );
    }

    #[test]
    fn sender_cannot_respond() {
        for action in [RespondAction::Accept, RespondAction::Reject, RespondAction::Reconsider] {
            assert_eq!(
                evaluate(InterestStatus::Pending, action, false),
                Err(TransitionError::NotReceiver)
            );
        }
    }
}
