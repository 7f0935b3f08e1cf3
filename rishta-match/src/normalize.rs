//! Write-boundary normalization for profile and preference updates.
//!
//! Everything here runs when data is WRITTEN, so the evaluator can assume
//! canonical values: closed vocabularies collapse their historical synonyms,
//! free-text categoricals are trimmed and lowercased, choice lists are
//! deduplicated, and `same_as_mine` is resolved against the seeker's own
//! profile before it is ever stored. The literal `same_as_mine` token never
//! reaches the evaluator.

use crate::compat::fields::parse_choices;
use crate::domain::{Diet, Habit, MaritalStatus};
use crate::models::{Profile, UpdatePartnerPreferences, UpdateProfile};

pub const SAME_AS_MINE: &str = "same_as_mine";

/// Canonicalizes one free-text value: trim + lowercase, empty becomes None.
fn canonical(raw: &str) -> Option<String> {
    let value = raw.trim().to_lowercase();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Canonicalizes a closed-vocabulary value through its enum, falling back to
/// trim+lowercase for values outside the known vocabulary.
fn canonical_via<T>(raw: &str) -> Option<String>
where
    T: std::str::FromStr + std::fmt::Display,
{
    match raw.parse::<T>() {
        Ok(parsed) => Some(parsed.to_string()),
        Err(_) => canonical(raw),
    }
}

/// Normalizes a stored choice list: each member canonicalized, duplicates
/// removed, rejoined comma-separated. Historical JSON-array encodings come
/// out as plain comma lists.
fn canonical_choice_list(raw: &str) -> Option<String> {
    let mut seen = Vec::new();
    for choice in parse_choices(raw) {
        if !seen.contains(&choice) {
            seen.push(choice);
        }
    }
    if seen.is_empty() {
        None
    } else {
        Some(seen.join(","))
    }
}

/// Replaces the `same_as_mine` token in a preference value with the seeker's
/// own attribute, deduplicated against any explicit values also selected.
/// If the seeker has no value for the attribute, the token is dropped.
pub fn resolve_same_as_mine(pref: &str, own_value: Option<&str>) -> Option<String> {
    if !pref.to_lowercase().contains(SAME_AS_MINE) {
        return canonical_choice_list(pref);
    }

    let mut resolved = Vec::new();
    for choice in parse_choices(pref) {
        if choice == SAME_AS_MINE {
            if let Some(own) = own_value.and_then(canonical) {
                if !resolved.contains(&own) {
                    resolved.push(own);
                }
            }
        } else if !resolved.contains(&choice) {
            resolved.push(choice);
        }
    }

    if resolved.is_empty() {
        None
    } else {
        Some(resolved.join(","))
    }
}

/// Normalizes an incoming profile update in place.
pub fn normalize_profile_update(update: &mut UpdateProfile) {
    if let Some(v) = update.marital_status.take() {
        update.marital_status = canonical_via::<MaritalStatus>(&v);
    }
    if let Some(v) = update.diet.take() {
        update.diet = canonical_via::<Diet>(&v);
    }
    if let Some(v) = update.smoking.take() {
        update.smoking = canonical_via::<Habit>(&v);
    }
    if let Some(v) = update.drinking.take() {
        update.drinking = canonical_via::<Habit>(&v);
    }

    for field in [
        &mut update.religion,
        &mut update.community,
        &mut update.sub_community,
        &mut update.gotra,
        &mut update.mother_tongue,
        &mut update.citizenship,
        &mut update.grew_up_in,
        &mut update.willing_to_relocate,
        &mut update.qualification,
        &mut update.occupation,
        &mut update.income,
        &mut update.family_values,
        &mut update.family_location,
        &mut update.pets,
    ] {
        if let Some(v) = field.take() {
            *field = canonical(&v);
        }
    }

    if let Some(v) = update.height.take() {
        update.height = canonical(&v);
    }
}

/// Normalizes an incoming preference update in place, resolving
/// `same_as_mine` against the seeker's own profile.
pub fn normalize_preferences_update(update: &mut UpdatePartnerPreferences, own: &Profile) {
    let pairs: [(&mut Option<String>, Option<&str>); 16] = [
        (&mut update.marital_status, own.marital_status.as_deref()),
        (&mut update.religion, own.religion.as_deref()),
        (&mut update.community, own.community.as_deref()),
        (&mut update.sub_community, own.sub_community.as_deref()),
        (&mut update.gotra, own.gotra.as_deref()),
        (&mut update.mother_tongue, own.mother_tongue.as_deref()),
        (&mut update.diet, own.diet.as_deref()),
        (&mut update.smoking, own.smoking.as_deref()),
        (&mut update.drinking, own.drinking.as_deref()),
        (&mut update.citizenship, own.citizenship.as_deref()),
        (&mut update.grew_up_in, own.grew_up_in.as_deref()),
        (&mut update.qualification, own.qualification.as_deref()),
        (&mut update.occupation, own.occupation.as_deref()),
        (&mut update.income, own.income.as_deref()),
        (&mut update.family_values, own.family_values.as_deref()),
        (&mut update.family_location, own.family_location.as_deref()),
    ];

    for (pref, own_value) in pairs {
        if let Some(v) = pref.take() {
            *pref = resolve_same_as_mine(&v, own_value);
        }
    }

    // Location, relocation, and pets carry no same_as_mine semantics; just
    // canonicalize.
    if let Some(v) = update.location.take() {
        update.location = canonical(&v);
    }
    if let Some(v) = update.relocation.take() {
        update.relocation = canonical(&v);
    }
    if let Some(v) = update.pets.take() {
        update.pets = canonical(&v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;

    #[test]
    fn same_as_mine_resolves_to_own_attribute() {
        assert_eq!(
            resolve_same_as_mine("same_as_mine", Some("Brahmin")),
            Some("brahmin".into())
        );
    }

    #[test]
    fn same_as_mine_dedups_against_explicit_values() {
        assert_eq!(
            resolve_same_as_mine("brahmin, same_as_mine", Some("Brahmin")),
            Some("brahmin".into())
        );
        assert_eq!(
            resolve_same_as_mine("same_as_mine, iyer", Some("Brahmin")),
            Some("brahmin,iyer".into())
        );
    }

    #[test]
    fn same_as_mine_with_no_own_value_drops_the_token() {
        assert_eq!(resolve_same_as_mine("same_as_mine", None), None);
        assert_eq!(
            resolve_same_as_mine("same_as_mine, iyer", None),
            Some("iyer".into())
        );
    }

    #[test]
    fn json_arrays_become_comma_lists() {
        assert_eq!(
            resolve_same_as_mine(r#"["Brahmin", "Iyer", "Brahmin"]"#, None),
            Some("brahmin,iyer".into())
        );
    }

    #[test]
    fn profile_update_canonicalizes_closed_vocabularies() {
        let mut update = UpdateProfile {
            diet: Some("Non Vegetarian".into()),
            marital_status: Some("Never Married".into()),
            smoking: Some("Socially".into()),
            community: Some("  Brahmin ".into()),
            ..Default::default()
        };
        normalize_profile_update(&mut update);
        assert_eq!(update.diet.as_deref(), Some("non_vegetarian"));
        assert_eq!(update.marital_status.as_deref(), Some("never_married"));
        assert_eq!(update.smoking.as_deref(), Some("occasionally"));
        assert_eq!(update.community.as_deref(), Some("brahmin"));
    }

    #[test]
    fn unknown_vocabulary_values_are_kept_lowercased() {
        let mut update = UpdateProfile {
            diet: Some("Pescatarian".into()),
            ..Default::default()
        };
        normalize_profile_update(&mut update);
        assert_eq!(update.diet.as_deref(), Some("pescatarian"));
    }

    #[test]
    fn gender_vocabulary_is_closed() {
        assert!("M".parse::<Gender>().is_ok());
        assert!("other".parse::<Gender>().is_err());
    }
}
