//! The compatibility evaluator.
//!
//! `is_candidate_acceptable` is the single entry point: given one seeker's
//! partner preferences and one candidate profile, it answers whether the
//! candidate passes every active gate. It is pure, never errors, and is
//! evaluated from the seeker's side only — A accepting B says nothing about
//! B accepting A.
//!
//! Every gate is permissive on missing data: an unset or "doesn't matter"
//! preference, or a candidate attribute that is absent or unparsable, passes.
//! Failing closed here would silently shrink every user's candidate pool.

pub mod age;
pub mod fields;
pub mod height;
pub mod location;

use crate::domain::PrefField;
use crate::models::{PartnerPreferences, Profile};

fn resolved(flag: Option<bool>, field: PrefField) -> bool {
    flag.unwrap_or_else(|| field.hard_by_default())
}

pub fn is_candidate_acceptable(prefs: &PartnerPreferences, candidate: &Profile) -> bool {
    if !age::age_gate(
        prefs.age_min,
        prefs.age_max,
        resolved(prefs.age_dealbreaker, PrefField::Age),
        candidate.date_of_birth.as_deref(),
    ) {
        return false;
    }

    if !height::height_gate(
        prefs.height_min.as_deref(),
        prefs.height_max.as_deref(),
        resolved(prefs.height_dealbreaker, PrefField::Height),
        candidate.height.as_deref(),
    ) {
        return false;
    }

    if !location::location_gate(
        prefs.location.as_deref(),
        resolved(prefs.location_dealbreaker, PrefField::Location),
        candidate.location.as_deref(),
    ) {
        return false;
    }

    let gates: [(&Option<String>, Option<bool>, PrefField, &Option<String>); 18] = [
        (&prefs.marital_status, prefs.marital_status_dealbreaker, PrefField::MaritalStatus, &candidate.marital_status),
        (&prefs.religion, prefs.religion_dealbreaker, PrefField::Religion, &candidate.religion),
        (&prefs.community, prefs.community_dealbreaker, PrefField::Community, &candidate.community),
        (&prefs.sub_community, prefs.sub_community_dealbreaker, PrefField::SubCommunity, &candidate.sub_community),
        (&prefs.gotra, prefs.gotra_dealbreaker, PrefField::Gotra, &candidate.gotra),
        (&prefs.mother_tongue, prefs.mother_tongue_dealbreaker, PrefField::MotherTongue, &candidate.mother_tongue),
        (&prefs.diet, prefs.diet_dealbreaker, PrefField::Diet, &candidate.diet),
        (&prefs.smoking, prefs.smoking_dealbreaker, PrefField::Smoking, &candidate.smoking),
        (&prefs.drinking, prefs.drinking_dealbreaker, PrefField::Drinking, &candidate.drinking),
        (&prefs.citizenship, prefs.citizenship_dealbreaker, PrefField::Citizenship, &candidate.citizenship),
        (&prefs.grew_up_in, prefs.grew_up_in_dealbreaker, PrefField::GrewUpIn, &candidate.grew_up_in),
        (&prefs.relocation, prefs.relocation_dealbreaker, PrefField::Relocation, &candidate.willing_to_relocate),
        (&prefs.qualification, prefs.qualification_dealbreaker, PrefField::Qualification, &candidate.qualification),
        (&prefs.occupation, prefs.occupation_dealbreaker, PrefField::Occupation, &candidate.occupation),
        (&prefs.income, prefs.income_dealbreaker, PrefField::Income, &candidate.income),
        (&prefs.family_values, prefs.family_values_dealbreaker, PrefField::FamilyValues, &candidate.family_values),
        (&prefs.family_location, prefs.family_location_dealbreaker, PrefField::FamilyLocation, &candidate.family_location),
        (&prefs.pets, prefs.pets_dealbreaker, PrefField::Pets, &candidate.pets),
    ];

    gates.iter().all(|(pref, flag, field, attr)| {
        fields::choice_gate(pref.as_deref(), resolved(*flag, *field), attr.as_deref())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Utc};
    use uuid::Uuid;

    fn candidate() -> Profile {
        let now = Utc::now();
        let dob_year = now.year() - 28;
        Profile {
            id: Uuid::new_v4(),
            credential_id: Uuid::new_v4(),
            display_name: Some("Priya".into()),
            gender: "female".into(),
            date_of_birth: Some(format!("01/15/{dob_year}")),
            height: Some("5'4\"".into()),
            marital_status: Some("never_married".into()),
            religion: Some("hindu".into()),
            community: Some("brahmin".into()),
            sub_community: None,
            gotra: None,
            mother_tongue: Some("tamil".into()),
            diet: Some("vegetarian".into()),
            smoking: Some("no".into()),
            drinking: Some("occasionally".into()),
            citizenship: Some("usa".into()),
            grew_up_in: Some("india".into()),
            willing_to_relocate: Some("yes".into()),
            location: Some("Houston, Texas".into()),
            qualification: Some("masters".into()),
            occupation: Some("software engineer".into()),
            income: None,
            family_values: Some("moderate".into()),
            family_location: None,
            pets: None,
            contact_email: Some("priya@example.com".into()),
            contact_phone: None,
            linkedin_url: None,
            instagram_handle: None,
            moderation_status: "approved".into(),
            onboarding_complete: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn no_active_dealbreakers_accepts_everyone() {
        let prefs = PartnerPreferences::unconstrained(Uuid::new_v4());
        assert!(is_candidate_acceptable(&prefs, &candidate()));
    }

    #[test]
    fn single_failing_gate_rejects() {
        let mut prefs = PartnerPreferences::unconstrained(Uuid::new_v4());
        prefs.diet = Some("non_vegetarian".into());
        prefs.diet_dealbreaker = Some(true);
        assert!(!is_candidate_acceptable(&prefs, &candidate()));
    }

    #[test]
    fn all_gates_must_pass() {
        let mut prefs = PartnerPreferences::unconstrained(Uuid::new_v4());
        prefs.age_min = Some(25);
        prefs.age_max = Some(30);
        prefs.age_dealbreaker = Some(true);
        prefs.diet = Some("vegetarian".into());
        prefs.diet_dealbreaker = Some(true);
        prefs.location = Some("Texas".into());
        prefs.location_dealbreaker = Some(true);
        assert!(is_candidate_acceptable(&prefs, &candidate()));

        prefs.location = Some("California".into());
        assert!(!is_candidate_acceptable(&prefs, &candidate()));
    }

    #[test]
    fn null_dealbreaker_uses_field_default() {
        // Diet defaults hard: a concrete preference with a NULL flag filters.
        let mut prefs = PartnerPreferences::unconstrained(Uuid::new_v4());
        prefs.diet = Some("non_vegetarian".into());
        prefs.diet_dealbreaker = None;
        assert!(!is_candidate_acceptable(&prefs, &candidate()));

        // Community defaults soft: same shape, no filtering.
        let mut prefs = PartnerPreferences::unconstrained(Uuid::new_v4());
        prefs.community = Some("nair".into());
        prefs.community_dealbreaker = None;
        assert!(is_candidate_acceptable(&prefs, &candidate()));
    }

    #[test]
    fn community_set_membership() {
        let mut prefs = PartnerPreferences::unconstrained(Uuid::new_v4());
        prefs.community = Some(r#"["Brahmin", "Iyer"]"#.into());
        prefs.community_dealbreaker = Some(true);
        assert!(is_candidate_acceptable(&prefs, &candidate()));

        prefs.community = Some("nair, menon".into());
        assert!(!is_candidate_acceptable(&prefs, &candidate()));
    }
}
