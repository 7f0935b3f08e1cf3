use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::{declined_profiles, interests, partner_preferences, profiles};

// --- Profile ---

#[derive(Debug, Queryable, Identifiable, Serialize, Clone)]
#[diesel(table_name = profiles)]
pub struct Profile {
    pub id: Uuid,
    pub credential_id: Uuid,
    pub display_name: Option<String>,
    pub gender: String,
    pub date_of_birth: Option<String>,
    pub height: Option<String>,
    pub marital_status: Option<String>,
    pub religion: Option<String>,
    pub community: Option<String>,
    pub sub_community: Option<String>,
    pub gotra: Option<String>,
    pub mother_tongue: Option<String>,
    pub diet: Option<String>,
    pub smoking: Option<String>,
    pub drinking: Option<String>,
    pub citizenship: Option<String>,
    pub grew_up_in: Option<String>,
    pub willing_to_relocate: Option<String>,
    pub location: Option<String>,
    pub qualification: Option<String>,
    pub occupation: Option<String>,
    pub income: Option<String>,
    pub family_values: Option<String>,
    pub family_location: Option<String>,
    pub pets: Option<String>,
    // Contact fields are disclosed only through the mutual-match path,
    // never serialized on ordinary profile reads.
    #[serde(skip_serializing)]
    pub contact_email: Option<String>,
    #[serde(skip_serializing)]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing)]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing)]
    pub instagram_handle: Option<String>,
    pub moderation_status: String,
    pub onboarding_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn contact_card(&self) -> ContactCard {
        ContactCard {
            display_name: self.display_name.clone(),
            email: self.contact_email.clone(),
            phone: self.contact_phone.clone(),
            linkedin_url: self.linkedin_url.clone(),
            instagram_handle: self.instagram_handle.clone(),
        }
    }
}

/// Contact details handed to the caller when a transition yields a mutual
/// match. The only way contact fields leave this service.
#[derive(Debug, Clone, Serialize)]
pub struct ContactCard {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub instagram_handle: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = profiles)]
pub struct NewProfile {
    pub credential_id: Uuid,
    pub gender: String,
}

#[derive(Debug, AsChangeset, Deserialize, Default)]
#[diesel(table_name = profiles)]
pub struct UpdateProfile {
    pub display_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub height: Option<String>,
    pub marital_status: Option<String>,
    pub religion: Option<String>,
    pub community: Option<String>,
    pub sub_community: Option<String>,
    pub gotra: Option<String>,
    pub mother_tongue: Option<String>,
    pub diet: Option<String>,
    pub smoking: Option<String>,
    pub drinking: Option<String>,
    pub citizenship: Option<String>,
    pub grew_up_in: Option<String>,
    pub willing_to_relocate: Option<String>,
    pub location: Option<String>,
    pub qualification: Option<String>,
    pub occupation: Option<String>,
    pub income: Option<String>,
    pub family_values: Option<String>,
    pub family_location: Option<String>,
    pub pets: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub instagram_handle: Option<String>,
    pub onboarding_complete: Option<bool>,
}

// --- Partner preferences ---

#[derive(Debug, Queryable, Identifiable, Serialize, Clone)]
#[diesel(table_name = partner_preferences)]
#[diesel(primary_key(profile_id))]
pub struct PartnerPreferences {
    pub profile_id: Uuid,
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
    pub age_dealbreaker: Option<bool>,
    pub height_min: Option<String>,
    pub height_max: Option<String>,
    pub height_dealbreaker: Option<bool>,
    pub marital_status: Option<String>,
    pub marital_status_dealbreaker: Option<bool>,
    pub religion: Option<String>,
    pub religion_dealbreaker: Option<bool>,
    pub community: Option<String>,
    pub community_dealbreaker: Option<bool>,
    pub sub_community: Option<String>,
    pub sub_community_dealbreaker: Option<bool>,
    pub gotra: Option<String>,
    pub gotra_dealbreaker: Option<bool>,
    pub mother_tongue: Option<String>,
    pub mother_tongue_dealbreaker: Option<bool>,
    pub diet: Option<String>,
    pub diet_dealbreaker: Option<bool>,
    pub smoking: Option<String>,
    pub smoking_dealbreaker: Option<bool>,
    pub drinking: Option<String>,
    pub drinking_dealbreaker: Option<bool>,
    pub citizenship: Option<String>,
    pub citizenship_dealbreaker: Option<bool>,
    pub grew_up_in: Option<String>,
    pub grew_up_in_dealbreaker: Option<bool>,
    pub relocation: Option<String>,
    pub relocation_dealbreaker: Option<bool>,
    pub location: Option<String>,
    pub location_dealbreaker: Option<bool>,
    pub qualification: Option<String>,
    pub qualification_dealbreaker: Option<bool>,
    pub occupation: Option<String>,
    pub occupation_dealbreaker: Option<bool>,
    pub income: Option<String>,
    pub income_dealbreaker: Option<bool>,
    pub family_values: Option<String>,
    pub family_values_dealbreaker: Option<bool>,
    pub family_location: Option<String>,
    pub family_location_dealbreaker: Option<bool>,
    pub pets: Option<String>,
    pub pets_dealbreaker: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PartnerPreferences {
    /// A preferences record with no constraints, used for profiles that have
    /// never saved preferences. Everything passes.
    pub fn unconstrained(profile_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            profile_id,
            age_min: None,
            age_max: None,
            age_dealbreaker: None,
            height_min: None,
            height_max: None,
            height_dealbreaker: None,
            marital_status: None,
            marital_status_dealbreaker: None,
            religion: None,
            religion_dealbreaker: None,
            community: None,
            community_dealbreaker: None,
            sub_community: None,
            sub_community_dealbreaker: None,
            gotra: None,
            gotra_dealbreaker: None,
            mother_tongue: None,
            mother_tongue_dealbreaker: None,
            diet: None,
            diet_dealbreaker: None,
            smoking: None,
            smoking_dealbreaker: None,
            drinking: None,
            drinking_dealbreaker: None,
            citizenship: None,
            citizenship_dealbreaker: None,
            grew_up_in: None,
            grew_up_in_dealbreaker: None,
            relocation: None,
            relocation_dealbreaker: None,
            location: None,
            location_dealbreaker: None,
            qualification: None,
            qualification_dealbreaker: None,
            occupation: None,
            occupation_dealbreaker: None,
            income: None,
            income_dealbreaker: None,
            family_values: None,
            family_values_dealbreaker: None,
            family_location: None,
            family_location_dealbreaker: None,
            pets: None,
            pets_dealbreaker: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = partner_preferences)]
pub struct NewPartnerPreferences {
    pub profile_id: Uuid,
}

#[derive(Debug, AsChangeset, Deserialize, Default)]
#[diesel(table_name = partner_preferences)]
pub struct UpdatePartnerPreferences {
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
    pub age_dealbreaker: Option<bool>,
    pub height_min: Option<String>,
    pub height_max: Option<String>,
    pub height_dealbreaker: Option<bool>,
    pub marital_status: Option<String>,
    pub marital_status_dealbreaker: Option<bool>,
    pub religion: Option<String>,
    pub religion_dealbreaker: Option<bool>,
    pub community: Option<String>,
    pub community_dealbreaker: Option<bool>,
    pub sub_community: Option<String>,
    pub sub_community_dealbreaker: Option<bool>,
    pub gotra: Option<String>,
    pub gotra_dealbreaker: Option<bool>,
    pub mother_tongue: Option<String>,
    pub mother_tongue_dealbreaker: Option<bool>,
    pub diet: Option<String>,
    pub diet_dealbreaker: Option<bool>,
    pub smoking: Option<String>,
    pub smoking_dealbreaker: Option<bool>,
    pub drinking: Option<String>,
    pub drinking_dealbreaker: Option<bool>,
    pub citizenship: Option<String>,
    pub citizenship_dealbreaker: Option<bool>,
    pub grew_up_in: Option<String>,
    pub grew_up_in_dealbreaker: Option<bool>,
    pub relocation: Option<String>,
    pub relocation_dealbreaker: Option<bool>,
    pub location: Option<String>,
    pub location_dealbreaker: Option<bool>,
    pub qualification: Option<String>,
    pub qualification_dealbreaker: Option<bool>,
    pub occupation: Option<String>,
    pub occupation_dealbreaker: Option<bool>,
    pub income: Option<String>,
    pub income_dealbreaker: Option<bool>,
    pub family_values: Option<String>,
    pub family_values_dealbreaker: Option<bool>,
    pub family_location: Option<String>,
    pub family_location_dealbreaker: Option<bool>,
    pub pets: Option<String>,
    pub pets_dealbreaker: Option<bool>,
}

// --- Interest ---

#[derive(Debug, Queryable, Identifiable, Serialize, Clone)]
#[diesel(table_name = interests)]
pub struct Interest {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub status: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = interests)]
pub struct NewInterest {
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub status: String,
    pub message: Option<String>,
}

// --- Declined profile ---

#[derive(Debug, Queryable, Identifiable, Serialize)]
#[diesel(table_name = declined_profiles)]
pub struct DeclinedProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub declined_user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = declined_profiles)]
pub struct NewDeclinedProfile {
    pub user_id: Uuid,
    pub declined_user_id: Uuid,
}
