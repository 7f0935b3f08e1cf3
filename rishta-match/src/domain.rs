//! Closed vocabularies for profile and interest fields.
//!
//! Historical data carries many spellings for the same value ("Non Vegetarian",
//! "non-veg", "NON VEGETARIAN"). Each vocabulary absorbs its known synonyms in
//! `FromStr` so everything downstream of the write boundary sees one canonical
//! form. The evaluator never special-cases casing or synonyms.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn opposite(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" => Ok(Gender::Male),
            "female" | "f" | "woman" => Ok(Gender::Female),
            _ => Err(format!("unknown gender: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    NeverMarried,
    Divorced,
    Widowed,
    Annulled,
}

impl std::fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MaritalStatus::NeverMarried => "never_married",
            MaritalStatus::Divorced => "divorced",
            MaritalStatus::Widowed => "widowed",
            MaritalStatus::Annulled => "annulled",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for MaritalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "never_married" | "single" | "unmarried" => Ok(MaritalStatus::NeverMarried),
            "divorced" => Ok(MaritalStatus::Divorced),
            "widowed" | "widow" | "widower" => Ok(MaritalStatus::Widowed),
            "annulled" => Ok(MaritalStatus::Annulled),
            _ => Err(format!("unknown marital status: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    Vegetarian,
    NonVegetarian,
    Eggetarian,
    Vegan,
    Jain,
}

impl std::fmt::Display for Diet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Diet::Vegetarian => "vegetarian",
            Diet::NonVegetarian => "non_vegetarian",
            Diet::Eggetarian => "eggetarian",
            Diet::Vegan => "vegan",
            Diet::Jain => "jain",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Diet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "vegetarian" | "veg" | "pure_veg" => Ok(Diet::Vegetarian),
            "non_vegetarian" | "non_veg" | "nonvegetarian" => Ok(Diet::NonVegetarian),
            "eggetarian" | "egg" => Ok(Diet::Eggetarian),
            "vegan" => Ok(Diet::Vegan),
            "jain" => Ok(Diet::Jain),
            _ => Err(format!("unknown diet: {s}")),
        }
    }
}

/// Smoking/drinking frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Habit {
    No,
    Occasionally,
    Yes,
}

impl std::fmt::Display for Habit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Habit::No => "no",
            Habit::Occasionally => "occasionally",
            Habit::Yes => "yes",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Habit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "no" | "never" | "non_smoker" | "non-smoker" | "doesn't drink" => Ok(Habit::No),
            "occasionally" | "socially" | "sometimes" | "social" => Ok(Habit::Occasionally),
            "yes" | "regularly" | "daily" => Ok(Habit::Yes),
            _ => Err(format!("unknown habit value: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ModerationStatus::Pending => "pending",
            ModerationStatus::Approved => "approved",
            ModerationStatus::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ModerationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(ModerationStatus::Pending),
            "approved" => Ok(ModerationStatus::Approved),
            "rejected" => Ok(ModerationStatus::Rejected),
            _ => Err(format!("unknown moderation status: {s}")),
        }
    }
}

/// Status of a directed interest edge. Absence of a row means no interest
/// was ever expressed; rows are never deleted, only transitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl std::fmt::Display for InterestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InterestStatus::Pending => "pending",
            InterestStatus::Accepted => "accepted",
            InterestStatus::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for InterestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(InterestStatus::Pending),
            "accepted" => Ok(InterestStatus::Accepted),
            "rejected" => Ok(InterestStatus::Rejected),
            _ => Err(format!("unknown interest status: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RespondAction {
    Accept,
    Reject,
    Reconsider,
}

impl std::fmt::Display for RespondAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RespondAction::Accept => "accept",
            RespondAction::Reject => "reject",
            RespondAction::Reconsider => "reconsider",
        };
        write!(f, "{s}")
    }
}

/// Every preference field that can carry a dealbreaker flag, with its
/// default when the stored flag is NULL. Historical rows predate the flag
/// columns; the core attributes were hard filters before the flag existed,
/// so they default hard. One table, not scattered null-checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefField {
    Age,
    Height,
    MaritalStatus,
    Religion,
    Community,
    SubCommunity,
    Gotra,
    MotherTongue,
    Diet,
    Smoking,
    Drinking,
    Citizenship,
    GrewUpIn,
    Relocation,
    Location,
    Qualification,
    Occupation,
    Income,
    FamilyValues,
    FamilyLocation,
    Pets,
}

impl PrefField {
    pub fn hard_by_default(self) -> bool {
        matches!(
            self,
            PrefField::Age
                | PrefField::Height
                | PrefField::MaritalStatus
                | PrefField::Diet
                | PrefField::Smoking
                | PrefField::Drinking
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diet_synonyms_collapse() {
        assert_eq!("Non Vegetarian".parse::<Diet>().unwrap(), Diet::NonVegetarian);
        assert_eq!("non-veg".parse::<Diet>().unwrap(), Diet::NonVegetarian);
        assert_eq!("Vegetarian".parse::<Diet>().unwrap(), Diet::Vegetarian);
        assert_eq!("vegetarian".parse::<Diet>().unwrap(), Diet::Vegetarian);
    }

    #[test]
    fn marital_status_synonyms_collapse() {
        assert_eq!("Never Married".parse::<MaritalStatus>().unwrap(), MaritalStatus::NeverMarried);
        assert_eq!("single".parse::<MaritalStatus>().unwrap(), MaritalStatus::NeverMarried);
        assert_eq!("Widower".parse::<MaritalStatus>().unwrap(), MaritalStatus::Widowed);
    }

    #[test]
    fn habit_synonyms_collapse() {
        assert_eq!("Socially".parse::<Habit>().unwrap(), Habit::Occasionally);
        assert_eq!("Never".parse::<Habit>().unwrap(), Habit::No);
    }

    #[test]
    fn interest_status_round_trip() {
        for status in [InterestStatus::Pending, InterestStatus::Accepted, InterestStatus::Rejected] {
            assert_eq!(status.to_string().parse::<InterestStatus>().unwrap(), status);
        }
    }

    #[test]
    fn core_fields_default_hard() {
        assert!(PrefField::Age.hard_by_default());
        assert!(PrefField::Diet.hard_by_default());
        assert!(!PrefField::Community.hard_by_default());
        assert!(!PrefField::Location.hard_by_default());
    }
}
