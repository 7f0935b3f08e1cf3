//! Age derivation from historical date-of-birth strings.
//!
//! Profiles imported across several product generations carry DOBs in four
//! formats: `MM/DD/YYYY`, `MM/YYYY`, `DD.MM.YYYY`, and ISO `YYYY-MM-DD`.
//! A DOB that parses in none of them makes the profile un-filterable by age,
//! and the gate passes. Parse failure is "cannot evaluate" — never a
//! sentinel age.

use chrono::{Datelike, NaiveDate, Utc};

pub fn parse_dob(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in ["%m/%d/%Y", "%d.%m.%Y", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    // MM/YYYY: month resolution only, pinned to the 1st.
    let parts: Vec<&str> = trimmed.split('/').collect();
    if parts.len() == 2 {
        if let (Ok(month), Ok(year)) = (parts[0].parse::<u32>(), parts[1].parse::<i32>()) {
            return NaiveDate::from_ymd_opt(year, month, 1);
        }
    }

    None
}

/// Exact age in completed years as of `today`.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Inclusive age-range gate from the seeker's perspective.
pub fn age_gate(
    age_min: Option<i32>,
    age_max: Option<i32>,
    dealbreaker: bool,
    candidate_dob: Option<&str>,
) -> bool {
    if !dealbreaker || (age_min.is_none() && age_max.is_none()) {
        return true;
    }

    let age = match candidate_dob.and_then(parse_dob) {
        Some(dob) => age_on(dob, Utc::now().date_naive()),
        None => return true, // cannot evaluate
    };

    if let Some(min) = age_min {
        if age < min {
            return false;
        }
    }
    if let Some(max) = age_max {
        if age > max {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_historical_formats() {
        assert_eq!(parse_dob("03/25/1992"), NaiveDate::from_ymd_opt(1992, 3, 25));
        assert_eq!(parse_dob("25.03.1992"), NaiveDate::from_ymd_opt(1992, 3, 25));
        assert_eq!(parse_dob("1992-03-25"), NaiveDate::from_ymd_opt(1992, 3, 25));
        assert_eq!(parse_dob("03/1992"), NaiveDate::from_ymd_opt(1992, 3, 1));
    }

    #[test]
    fn garbage_does_not_parse() {
        assert_eq!(parse_dob(""), None);
        assert_eq!(parse_dob("not a date"), None);
        assert_eq!(parse_dob("13/45/1992"), None);
    }

    #[test]
    fn age_counts_completed_years() {
        let dob = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        // Day before the birthday
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()), 33);
        // On the birthday
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()), 34);
        // Day after
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()), 34);
    }

    #[test]
    fn range_is_inclusive_at_both_ends() {
        let today = Utc::now().date_naive();
        let dob_30 = NaiveDate::from_ymd_opt(today.year() - 30, 1, 1).unwrap();
        let dob = format!("{:02}/{:02}/{}", dob_30.month(), dob_30.day(), dob_30.year());

        assert!(age_gate(Some(30), Some(35), true, Some(&dob)));
        assert!(age_gate(Some(25), Some(30), true, Some(&dob)));
        assert!(!age_gate(Some(31), Some(35), true, Some(&dob)));
        assert!(!age_gate(Some(25), Some(29), true, Some(&dob)));
    }

    #[test]
    fn unparsable_dob_passes() {
        assert!(age_gate(Some(25), Some(30), true, Some("unknown")));
        assert!(age_gate(Some(25), Some(30), true, None));
    }

    #[test]
    fn non_dealbreaker_passes() {
        assert!(age_gate(Some(25), Some(26), false, Some("01/01/1950")));
    }
}
