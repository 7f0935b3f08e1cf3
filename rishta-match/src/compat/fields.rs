//! Dealbreaker-gated categorical field checks.
//!
//! A preference value may be a single token, a JSON-encoded array, or a
//! comma-separated list of acceptable values. Missing candidate data always
//! passes: an attribute that cannot be evaluated must not shrink the pool.

/// Placeholder values meaning "no constraint". Matched after trim+lowercase.
const OPEN_VALUES: &[&str] = &[
    "",
    "doesn't matter",
    "doesnt matter",
    "does not matter",
    "any",
    "no preference",
    "open to all",
];

/// True when the preference expresses no constraint at all.
pub fn accepts_any(pref: Option<&str>) -> bool {
    match pref {
        None => true,
        Some(raw) => OPEN_VALUES.contains(&raw.trim().to_lowercase().as_str()),
    }
}

/// Splits a stored preference into its acceptable values.
///
/// Historical rows encode sets three ways: a bare token, a JSON array
/// (`["brahmin","iyer"]`), or a comma-separated list. Values come back
/// trimmed and lowercased.
pub fn parse_choices(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();

    if trimmed.starts_with('[') {
        if let Ok(values) = serde_json::from_str::<Vec<String>>(trimmed) {
            return values
                .iter()
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
                .collect();
        }
    }

    trimmed
        .split(',')
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

/// One categorical gate. Passes unless the field is a dealbreaker with a
/// concrete preference AND the candidate's attribute is present but not
/// among the acceptable values.
pub fn choice_gate(pref: Option<&str>, dealbreaker: bool, candidate: Option<&str>) -> bool {
    if !dealbreaker || accepts_any(pref) {
        return true;
    }

    let candidate = match candidate {
        Some(v) if !v.trim().is_empty() => v.trim().to_lowercase(),
        _ => return true, // cannot evaluate
    };

    let pref = pref.expect("accepts_any handled None");
    parse_choices(pref).iter().any(|choice| *choice == candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_preferences_pass() {
        assert!(accepts_any(None));
        assert!(accepts_any(Some("")));
        assert!(accepts_any(Some("Doesn't Matter")));
        assert!(accepts_any(Some("any")));
        assert!(!accepts_any(Some("vegetarian")));
    }

    #[test]
    fn non_dealbreaker_never_blocks() {
        assert!(choice_gate(Some("vegetarian"), false, Some("non_vegetarian")));
    }

    #[test]
    fn dealbreaker_enforces_membership() {
        assert!(choice_gate(Some("vegetarian"), true, Some("vegetarian")));
        assert!(choice_gate(Some("Vegetarian"), true, Some("VEGETARIAN")));
        assert!(!choice_gate(Some("vegetarian"), true, Some("non_vegetarian")));
    }

    #[test]
    fn missing_candidate_attribute_passes() {
        assert!(choice_gate(Some("vegetarian"), true, None));
        assert!(choice_gate(Some("vegetarian"), true, Some("  ")));
    }

    #[test]
    fn dealbreaker_against_open_preference_is_non_binding() {
        // An inconsistent edit (flag set, value cleared) must not lock the
        // seeker out of every candidate.
        assert!(choice_gate(Some("doesn't matter"), true, Some("non_vegetarian")));
        assert!(choice_gate(None, true, Some("non_vegetarian")));
    }

    #[test]
    fn json_array_preference() {
        let choices = parse_choices(r#"["Brahmin", "Iyer"]"#);
        assert_eq!(choices, vec!["brahmin", "iyer"]);
        assert!(choice_gate(Some(r#"["Brahmin", "Iyer"]"#), true, Some("iyer")));
        assert!(!choice_gate(Some(r#"["Brahmin", "Iyer"]"#), true, Some("nair")));
    }

    #[test]
    fn comma_list_preference() {
        assert!(choice_gate(Some("hindi, tamil , telugu"), true, Some("Tamil")));
        assert!(!choice_gate(Some("hindi, tamil"), true, Some("kannada")));
    }
}
