//! Layered location matching.
//!
//! Preference text is free-form ("California would be ideal", "Bay Area",
//! "USA", "Dallas"). Resolution is tried most-specific-semantics-first:
//! country-level, then a strict state match, then named-region aliases, then
//! plain substring containment in either direction.

use super::fields::accepts_any;

const COUNTRY_TOKENS: &[&str] = &[
    "usa",
    "us",
    "united states",
    "united states of america",
    "america",
];

/// Phrases users pad their preference text with; stripped before resolution.
const FILLER_PHRASES: &[&str] = &["would be ideal", "is preferred", "preferred", "prefer", "ideally"];

/// (full name, postal abbreviation) for every US state plus DC.
const US_STATES: &[(&str, &str)] = &[
    ("alabama", "AL"), ("alaska", "AK"), ("arizona", "AZ"), ("arkansas", "AR"),
    ("california", "CA"), ("colorado", "CO"), ("connecticut", "CT"), ("delaware", "DE"),
    ("florida", "FL"), ("georgia", "GA"), ("hawaii", "HI"), ("idaho", "ID"),
    ("illinois", "IL"), ("indiana", "IN"), ("iowa", "IA"), ("kansas", "KS"),
    ("kentucky", "KY"), ("louisiana", "LA"), ("maine", "ME"), ("maryland", "MD"),
    ("massachusetts", "MA"), ("michigan", "MI"), ("minnesota", "MN"), ("mississippi", "MS"),
    ("missouri", "MO"), ("montana", "MT"), ("nebraska", "NE"), ("nevada", "NV"),
    ("new hampshire", "NH"), ("new jersey", "NJ"), ("new mexico", "NM"), ("new york", "NY"),
    ("north carolina", "NC"), ("north dakota", "ND"), ("ohio", "OH"), ("oklahoma", "OK"),
    ("oregon", "OR"), ("pennsylvania", "PA"), ("rhode island", "RI"), ("south carolina", "SC"),
    ("south dakota", "SD"), ("tennessee", "TN"), ("texas", "TX"), ("utah", "UT"),
    ("vermont", "VT"), ("virginia", "VA"), ("washington", "WA"), ("west virginia", "WV"),
    ("wisconsin", "WI"), ("wyoming", "WY"), ("washington dc", "DC"),
];

/// Metro-area aliases matched by representative substrings.
const REGION_ALIASES: &[(&str, &[&str])] = &[
    ("bay area", &["bay area", "san francisco", "san jose", "oakland", "fremont", "palo alto", "sunnyvale", "mountain view", "cupertino"]),
    ("socal", &["socal", "southern california", "los angeles", "san diego", "orange county", "irvine"]),
    ("norcal", &["norcal", "northern california", "sacramento", "san francisco", "san jose"]),
    ("dmv", &["dmv", "washington dc", "district of columbia", "arlington", "bethesda", "alexandria"]),
    ("tri-state", &["tri-state", "tristate", "new york", "new jersey", "connecticut"]),
];

/// Strips filler phrases and punctuation from preference text.
fn clean_preference(raw: &str) -> String {
    let mut text = raw.trim().to_lowercase();
    for phrase in FILLER_PHRASES {
        text = text.replace(phrase, " ");
    }
    text.trim_matches(|c: char| c.is_whitespace() || c == ',' || c == '.')
        .to_string()
}

/// Resolves text that IS a state reference (the whole cleaned preference).
fn state_from_preference(text: &str) -> Option<&'static str> {
    US_STATES
        .iter()
        .find(|(full, abbr)| *full == text || abbr.to_lowercase() == text)
        .map(|(full, _)| *full)
}

/// Finds a state mentioned ANYWHERE in a location string. Full names match
/// as substrings; abbreviations only as standalone uppercase tokens, so
/// "Indore, India" does not resolve to Indiana via "IN".
fn state_in_location(location: &str) -> Option<&'static str> {
    let lowered = location.to_lowercase();
    if let Some((full, _)) = US_STATES.iter().find(|(full, _)| lowered.contains(full)) {
        return Some(full);
    }

    for token in location.split(|c: char| !c.is_ascii_alphabetic()) {
        if token.len() == 2 && token.chars().all(|c| c.is_ascii_uppercase()) {
            if let Some((full, _)) = US_STATES.iter().find(|(_, abbr)| *abbr == token) {
                return Some(full);
            }
        }
    }
    None
}

/// True when a location string carries any US marker (state or country word).
fn mentions_us(location: &str) -> bool {
    if state_in_location(location).is_some() {
        return true;
    }
    let lowered = location.to_lowercase();
    COUNTRY_TOKENS.iter().any(|token| {
        lowered
            .split(|c: char| !c.is_ascii_alphanumeric())
            .any(|word| word == *token)
            || lowered.contains("united states")
    })
}

pub fn location_gate(pref: Option<&str>, dealbreaker: bool, candidate_location: Option<&str>) -> bool {
    if !dealbreaker || accepts_any(pref) {
        return true;
    }

    let candidate = match candidate_location {
        Some(loc) if !loc.trim().is_empty() => loc,
        _ => return true, // cannot evaluate
    };

    let cleaned = clean_preference(pref.expect("accepts_any handled None"));
    if cleaned.is_empty() {
        return true;
    }

    // Country-level preference: any recognizable US location passes.
    if COUNTRY_TOKENS.contains(&cleaned.as_str()) {
        return mentions_us(candidate);
    }

    // State-level preference: strict state identity, not substring.
    if let Some(wanted_state) = state_from_preference(&cleaned) {
        return state_in_location(candidate) == Some(wanted_state);
    }

    // Named metro regions.
    for (alias, markers) in REGION_ALIASES {
        if cleaned.contains(alias) {
            let lowered = candidate.to_lowercase();
            return markers.iter().any(|marker| lowered.contains(marker));
        }
    }

    // Fallback: containment in either direction.
    let lowered = candidate.to_lowercase();
    lowered.contains(&cleaned) || cleaned.contains(&lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_preference_is_strict() {
        assert!(location_gate(Some("Texas"), true, Some("Houston, Texas")));
        assert!(location_gate(Some("Texas"), true, Some("Dallas, TX")));
        assert!(!location_gate(Some("Texas"), true, Some("Bay Area, California")));
        assert!(!location_gate(Some("Texas"), true, Some("Toronto, Canada")));
    }

    #[test]
    fn abbreviation_preference_resolves_to_state() {
        assert!(location_gate(Some("TX"), true, Some("Houston, Texas")));
        assert!(!location_gate(Some("TX"), true, Some("Phoenix, AZ")));
    }

    #[test]
    fn country_preference_accepts_any_us_state() {
        assert!(location_gate(Some("USA"), true, Some("Dallas, TX")));
        assert!(location_gate(Some("usa"), true, Some("Seattle, Washington")));
        assert!(location_gate(Some("United States"), true, Some("Edison, New Jersey")));
        assert!(!location_gate(Some("USA"), true, Some("Mumbai, Maharashtra")));
    }

    #[test]
    fn region_alias_matches_representative_cities() {
        assert!(location_gate(Some("Bay Area"), true, Some("Fremont, California")));
        assert!(location_gate(Some("bay area"), true, Some("San Jose, CA")));
        assert!(!location_gate(Some("Bay Area"), true, Some("Los Angeles, California")));
    }

    #[test]
    fn filler_phrases_are_stripped() {
        assert!(location_gate(Some("California would be ideal"), true, Some("San Diego, California")));
        assert!(location_gate(Some("prefer New Jersey"), true, Some("Edison, NJ")));
    }

    #[test]
    fn abbreviation_tokens_do_not_false_positive_inside_words() {
        // "Indore, India" must not resolve to Indiana through "in".
        assert!(!location_gate(Some("Indiana"), true, Some("Indore, India")));
    }

    #[test]
    fn substring_fallback_both_directions() {
        assert!(location_gate(Some("Austin"), true, Some("Austin, Texas")));
        assert!(location_gate(Some("Greater Austin Area"), true, Some("austin")));
        assert!(!location_gate(Some("Austin"), true, Some("Houston")));
    }

    #[test]
    fn missing_data_passes() {
        assert!(location_gate(None, true, Some("Dallas, TX")));
        assert!(location_gate(Some("doesn't matter"), true, Some("Dallas, TX")));
        assert!(location_gate(Some("Texas"), true, None));
        assert!(location_gate(Some("Texas"), false, Some("California")));
    }
}
