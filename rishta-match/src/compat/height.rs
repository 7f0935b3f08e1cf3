//! Height tokens of the form `5'8"`, parsed to total inches.
//!
//! Malformed tokens parse to `None`, and a range gate that cannot evaluate
//! passes. A parse failure must never behave as height zero: a zero would
//! incorrectly satisfy any range whose minimum is unset or zero.

const MIN_FEET: i32 = 3;
const MAX_FEET: i32 = 8;

/// Parses `feet'inches"` to total inches. Tolerates curly quotes, spaces
/// after the apostrophe, and a missing trailing quote mark.
pub fn parse_height(raw: &str) -> Option<i32> {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| match c {
            '\u{2019}' => '\'', // curly apostrophe
            '\u{201d}' => '"',  // curly double quote
            c => c,
        })
        .collect();

    let (feet_part, rest) = cleaned.split_once('\'')?;
    let feet: i32 = feet_part.trim().parse().ok()?;

    let inches_part = rest.trim().trim_end_matches('"').trim();
    let inches: i32 = if inches_part.is_empty() {
        0
    } else {
        inches_part.parse().ok()?
    };

    if !(MIN_FEET..=MAX_FEET).contains(&feet) || !(0..=11).contains(&inches) {
        return None;
    }

    Some(feet * 12 + inches)
}

pub fn format_height(total_inches: i32) -> String {
    format!("{}'{}\"", total_inches / 12, total_inches % 12)
}

/// Inclusive height-range gate; the bounds are stored as height tokens.
pub fn height_gate(
    height_min: Option<&str>,
    height_max: Option<&str>,
    dealbreaker: bool,
    candidate_height: Option<&str>,
) -> bool {
    if !dealbreaker {
        return true;
    }

    let min = height_min.and_then(parse_height);
    let max = height_max.and_then(parse_height);
    if min.is_none() && max.is_none() {
        return true;
    }

    let height = match candidate_height.and_then(parse_height) {
        Some(h) => h,
        None => return true, // cannot evaluate
    };

    if let Some(min) = min {
        if height < min {
            return false;
        }
    }
    if let Some(max) = max {
        if height > max {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_tokens() {
        assert_eq!(parse_height("5'8\""), Some(68));
        assert_eq!(parse_height("5' 8\""), Some(68));
        assert_eq!(parse_height("5'8"), Some(68));
        assert_eq!(parse_height("6'0\""), Some(72));
        assert_eq!(parse_height("5'"), Some(60));
        assert_eq!(parse_height("5\u{2019}8\u{201d}"), Some(68));
    }

    #[test]
    fn round_trips_supported_range() {
        for inches in 48..=95 {
            // 4'0" through 7'11"
            assert_eq!(parse_height(&format_height(inches)), Some(inches));
        }
    }

    #[test]
    fn malformed_tokens_are_none_not_zero() {
        assert_eq!(parse_height(""), None);
        assert_eq!(parse_height("tall"), None);
        assert_eq!(parse_height("170cm"), None);
        assert_eq!(parse_height("5'13\""), None);
        assert_eq!(parse_height("9'0\""), None);
    }

    #[test]
    fn range_is_inclusive() {
        assert!(height_gate(Some("5'4\""), Some("5'10\""), true, Some("5'4\"")));
        assert!(height_gate(Some("5'4\""), Some("5'10\""), true, Some("5'10\"")));
        assert!(!height_gate(Some("5'4\""), Some("5'10\""), true, Some("5'11\"")));
        assert!(!height_gate(Some("5'4\""), Some("5'10\""), true, Some("5'3\"")));
    }

    #[test]
    fn unparsable_candidate_height_passes() {
        // Even against a range that starts at the scale's bottom.
        assert!(height_gate(Some("3'0\""), Some("5'0\""), true, Some("unknown")));
        assert!(height_gate(Some("5'4\""), None, true, None));
    }

    #[test]
    fn open_range_passes() {
        assert!(height_gate(None, None, true, Some("5'8\"")));
    }
}
