//! Metadata formatting helpers.

/// Maximum description length before truncation.
const DESCRIPTION_MAX_CHARS: usize = 200;

/// Parse an ISO-8601 duration token (`PT1H2M3S`) into a human string.
///
/// Hours present: `H:MM:SS`; otherwise `M:SS`. Absent components default to
/// zero, and anything unparseable comes back as `"0:00"`.
pub fn parse_duration(duration: &str) -> String {
    let Some(body) = duration.strip_prefix("PT") else {
        return "0:00".to_string();
    };

    let mut hours: u64 = 0;
    let mut minutes: u64 = 0;
    let mut seconds: u64 = 0;
    let mut digits = String::new();

    for ch in body.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        let value: u64 = digits.parse().unwrap_or(0);
        digits.clear();
        match ch {
            'H' => hours = value,
            'M' => minutes = value,
            'S' => seconds = value,
            _ => return "0:00".to_string(),
        }
    }

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Format a view count with a compact suffix: `1.2M`, `15.0K`, `850`.
pub fn format_view_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Truncate a description to 200 characters, appending an ellipsis marker.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        let head: String = description.chars().take(DESCRIPTION_MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        description.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_with_hours() {
        assert_eq!(parse_duration("PT1H2M3S"), "1:02:03");
    }

    #[test]
    fn test_duration_minutes_seconds() {
        assert_eq!(parse_duration("PT5M9S"), "5:09");
        assert_eq!(parse_duration("PT10M30S"), "10:30");
    }

    #[test]
    fn test_duration_zero_and_partial() {
        assert_eq!(parse_duration("PT0S"), "0:00");
        assert_eq!(parse_duration("PT2H"), "2:00:00");
        assert_eq!(parse_duration("PT45S"), "0:45");
    }

    #[test]
    fn test_duration_garbage() {
        assert_eq!(parse_duration(""), "0:00");
        assert_eq!(parse_duration("P1D"), "0:00");
        assert_eq!(parse_duration("PT1X"), "0:00");
    }

    #[test]
    fn test_view_counts() {
        assert_eq!(format_view_count(1_200_000), "1.2M");
        assert_eq!(format_view_count(15_000), "15.0K");
        assert_eq!(format_view_count(850), "850");
        assert_eq!(format_view_count(0), "0");
        assert_eq!(format_view_count(999_999), "1000.0K");
    }

    #[test]
    fn test_description_truncation() {
        let short = "a short description";
        assert_eq!(truncate_description(short), short);

        let long = "x".repeat(250);
        let truncated = truncate_description(&long);
        assert_eq!(truncated.chars().count(), 203);
        assert!(truncated.ends_with("..."));
    }
}
