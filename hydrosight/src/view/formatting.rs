//! Shared formatting utilities for the HydroSight views.

/// Format a Unix timestamp (milliseconds) relative to `now_ms`.
///
/// Returns strings like "just now", "5s ago", "3m ago", "2h ago".
pub fn format_timestamp(timestamp_ms: i64, now_ms: i64) -> String {
    let diff_ms = now_ms - timestamp_ms;

    if diff_ms < 1000 {
        "just now".to_string()
    } else if diff_ms < 60_000 {
        format!("{}s ago", diff_ms / 1000)
    } else if diff_ms < 3_600_000 {
        format!("{}m ago", diff_ms / 60_000)
    } else {
        format!("{}h ago", diff_ms / 3_600_000)
    }
}

/// Format a leak duration as minutes and seconds, e.g. "2m 5s".
pub fn format_duration(secs: u64) -> String {
    format!("{}m {}s", secs / 60, secs % 60)
}

/// Format a volume in gallons, dropping the fraction for whole numbers.
pub fn format_gallons(gallons: f64) -> String {
    if gallons.fract() == 0.0 {
        format!("{:.0}g", gallons)
    } else {
        format!("{:.1}g", gallons)
    }
}

/// Format a probability as a percentage with one decimal place.
pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let now = 10_000_000;
        assert_eq!(format_timestamp(now, now), "just now");
        assert_eq!(format_timestamp(now - 5_000, now), "5s ago");
        assert_eq!(format_timestamp(now - 15 * 60_000, now), "15m ago");
        assert_eq!(format_timestamp(now - 2 * 3_600_000, now), "2h ago");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0m 0s");
        assert_eq!(format_duration(59), "0m 59s");
        assert_eq!(format_duration(125), "2m 5s");
    }

    #[test]
    fn test_format_gallons() {
        assert_eq!(format_gallons(3.0), "3g");
        assert_eq!(format_gallons(14.2), "14.2g");
        assert_eq!(format_gallons(1.6), "1.6g");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.005), "0.5%");
        assert_eq!(format_percent(0.095), "9.5%");
    }
}
