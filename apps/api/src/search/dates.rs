use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown when a posting carries no timestamp.
pub const MISSING_DATE: &str = "N/A";

/// Formats a provider timestamp as e.g. "27 Aug 2025".
///
/// Missing or blank values become "N/A"; values that fail to parse are
/// returned unchanged.
pub fn format_posted_date(raw: Option<&str>) -> String {
    let raw = match raw.map(str::trim).filter(|r| !r.is_empty()) {
        Some(r) => r,
        None => return MISSING_DATE.to_string(),
    };

    parse_date(raw)
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    let naive = raw.trim_end_matches('Z');
    if let Ok(dt) = NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(naive, "%Y-%m-%d").ok()
}
