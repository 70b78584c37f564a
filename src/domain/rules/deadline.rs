use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// Deadline used for review phrases nothing can be read from; sorts last ascending.
pub const UNKNOWN_DEADLINE_DAYS: u32 = 999;

const REVIEW_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

fn days_pattern() -> &'static Regex {
    static DAYS: OnceLock<Regex> = OnceLock::new();
    DAYS.get_or_init(|| Regex::new(r"(?i)(\d+)\s*days?\b").expect("days pattern should compile"))
}

pub fn parse_review_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    REVIEW_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// Days until review for a free-text review-by value such as `"Review in 5 days"`.
///
/// An explicit day count wins; otherwise `today` and `final` count as due
/// now. A calendar date counts down from `today` and clamps at zero once past.
pub fn deadline_days(text: &str, today: NaiveDate) -> u32 {
    let lowered = text.trim().to_ascii_lowercase();
    if let Some(days) = days_pattern()
        .captures(&lowered)
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
    {
        return days;
    }
    if lowered.contains("today") || lowered.contains("final") {
        return 0;
    }
    if let Some(date) = parse_review_date(text) {
        let remaining = (date - today).num_days().max(0);
        return u32::try_from(remaining).unwrap_or(UNKNOWN_DEADLINE_DAYS);
    }
    UNKNOWN_DEADLINE_DAYS
}
