//! Visitor-counter endpoint and prologue-page yesterday fallback.

use blogdex_core::types::BlogProfile;
use regex::Regex;

use crate::parse_util::parse_grouped;

/// Apply the counter-widget extractors to `profile`.
///
/// The endpoint returns a JSON-ish blob; the keys are matched loosely
/// because quoting varies between the widget's revisions.
pub(crate) fn apply_visitor_counter(body: &str, profile: &mut BlogProfile) {
    let today = Regex::new(r#"today["']?\s*:\s*["']?(\d+)"#).expect("valid regex");
    if let Some(cap) = today.captures(body) {
        if let Ok(count) = cap[1].parse() {
            profile.daily_visitors = count;
        }
    }

    let yesterday =
        Regex::new(r#"(?i)(?:yesterday|yester)["']?\s*:\s*["']?(\d+)"#).expect("valid regex");
    if let Some(cap) = yesterday.captures(body) {
        if let Ok(count) = cap[1].parse() {
            profile.yesterday_visitors = count;
        }
    }

    let total = Regex::new(r#"total["']?\s*:\s*["']?(\d+)"#).expect("valid regex");
    if let Some(cap) = total.captures(body) {
        if let Ok(count) = cap[1].parse() {
            profile.total_visitors = count;
        }
    }
}

/// Last-resort yesterday-visitor extraction from the prologue listing page.
/// Fills only when the counter endpoint yielded nothing.
pub(crate) fn apply_prologue_yesterday(body: &str, profile: &mut BlogProfile) {
    if profile.yesterday_visitors != 0 {
        return;
    }
    let yesterday =
        Regex::new(r"어제\s*(?:방문자?)?\s*[:：]?\s*(\d[\d,]*)").expect("valid regex");
    if let Some(cap) = yesterday.captures(body) {
        if let Some(count) = parse_grouped(&cap[1]) {
            profile.yesterday_visitors = count;
        }
    }
}
