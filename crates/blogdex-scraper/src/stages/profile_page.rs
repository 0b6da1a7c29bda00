//! Profile intro page: neighbor count and blog start date.

use blogdex_core::types::BlogProfile;
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use scraper::Html;

use crate::parse_util::{element_text, first_number, selector};

/// Apply the profile-page extractors to `profile`.
///
/// `now` anchors the blog-age computation.
pub(crate) fn apply_profile_page(html: &str, now: NaiveDateTime, profile: &mut BlogProfile) {
    let document = Html::parse_document(html);

    let neighbor = selector(".neighbor_count, .buddy_count");
    if let Some(elem) = document.select(&neighbor).next() {
        if let Some(count) = first_number(&element_text(elem)) {
            profile.neighbors = count;
        }
    }

    // "2019.3.14" shaped start date in the since element.
    let since = selector(".since, .blog_since");
    if let Some(elem) = document.select(&since).next() {
        let text = element_text(elem);
        let date = Regex::new(r"(\d{4})\.(\d{1,2})\.(\d{1,2})").expect("valid regex");
        if let Some(cap) = date.captures(&text) {
            let parsed = (
                cap[1].parse::<i32>(),
                cap[2].parse::<u32>(),
                cap[3].parse::<u32>(),
            );
            if let (Ok(year), Ok(month), Ok(day)) = parsed {
                if let Some(start) = NaiveDate::from_ymd_opt(year, month, day) {
                    let days = (now.date() - start).num_days();
                    profile.blog_age_days = u32::try_from(days.max(0)).unwrap_or(0);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 15)
            .expect("valid date")
            .and_hms_opt(13, 0, 0)
            .expect("valid time")
    }

    #[test]
    fn extracts_neighbors_and_age() {
        let html = r#"
            <div class="profile">
              <span class="buddy_count">이웃 842명</span>
              <span class="since">블로그 시작 2024.1.15</span>
            </div>
        "#;
        let mut profile = BlogProfile::new("tester");
        apply_profile_page(html, now(), &mut profile);
        assert_eq!(profile.neighbors, 842);
        // 2024-01-15 → 2026-01-15 spans one leap year.
        assert_eq!(profile.blog_age_days, 731);
    }

    #[test]
    fn malformed_since_date_leaves_age_unset() {
        let html = r#"<span class="since">since 2024.13.99</span>"#;
        let mut profile = BlogProfile::new("tester");
        apply_profile_page(html, now(), &mut profile);
        assert_eq!(profile.blog_age_days, 0);
    }

    #[test]
    fn future_start_date_clamps_to_zero() {
        let html = r#"<span class="since">2030.1.1</span>"#;
        let mut profile = BlogProfile::new("tester");
        apply_profile_page(html, now(), &mut profile);
        assert_eq!(profile.blog_age_days, 0);
    }

    #[test]
    fn profile_neighbor_count_overwrites_earlier_value() {
        let html = r#"<span class="neighbor_count">1,500</span>"#;
        let mut profile = BlogProfile::new("tester");
        profile.neighbors = 900;
        apply_profile_page(html, now(), &mut profile);
        assert_eq!(profile.neighbors, 1500);
    }
}
