//! Mobile home page: gap-filler for profile image, neighbors, visitors,
//! and an authoritative total-post correction.
//!
//! Runs last among the blog-level stages. Everything here fills only
//! fields the earlier stages left at their defaults, except `totalCount`,
//! which may raise (never lower) the post count.

use blogdex_core::types::BlogProfile;
use regex::Regex;

use crate::parse_util::parse_grouped;

pub(crate) fn apply_mobile_page(html: &str, profile: &mut BlogProfile) {
    fill_profile_image(html, profile);

    // "25명의 이웃"
    let buddy = Regex::new(r"(\d+)명의\s*이웃").expect("valid regex");
    if profile.neighbors == 0 {
        if let Some(cap) = buddy.captures(html) {
            if let Ok(count) = cap[1].parse() {
                profile.neighbors = count;
            }
        }
    }

    fill_visitors(html, profile);

    // JSON-rendered total post count; trusted over the list-page figure
    // only when larger.
    let total_count = Regex::new(r#""totalCount"\s*:\s*(\d+)"#).expect("valid regex");
    if let Some(cap) = total_count.captures(html) {
        if let Ok(count) = cap[1].parse::<u32>() {
            if count > profile.total_posts {
                profile.total_posts = count;
            }
        }
    }
}

fn fill_profile_image(html: &str, profile: &mut BlogProfile) {
    if profile.profile_image.as_deref().is_some_and(|s| !s.is_empty()) {
        return;
    }

    let json_url = Regex::new(r#""profileImageUrl"\s*:\s*"([^"]+)""#).expect("valid regex");
    if let Some(cap) = json_url.captures(html) {
        profile.profile_image = Some(cap[1].replace("\\/", "/"));
        return;
    }

    let direct_url =
        Regex::new(r#"(?i)(https://[^"']*(?:blogpfp|profile)[^"']*\.(?:jpg|png|gif))"#)
            .expect("valid regex");
    if let Some(cap) = direct_url.captures(html) {
        profile.profile_image = Some(cap[1].to_string());
    }
}

fn fill_visitors(html: &str, profile: &mut BlogProfile) {
    // "오늘 X 어제 Y 전체 Z" — full pattern first, then the variant without
    // the yesterday figure.
    let full =
        Regex::new(r"(?s)오늘\s*(\d+).*?어제\s*(\d+).*?전체\s*([\d,]+)").expect("valid regex");
    if let Some(cap) = full.captures(html) {
        if profile.daily_visitors == 0 {
            if let Ok(count) = cap[1].parse() {
                profile.daily_visitors = count;
            }
        }
        if profile.yesterday_visitors == 0 {
            if let Ok(count) = cap[2].parse() {
                profile.yesterday_visitors = count;
            }
        }
        if profile.total_visitors == 0 {
            if let Some(count) = parse_grouped(&cap[3]) {
                profile.total_visitors = count;
            }
        }
    } else {
        let partial = Regex::new(r"(?s)오늘\s*(\d+).*?전체\s*([\d,]+)").expect("valid regex");
        if let Some(cap) = partial.captures(html) {
            if profile.daily_visitors == 0 {
                if let Ok(count) = cap[1].parse() {
                    profile.daily_visitors = count;
                }
            }
            if profile.total_visitors == 0 {
                if let Some(count) = parse_grouped(&cap[2]) {
                    profile.total_visitors = count;
                }
            }
        }
    }

    if profile.yesterday_visitors == 0 {
        let yesterday = Regex::new(r"어제\s*(\d[\d,]*)").expect("valid regex");
        if let Some(cap) = yesterday.captures(html) {
            if let Some(count) = parse_grouped(&cap[1]) {
                profile.yesterday_visitors = count;
            }
        }
    }
}
