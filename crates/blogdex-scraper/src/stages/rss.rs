//! RSS feed: blog name, profile image, post summaries, 30-day post count.

use blogdex_core::types::{BlogProfile, PostSummary};
use chrono::{DateTime, Duration, NaiveDateTime};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::ScrapeError;
use crate::parse_util::strip_html;

/// Feed items beyond this are ignored.
const MAX_FEED_POSTS: usize = 50;

/// Description text is cut to this many characters before the ellipsis.
const DESCRIPTION_LEN: usize = 100;

/// RSS publication date format: `"Wed, 31 Dec 2025 11:05:39 +0900"`.
const PUB_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

#[derive(Debug, Default)]
pub(crate) struct RssFeed {
    pub blog_name: Option<String>,
    pub profile_image: Option<String>,
    pub posts: Vec<PostSummary>,
    /// Total `<item>` count, before the per-summary cap.
    pub item_count: usize,
}

/// Apply the RSS extractors to `profile`.
///
/// `now` anchors the trailing 30-day window.
pub(crate) fn apply_rss(xml: &str, now: NaiveDateTime, profile: &mut BlogProfile) {
    let feed = match parse_feed(xml) {
        Ok(feed) => feed,
        Err(e) => {
            tracing::warn!(blog = %profile.blog_id, error = %e, "RSS feed parse failed");
            return;
        }
    };

    if feed.blog_name.is_some() {
        profile.blog_name = feed.blog_name;
    }
    if feed.profile_image.is_some() {
        profile.profile_image = feed.profile_image;
    }
    if profile.total_posts == 0 {
        profile.total_posts = u32::try_from(feed.item_count).unwrap_or(u32::MAX);
    }
    profile.recent_30days_posts = count_recent(&feed.posts, now);
    profile.recent_posts = feed.posts;
}

/// Count posts whose publication date falls within the trailing 30 days.
/// A date that fails to parse is skipped, not an error.
fn count_recent(posts: &[PostSummary], now: NaiveDateTime) -> u32 {
    let cutoff = now - Duration::days(30);
    let mut count = 0u32;
    for post in posts {
        let Some(raw) = post.date.as_deref() else {
            continue;
        };
        match DateTime::parse_from_str(raw.trim(), PUB_DATE_FORMAT) {
            Ok(parsed) => {
                if parsed.naive_local() >= cutoff {
                    count += 1;
                }
            }
            Err(e) => {
                tracing::debug!(date = raw, error = %e, "unparseable feed date skipped");
            }
        }
    }
    count
}

/// Parse an RSS feed body into channel metadata and post summaries.
///
/// Handles CDATA-wrapped values and both `pubDate`/`pubdate` tag casings.
fn parse_feed(xml: &str) -> Result<RssFeed, ScrapeError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut feed = RssFeed::default();
    let mut in_item = false;
    let mut in_image = false;
    let mut current_tag = String::new();
    let mut current = PostSummary::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = std::str::from_utf8(e.name().as_ref())
                    .unwrap_or("")
                    .to_ascii_lowercase();
                match name.as_str() {
                    "item" => {
                        in_item = true;
                        current = PostSummary::default();
                    }
                    "image" => {
                        in_image = true;
                        current_tag = name;
                    }
                    _ => {
                        current_tag = name;
                    }
                }
            }
            Ok(Event::End(e)) => {
                let raw = e.name();
                let name = std::str::from_utf8(raw.as_ref())
                    .unwrap_or("")
                    .to_ascii_lowercase();
                match name.as_str() {
                    "item" => {
                        if in_item {
                            in_item = false;
                            feed.item_count += 1;
                            if feed.posts.len() < MAX_FEED_POSTS {
                                feed.posts.push(std::mem::take(&mut current));
                            }
                        }
                    }
                    "image" => in_image = false,
                    _ => {}
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().unwrap_or_default().into_owned();
                store_field(&mut feed, &mut current, in_item, in_image, &current_tag, text);
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                store_field(&mut feed, &mut current, in_item, in_image, &current_tag, text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ScrapeError::Xml(e)),
            _ => {}
        }
    }

    Ok(feed)
}

fn store_field(
    feed: &mut RssFeed,
    current: &mut PostSummary,
    in_item: bool,
    in_image: bool,
    tag: &str,
    text: String,
) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return;
    }
    if in_item {
        match tag {
            "title" => current.title = Some(trimmed.to_string()),
            "link" => current.link = Some(trimmed.to_string()),
            "pubdate" => current.date = Some(trimmed.to_string()),
            "description" => current.description = Some(truncate_description(trimmed)),
            _ => {}
        }
    } else {
        match tag {
            "title" if feed.blog_name.is_none() => {
                feed.blog_name = Some(trimmed.to_string());
            }
            "url" if in_image && feed.profile_image.is_none() => {
                feed.profile_image = Some(trimmed.to_string());
            }
            _ => {}
        }
    }
}

fn truncate_description(raw: &str) -> String {
    let plain = strip_html(raw);
    let cut: String = plain.chars().take(DESCRIPTION_LEN).collect();
    format!("{cut}...")
}

#[cfg(test)]
#[path = "rss_test.rs"]
mod tests;
