//! Search-exposure classification for individual posts.
//!
//! A keyword derived from the post title is queried against the platform's
//! blog-vertical search; the result page is then matched in tiers, most
//! specific first. Exact URL matching is unambiguous but brittle against
//! the result renderer's URL rewriting; the title-overlap tier recovers
//! from that while still requiring the right blog id, so similar posts
//! from unrelated blogs do not count.

use std::collections::HashSet;

use blogdex_core::types::ExposureState;
use regex::{Regex, RegexBuilder};
use scraper::{ElementRef, Html};

use crate::client::BlogClient;
use crate::parse_util::selector;
use crate::post_detail::{extract_log_no, resolve_blog_id};

/// Particles, conjunctions, and other glue words dropped before picking
/// keyword tokens from a title.
const STOPWORDS: &[&str] = &[
    "의", "가", "이", "은", "는", "을", "를", "에", "와", "과", "도", "로", "으로", "에서",
    "까지", "부터", "만", "보다", "처럼", "같이", "대한", "관한", "위한", "그리고", "하지만",
    "그러나", "또한", "및", "등", "것", "수", "있는", "없는", "하는", "되는", "된", "한", "할",
    "함", "있다", "없다", "하다",
];

/// How many filtered tokens form the keyword when no bracket tag exists.
const KEYWORD_TOKENS: usize = 4;

/// Minimum share of title tokens that must reappear in a result snippet
/// for the title-similarity tier to call it the same post.
const TITLE_OVERLAP_RATIO: f64 = 0.5;

/// Result-snippet containers on the search page.
const RESULT_ITEM_SELECTOR: &str = ".api_txt_lines, .title_link, .total_tit, .sh_blog_title";

/// Derive the search keyword from a post title.
///
/// Bracketed text (`[...]`) is used verbatim when present; otherwise the
/// title is stripped of punctuation and stop words and the first four
/// remaining tokens are joined.
#[must_use]
pub fn extract_keyword(post_title: &str) -> String {
    if post_title.is_empty() {
        return String::new();
    }

    let bracket = Regex::new(r"\[([^\]]+)\]").expect("valid regex");
    if let Some(cap) = bracket.captures(post_title) {
        return cap[1].trim().to_string();
    }

    let punctuation = Regex::new(r"[^\w\s]").expect("valid regex");
    let cleaned = punctuation.replace_all(post_title, " ");

    let keywords: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|w| !STOPWORDS.contains(w) && w.chars().count() > 1)
        .take(KEYWORD_TOKENS)
        .collect();

    keywords.join(" ")
}

/// Check whether a post is exposed in blog search for its derived keyword.
///
/// Returns the classification and the keyword used. An empty keyword skips
/// the network call entirely; a failed search yields `Unknown`.
pub(crate) async fn check_search_exposure(
    client: &BlogClient,
    blog_id: &str,
    post_title: &str,
    post_url: &str,
) -> (ExposureState, String) {
    let actual_blog_id = resolve_blog_id(post_url).unwrap_or_else(|| blog_id.to_string());
    let log_no = extract_log_no(post_url).unwrap_or_default();

    let keyword = extract_keyword(post_title);
    if keyword.is_empty() {
        return (ExposureState::Unknown, String::new());
    }

    let url = client.search_url(&keyword);
    match client.get_desktop(&url).await {
        Ok(html) => (
            classify_exposure(&html, &actual_blog_id, &log_no, post_title),
            keyword,
        ),
        Err(e) => {
            tracing::warn!(keyword = %keyword, error = %e, "search exposure fetch failed");
            (ExposureState::Unknown, keyword)
        }
    }
}

/// Tiered match of a search-result page against one post. First hit wins.
pub(crate) fn classify_exposure(
    html: &str,
    blog_id: &str,
    log_no: &str,
    post_title: &str,
) -> ExposureState {
    let document = Html::parse_document(html);

    // Tier 1: exact id + post-id adjacency anywhere in the raw result HTML.
    if !log_no.is_empty() {
        let id = regex::escape(blog_id);
        let log = regex::escape(log_no);
        let patterns = [
            format!("{id}/{log}"),
            format!("blogId={id}.*logNo={log}"),
            format!("{id}.*{log}"),
        ];
        for pattern in &patterns {
            let re = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("valid regex");
            if re.is_match(html) {
                return ExposureState::Indexed;
            }
        }

        // Tier 2: a result link carrying both the blog id and the post id.
        let links = selector(r#"a[href*="blog.naver.com"]"#);
        for link in document.select(&links) {
            let href = link.value().attr("href").unwrap_or("");
            if href.contains(blog_id) && href.contains(log_no) {
                return ExposureState::Indexed;
            }
        }
    }

    // Tier 3: title-token overlap within a snippet attributed to this blog.
    let title_tokens = tokenize(post_title);
    if !title_tokens.is_empty() {
        let items = selector(RESULT_ITEM_SELECTOR);
        for item in document.select(&items) {
            if !parent_html(item).contains(blog_id) {
                continue;
            }
            let item_text: String = item.text().collect();
            let item_tokens = tokenize(&item_text);
            #[allow(clippy::cast_precision_loss)]
            let ratio = title_tokens.intersection(&item_tokens).count() as f64
                / title_tokens.len() as f64;
            if ratio >= TITLE_OVERLAP_RATIO {
                return ExposureState::Indexed;
            }
        }
    }

    // Tier 4: the blog shows up at all — some other post may be the match.
    if html.contains(blog_id) {
        return ExposureState::Pending;
    }

    ExposureState::Missing
}

/// 2+-character alphanumeric/Hangul runs, the unit of title similarity.
fn tokenize(text: &str) -> HashSet<String> {
    let token = Regex::new(r"[가-힣a-zA-Z0-9]{2,}").expect("valid regex");
    token
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Serialized HTML of the element's parent, used to attribute a snippet to
/// a blog when the link itself was rewritten.
fn parent_html(item: ElementRef<'_>) -> String {
    item.parent()
        .and_then(ElementRef::wrap)
        .map(|el| el.html())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "exposure_test.rs"]
mod tests;
