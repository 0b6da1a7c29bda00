//! Per-post detail extraction: engagement counts, image count, content
//! metrics, image SEO.
//!
//! The fetch is all-or-nothing: a malformed link, a failed fetch, or a
//! non-2xx status yields the all-default record — never a partial one.

use std::collections::HashSet;

use blogdex_core::types::ImageSeoReport;
use regex::{Regex, RegexBuilder};
use scraper::Html;

use crate::client::BlogClient;
use crate::content::analyze_content;
use crate::image_seo::analyze_image_seo;
use crate::parse_util::{first_number, selector};

/// Ordered JSON-key probes for the like counter.
const LIKE_JSON_PATTERNS: &[&str] = &[
    r#""sympathyCount"\s*:\s*(\d+)"#,
    r#"sympathyCount["\s:]+(\d+)"#,
    r#""likeCount"\s*:\s*(\d+)"#,
    r#""sympathy_count"\s*:\s*(\d+)"#,
];

/// DOM fallbacks for the like counter, tried only when the JSON probes
/// yield nothing.
const LIKE_SELECTORS: &[&str] = &[
    ".u_cnt._count",
    ".sympathy_cnt",
    ".like_cnt",
    ".post_sympathy_count",
    ".u_likeit_list_count",
    r#"[class*="sympathy"] [class*="count"]"#,
    r#"[class*="like"] [class*="count"]"#,
];

const COMMENT_JSON_PATTERNS: &[&str] = &[
    r#""commentCount"\s*:\s*(\d+)"#,
    r#"commentCount["\s:]+(\d+)"#,
    r#""comment_count"\s*:\s*(\d+)"#,
    r#""replyCount"\s*:\s*(\d+)"#,
];

const COMMENT_SELECTORS: &[&str] = &[
    ".comment_count",
    ".cmt_cnt",
    ".post_comment_count",
    r#"[class*="comment"] [class*="count"]"#,
    r#"[class*="reply"] [class*="count"]"#,
];

/// Raw-text probes for image URLs on the content CDNs.
const IMAGE_URL_PATTERNS: &[&str] = &[
    r#"https?:[^"\s<>']*pstatic\.net[^"\s<>']*"#,
    r#"https?:[^"\s<>']*postfiles[^"\s<>']*"#,
    r#"https?:[^"\s<>']*blogfiles[^"\s<>']*"#,
];

/// Path markers for icons, static assets, and profile images — never
/// content.
const IMAGE_EXCLUDES: &[&str] = &[
    "static/blog",
    "static.blog",
    "blogpfthumb",
    "profile",
    "icon",
    "btn_",
    "bg_",
];

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".bmp"];

/// Hash/filename capture patterns; the two groups form the dedup key, so
/// the same upload counts once across hosts and query-string variants.
const IMAGE_HASH_PATTERNS: &[&str] = &[
    r"/([A-Za-z0-9_-]{10,})/([A-Za-z0-9_.-]+)\.(?:jpg|jpeg|png|gif|webp|bmp)",
    r"postfiles\d*/([A-Za-z0-9_-]+)/([A-Za-z0-9_.-]+)",
    r"blogfiles\d*/([A-Za-z0-9_-]+)/([A-Za-z0-9_.-]+)",
];

/// Lazy-loading source attributes, in probe order.
const IMG_SRC_ATTRS: &[&str] = &["src", "data-lazy-src", "data-src", "data-original"];

/// Editor image components counted directly as the final fallback.
const EDITOR_IMAGE_SELECTOR: &str = ".se-image-resource, .se-component-image img, .se_mediaImage";

/// Detail metrics for one post. Identity fields stay on the summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PostDetail {
    pub likes: u32,
    pub comments: u32,
    pub images: u32,
    pub char_count: u32,
    pub word_count: u32,
    pub subheading_count: u32,
    pub link_count: u32,
    pub has_video: bool,
    pub image_seo: ImageSeoReport,
}

/// Fetch and analyze one post's mobile detail page.
///
/// Returns defaults without a network call when the URL carries no numeric
/// post id, and on any fetch failure.
pub(crate) async fn fetch_post_details(
    client: &BlogClient,
    blog_id: &str,
    post_url: &str,
) -> PostDetail {
    let Some(log_no) = extract_log_no(post_url) else {
        return PostDetail::default();
    };
    let actual_blog_id = resolve_blog_id(post_url).unwrap_or_else(|| blog_id.to_string());

    let url = client.mobile_post_url(&actual_blog_id, &log_no);
    match client.get_mobile(&url).await {
        Ok(html) => parse_post_detail(&html),
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "post detail fetch failed");
            PostDetail::default()
        }
    }
}

/// Numeric post identifier: a long digit run in the path, or an explicit
/// `logNo=` query parameter.
pub(crate) fn extract_log_no(post_url: &str) -> Option<String> {
    let path_run = Regex::new(r"/(\d{10,})").expect("valid regex");
    if let Some(cap) = path_run.captures(post_url) {
        return Some(cap[1].to_string());
    }
    let query = Regex::new(r"logNo=(\d+)").expect("valid regex");
    query.captures(post_url).map(|cap| cap[1].to_string())
}

/// The blog id embedded in the URL, which may differ from the one being
/// analyzed (cross-posted content).
pub(crate) fn resolve_blog_id(post_url: &str) -> Option<String> {
    let re = Regex::new(r"blog\.naver\.com/([a-zA-Z0-9_-]+)").expect("valid regex");
    re.captures(post_url).map(|cap| cap[1].to_string())
}

/// Parse a fetched detail page into metrics.
pub(crate) fn parse_post_detail(html: &str) -> PostDetail {
    let document = Html::parse_document(html);

    let likes = extract_count(html, &document, LIKE_JSON_PATTERNS, LIKE_SELECTORS);
    let comments = extract_count(html, &document, COMMENT_JSON_PATTERNS, COMMENT_SELECTORS);
    let images = count_images(html, &document);
    let content = analyze_content(html, &document);
    let image_seo = analyze_image_seo(&document);

    PostDetail {
        likes,
        comments,
        images,
        char_count: content.char_count,
        word_count: content.word_count,
        subheading_count: content.subheading_count,
        link_count: content.link_count,
        has_video: content.has_video,
        image_seo,
    }
}

/// Two-tier counter extraction: JSON-key regexes over the raw page first
/// (first match ends the probing, even at zero), then DOM selectors only
/// while the count is still zero.
fn extract_count(html: &str, document: &Html, patterns: &[&str], selectors: &[&str]) -> u32 {
    let mut count = 0;
    for pattern in patterns {
        let re = Regex::new(pattern).expect("valid regex");
        if let Some(cap) = re.captures(html) {
            if let Ok(parsed) = cap[1].parse() {
                count = parsed;
                break;
            }
        }
    }
    if count == 0 {
        for css in selectors {
            if let Some(elem) = document.select(&selector(css)).next() {
                let text: String = elem.text().collect();
                if let Some(parsed) = first_number(&text) {
                    count = parsed;
                    break;
                }
            }
        }
    }
    count
}

/// Three-tier image counting with hash-key dedup.
fn count_images(html: &str, document: &Html) -> u32 {
    let mut unique_keys: HashSet<String> = HashSet::new();

    // Tier 1: content-CDN URLs anywhere in the raw page.
    for pattern in IMAGE_URL_PATTERNS {
        let re = Regex::new(pattern).expect("valid regex");
        for m in re.find_iter(html) {
            let clean = m
                .as_str()
                .replace("\\/", "/")
                .replace('\\', "/")
                .replace("\\\"", "");
            let lower = clean.to_lowercase();
            if IMAGE_EXCLUDES.iter().any(|exc| lower.contains(exc)) {
                continue;
            }
            if !IMAGE_EXTENSIONS.iter().any(|ext| lower.contains(ext)) {
                continue;
            }
            if let Some(key) = image_key(&clean) {
                unique_keys.insert(key);
            }
        }
    }

    // Tier 2: img tag source attributes, same exclusion rules.
    if unique_keys.is_empty() {
        let img = selector("img");
        let loose_hash = Regex::new(r"/([A-Za-z0-9_-]{10,})/([A-Za-z0-9_.-]+)")
            .expect("valid regex");
        for elem in document.select(&img) {
            let src = IMG_SRC_ATTRS
                .iter()
                .copied()
                .find_map(|attr| elem.value().attr(attr).filter(|s| !s.is_empty()))
                .unwrap_or("");
            if src.is_empty() {
                continue;
            }
            let lower = src.to_lowercase();
            if ["blogpfthumb", "profile", "icon", "btn_", "bg_"]
                .iter()
                .any(|exc| lower.contains(exc))
            {
                continue;
            }
            if !CONTENT_HOST_MARKERS.iter().any(|host| src.contains(host)) {
                continue;
            }
            if let Some(cap) = loose_hash.captures(src) {
                unique_keys.insert(make_key(&cap[1], &cap[2]));
            }
        }
    }

    if !unique_keys.is_empty() {
        return u32::try_from(unique_keys.len()).unwrap_or(u32::MAX);
    }

    // Tier 3: count editor image components directly.
    let editor_images = document.select(&selector(EDITOR_IMAGE_SELECTOR)).count();
    u32::try_from(editor_images).unwrap_or(u32::MAX)
}

const CONTENT_HOST_MARKERS: &[&str] = &["blogfiles", "postfiles", "pstatic.net"];

fn image_key(clean_url: &str) -> Option<String> {
    for pattern in IMAGE_HASH_PATTERNS {
        let re = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("valid regex");
        if let Some(cap) = re.captures(clean_url) {
            return Some(make_key(&cap[1], &cap[2]));
        }
    }
    None
}

/// Dedup key: hash segment plus the first 20 chars of the filename, so
/// size-variant suffixes and host differences collapse.
fn make_key(hash: &str, filename: &str) -> String {
    let prefix: String = filename.chars().take(20).collect();
    format!("{hash}_{prefix}")
}

#[cfg(test)]
#[path = "post_detail_test.rs"]
mod tests;
