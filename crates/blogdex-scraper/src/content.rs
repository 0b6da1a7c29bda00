//! Post body analysis: length, structure, links, video presence.
//!
//! Body text extraction is a four-stage fallback over editor generations:
//! current rich-editor paragraphs, legacy editor containers, JSON-embedded
//! plain text, and finally the longest plain text of any known content
//! container. Each stage only runs while the accumulated text is still
//! shorter than 100 characters.

use regex::{Regex, RegexBuilder};
use scraper::{ElementRef, Html};

use crate::parse_util::selector;

/// Accumulated text at or past this length stops the fallback chain.
const ENOUGH_TEXT: usize = 100;

/// Fragments shorter than this are skipped when accumulating paragraphs.
const MIN_FRAGMENT: usize = 5;

/// Current-generation rich-editor paragraph probes.
const EDITOR_SELECTORS: &[&str] = &[
    ".se-main-container .se-text-paragraph",
    ".se-main-container .se-text",
    ".se-component-content",
    ".se-module-text",
];

/// Legacy editor container probes.
const LEGACY_SELECTORS: &[&str] = &[
    ".se-text-paragraph",
    ".se_textarea",
    ".post_ct",
    ".__se_module_data",
    ".se_doc_viewer",
    "#postViewArea",
    ".post-view",
    ".se_component_wrap",
];

/// JSON keys that carry the body as an embedded string value.
const JSON_TEXT_KEYS: &[&str] = &["contentText", "plainText", "content"];

/// Containers for the last-resort longest-plain-text extraction.
const CONTAINER_SELECTOR: &str = ".post_ct, #content-area, .se_component_wrap, article";

/// Heading/bold patterns counted as subheadings.
const SUBHEADING_PATTERNS: &[&str] = &[
    r"<h[23][^>]*>",
    r#"class="[^"]*se-section-title[^"]*""#,
    r#"class="[^"]*se-text-paragraph-bold[^"]*""#,
    r#"class="[^"]*se_textarea[^"]*"[^>]*style="[^"]*font-weight:\s*bold"#,
    r#"<strong[^>]*class="[^"]*se-[^"]*""#,
];

const VIDEO_SELECTORS: &[&str] = &[
    ".se-video",
    ".se_mediaArea video",
    r#"iframe[src*="youtube"]"#,
    r#"iframe[src*="naver"]"#,
    r#"iframe[src*="vimeo"]"#,
    ".se-oglink-video",
    "video",
];

const VIDEO_HOST_PATTERN: &str = r"(youtube\.com/embed|player\.vimeo|tv\.naver\.com|video\.naver\.com)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ContentMetrics {
    pub char_count: u32,
    pub word_count: u32,
    pub subheading_count: u32,
    pub link_count: u32,
    pub has_video: bool,
}

pub(crate) fn analyze_content(html: &str, document: &Html) -> ContentMetrics {
    let content_text = extract_body_text(html, document);

    // Whitespace-free character count, with a guard against undercounting
    // when the text is somehow all-whitespace yet non-empty.
    let stripped: usize = content_text.chars().filter(|c| !c.is_whitespace()).count();
    let char_count = if stripped == 0 && !content_text.is_empty() {
        content_text.chars().count()
    } else {
        stripped
    };

    let word_count = content_text.split_whitespace().count();

    let mut subheading_count = 0usize;
    for pattern in SUBHEADING_PATTERNS {
        let re = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("valid regex");
        subheading_count += re.find_iter(html).count();
    }

    let anchors = selector(r#"a[href*="http"]"#);
    let link_count = document.select(&anchors).count();

    let has_video = VIDEO_SELECTORS
        .iter()
        .any(|css| document.select(&selector(css)).next().is_some())
        || RegexBuilder::new(VIDEO_HOST_PATTERN)
            .case_insensitive(true)
            .build()
            .expect("valid regex")
            .is_match(html);

    ContentMetrics {
        char_count: clamp_u32(char_count),
        word_count: clamp_u32(word_count),
        subheading_count: clamp_u32(subheading_count),
        link_count: clamp_u32(link_count),
        has_video,
    }
}

fn extract_body_text(html: &str, document: &Html) -> String {
    let mut text = String::new();

    // Stage 1: current editor paragraphs.
    accumulate_selected(document, EDITOR_SELECTORS, &mut text);

    // Stage 2: legacy editor containers.
    if short(&text) {
        accumulate_selected(document, LEGACY_SELECTORS, &mut text);
    }

    // Stage 3: JSON-embedded body text.
    if short(&text) {
        if let Some(json_text) = extract_json_text(html) {
            text = json_text;
        }
    }

    // Stage 4: longest plain text of any known container, scripts removed.
    if short(&text) {
        let containers = selector(CONTAINER_SELECTOR);
        for container in document.select(&containers) {
            let candidate = text_without_scripts(container);
            let candidate = candidate.trim();
            if candidate.chars().count() > text.chars().count() {
                text = candidate.to_string();
            }
        }
    }

    // Leftover tag cleanup and whitespace collapse.
    let tags = Regex::new(r"<[^>]+>").expect("valid regex");
    let text = tags.replace_all(&text, "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn short(text: &str) -> bool {
    text.trim().chars().count() < ENOUGH_TEXT
}

fn accumulate_selected(document: &Html, selectors: &[&str], out: &mut String) {
    for css in selectors {
        let sel = selector(css);
        for elem in document.select(&sel) {
            let fragment: String = elem.text().collect::<String>().trim().to_string();
            if fragment.chars().count() > MIN_FRAGMENT {
                out.push_str(&fragment);
                out.push(' ');
            }
        }
    }
}

/// Pull an embedded `"contentText": "..."` style value out of the raw page.
/// Handles single- and double-quoted JSON, backslash escapes, and strips
/// unicode escape sequences.
fn extract_json_text(html: &str) -> Option<String> {
    for key in JSON_TEXT_KEYS {
        let pattern = format!(
            r#"(?s)"{key}"\s*:\s*"((?:[^"\\]|\\.)*)"|'{key}'\s*:\s*'((?:[^'\\]|\\.)*)'"#
        );
        let re = Regex::new(&pattern).expect("valid regex");
        for cap in re.captures_iter(html) {
            let text = cap
                .get(1)
                .or_else(|| cap.get(2))
                .map(|m| m.as_str())
                .unwrap_or("");
            if text.chars().count() > ENOUGH_TEXT {
                let cleaned = text
                    .replace("\\n", " ")
                    .replace("\\t", " ")
                    .replace("\\r", "");
                let unicode = Regex::new(r"\\u[0-9a-fA-F]{4}").expect("valid regex");
                return Some(unicode.replace_all(&cleaned, "").into_owned());
            }
        }
    }
    None
}

/// Text content of an element excluding script/style/noscript subtrees.
fn text_without_scripts(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in el.descendants() {
        if let Some(text) = node.value().as_text() {
            let hidden = node.ancestors().any(|a| {
                a.value()
                    .as_element()
                    .is_some_and(|e| matches!(e.name(), "script" | "style" | "noscript"))
            });
            if !hidden {
                out.push_str(text);
                out.push(' ');
            }
        }
    }
    out
}

fn clamp_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
