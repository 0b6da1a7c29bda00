//! Desktop post-list page: nickname, total post count, neighbor/scrap counts.

use blogdex_core::types::BlogProfile;
use regex::Regex;
use scraper::Html;

use crate::parse_util::{element_text, first_number, selector};

/// Apply the desktop list-page extractors to `profile`.
pub(crate) fn apply_main_page(html: &str, profile: &mut BlogProfile) {
    let document = Html::parse_document(html);

    // Nickname element varies by skin; first match of the probe list wins.
    let nick = selector(".nick, .blog_name, #nickNameArea");
    if let Some(elem) = document.select(&nick).next() {
        let text = element_text(elem);
        if !text.is_empty() {
            profile.blog_nickname = Some(text);
        }
    }

    // "112개의 글" — total post count rendered in the list header.
    let post_count = Regex::new(r"(\d+)개의\s*글").expect("valid regex");
    if let Some(cap) = post_count.captures(html) {
        if let Ok(count) = cap[1].parse() {
            profile.total_posts = count;
        }
    }

    // Activity sidebar items carry neighbor and scrap counts as free text.
    let activity = selector(".activity_item, .blog_info li");
    for item in document.select(&activity) {
        let text = element_text(item);
        if text.contains("이웃") {
            if let Some(count) = first_number(&text) {
                profile.neighbors = count;
            }
        }
        if text.contains("스크랩") {
            if let Some(count) = first_number(&text) {
                profile.total_scraps = count;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAIN_PAGE: &str = r#"
        <html><body>
          <div class="blog_info">
            <span class="nick">달려라하니</span>
            <ul>
              <li>이웃 1,204명</li>
              <li>스크랩 37</li>
            </ul>
          </div>
          <div class="category_title">전체글 <em>112개의 글</em></div>
        </body></html>
    "#;

    #[test]
    fn extracts_nickname_post_count_and_activity_counts() {
        let mut profile = BlogProfile::new("tester");
        apply_main_page(MAIN_PAGE, &mut profile);
        assert_eq!(profile.blog_nickname.as_deref(), Some("달려라하니"));
        assert_eq!(profile.total_posts, 112);
        assert_eq!(profile.neighbors, 1204);
        assert_eq!(profile.total_scraps, 37);
    }

    #[test]
    fn missing_markup_leaves_defaults() {
        let mut profile = BlogProfile::new("tester");
        apply_main_page("<html><body>nothing here</body></html>", &mut profile);
        assert!(profile.blog_nickname.is_none());
        assert_eq!(profile.total_posts, 0);
        assert_eq!(profile.neighbors, 0);
    }

    #[test]
    fn nickname_falls_back_to_id_selector() {
        let mut profile = BlogProfile::new("tester");
        apply_main_page(
            r#"<div id="nickNameArea">공대생의 일상</div>"#,
            &mut profile,
        );
        assert_eq!(profile.blog_nickname.as_deref(), Some("공대생의 일상"));
    }
}
