use blogdex_core::types::BlogProfile;
use chrono::NaiveDate;

use super::*;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 15)
        .expect("valid date")
        .and_hms_opt(13, 0, 0)
        .expect("valid time")
}

const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title><![CDATA[하니의 일상 블로그]]></title>
    <image>
      <url>https://blogpfthumb-phinf.pstatic.net/hani/profile.jpg</url>
      <title>하니의 일상 블로그</title>
    </image>
    <item>
      <title><![CDATA[[서울맛집] 강남 파스타 후기]]></title>
      <link>https://blog.naver.com/hani/2230000000001</link>
      <pubDate>Mon, 12 Jan 2026 10:30:00 +0900</pubDate>
      <description><![CDATA[<p>지난 주말에 다녀온 <b>파스타집</b> 이야기</p>]]></description>
    </item>
    <item>
      <title>작년에 쓴 글</title>
      <link>https://blog.naver.com/hani/2220000000002</link>
      <pubDate>Sat, 01 Mar 2025 09:00:00 +0900</pubDate>
      <description>오래된 글입니다</description>
    </item>
    <item>
      <title>날짜가 깨진 글</title>
      <link>https://blog.naver.com/hani/2220000000003</link>
      <pubDate>not a date at all</pubDate>
    </item>
  </channel>
</rss>"#;

#[test]
fn channel_title_becomes_blog_name() {
    let mut profile = BlogProfile::new("hani");
    apply_rss(SAMPLE_RSS, now(), &mut profile);
    assert_eq!(profile.blog_name.as_deref(), Some("하니의 일상 블로그"));
    assert_eq!(
        profile.profile_image.as_deref(),
        Some("https://blogpfthumb-phinf.pstatic.net/hani/profile.jpg")
    );
}

#[test]
fn items_become_post_summaries_in_feed_order() {
    let mut profile = BlogProfile::new("hani");
    apply_rss(SAMPLE_RSS, now(), &mut profile);
    assert_eq!(profile.recent_posts.len(), 3);
    assert_eq!(
        profile.recent_posts[0].title.as_deref(),
        Some("[서울맛집] 강남 파스타 후기")
    );
    assert_eq!(
        profile.recent_posts[0].link.as_deref(),
        Some("https://blog.naver.com/hani/2230000000001")
    );
    assert_eq!(
        profile.recent_posts[0].date.as_deref(),
        Some("Mon, 12 Jan 2026 10:30:00 +0900")
    );
}

#[test]
fn descriptions_are_stripped_and_truncated() {
    let mut profile = BlogProfile::new("hani");
    apply_rss(SAMPLE_RSS, now(), &mut profile);
    let desc = profile.recent_posts[0]
        .description
        .as_deref()
        .expect("description");
    assert_eq!(desc, "지난 주말에 다녀온 파스타집 이야기...");
}

#[test]
fn recent_window_counts_only_last_30_days_and_skips_bad_dates() {
    let mut profile = BlogProfile::new("hani");
    apply_rss(SAMPLE_RSS, now(), &mut profile);
    // One post inside the window, one old, one unparseable.
    assert_eq!(profile.recent_30days_posts, 1);
}

#[test]
fn item_count_fills_total_posts_only_when_unset() {
    let mut profile = BlogProfile::new("hani");
    apply_rss(SAMPLE_RSS, now(), &mut profile);
    assert_eq!(profile.total_posts, 3);

    let mut counted = BlogProfile::new("hani");
    counted.total_posts = 112;
    apply_rss(SAMPLE_RSS, now(), &mut counted);
    assert_eq!(counted.total_posts, 112);
}

#[test]
fn feed_is_capped_at_fifty_posts() {
    let mut items = String::new();
    for i in 0..60 {
        items.push_str(&format!(
            "<item><title>글 {i}</title><link>https://blog.naver.com/hani/{:013}</link></item>",
            2_230_000_000_000_u64 + i
        ));
    }
    let xml = format!(
        r#"<?xml version="1.0"?><rss version="2.0"><channel><title>t</title>{items}</channel></rss>"#
    );
    let mut profile = BlogProfile::new("hani");
    apply_rss(&xml, now(), &mut profile);
    assert_eq!(profile.recent_posts.len(), 50);
    assert_eq!(profile.total_posts, 60);
}

#[test]
fn malformed_feed_leaves_profile_untouched() {
    let mut profile = BlogProfile::new("hani");
    apply_rss("<rss><channel><item><title>Unclosed", now(), &mut profile);
    // Either parses to nothing or fails; both leave no posts behind.
    assert!(profile.recent_posts.is_empty());
}

#[test]
fn empty_feed_yields_empty_posts() {
    let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel></channel></rss>"#;
    let mut profile = BlogProfile::new("hani");
    apply_rss(xml, now(), &mut profile);
    assert!(profile.recent_posts.is_empty());
    assert_eq!(profile.recent_30days_posts, 0);
}
