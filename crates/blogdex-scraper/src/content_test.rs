use scraper::Html;

use super::*;

fn analyze(html: &str) -> ContentMetrics {
    let document = Html::parse_document(html);
    analyze_content(html, &document)
}

#[test]
fn current_editor_paragraphs_are_counted() {
    let body = "서울 강남역 근처에서 정말 맛있는 파스타집을 발견해서 후기를 남깁니다".repeat(4);
    let html = format!(
        r#"<div class="se-main-container"><p class="se-text-paragraph">{body}</p></div>"#
    );
    let metrics = analyze(&html);
    assert!(metrics.char_count > 100, "{metrics:?}");
    assert!(metrics.word_count > 0);
}

#[test]
fn legacy_container_is_used_when_modern_markup_is_absent() {
    let body = "옛날 에디터로 작성한 본문입니다 공백 포함 글자수를 확인합니다 ".repeat(5);
    let html = format!(r#"<div id="postViewArea">{body}</div>"#);
    let metrics = analyze(&html);
    assert!(metrics.char_count > 100, "{metrics:?}");
}

#[test]
fn json_embedded_text_is_third_fallback() {
    let inner = "제이슨으로 숨겨진 본문 텍스트입니다 ".repeat(10);
    let html = format!(r#"<script>var post = {{"contentText": "{inner}"}};</script>"#);
    let metrics = analyze(&html);
    assert!(metrics.char_count > 50, "{metrics:?}");
}

#[test]
fn json_text_strips_escape_sequences() {
    let padding = "본문내용 ".repeat(20);
    let with_escapes = format!("첫줄\\n둘째줄\\t탭\\u00a0{padding}");
    let html = format!(r#"<script>{{"plainText": "{with_escapes}"}}</script>"#);
    let plain_html = format!(r#"<script>{{"plainText": "첫줄 둘째줄 탭{padding}"}}</script>"#);
    // Escape sequences collapse to separators/nothing, so the counted
    // length matches the escape-free rendition.
    assert_eq!(analyze(&html).char_count, analyze(&plain_html).char_count);
}

#[test]
fn container_longest_text_is_last_resort() {
    let long = "아주 짧은 본문만 있는 경우를 위한 마지막 수단입니다 ".repeat(3);
    let html = format!(
        r#"<article><script>var ignored = "스크립트 내용은 제외되어야 한다";</script>{long}</article>"#
    );
    let metrics = analyze(&html);
    assert!(metrics.char_count > 0);
    assert!(
        metrics.char_count < 200,
        "script text must not inflate the count: {metrics:?}"
    );
}

#[test]
fn empty_page_yields_zero_metrics() {
    let metrics = analyze("<html><body></body></html>");
    assert_eq!(metrics, ContentMetrics::default());
}

#[test]
fn subheadings_count_headings_and_bold_classes() {
    let html = r#"
        <h2>첫 소제목</h2>
        <h3 class="title">둘째</h3>
        <p class="se-text-paragraph se-section-title x">셋째</p>
        <strong class="se-emphasis">넷째</strong>
    "#;
    let metrics = analyze(html);
    assert_eq!(metrics.subheading_count, 4);
}

#[test]
fn link_count_includes_only_http_anchors() {
    let html = r##"
        <a href="https://example.com/a">외부</a>
        <a href="http://example.com/b">외부2</a>
        <a href="#anchor">내부</a>
        <a>링크없음</a>
    "##;
    let metrics = analyze(html);
    assert_eq!(metrics.link_count, 2);
}

#[test]
fn video_detected_by_selector() {
    let html = r#"<div class="se-video"><video src="x.mp4"></video></div>"#;
    assert!(analyze(html).has_video);
}

#[test]
fn video_detected_by_host_pattern_fallback() {
    let html = r#"<p>링크: https://youtube.com/embed/abc123 를 보세요</p>"#;
    assert!(analyze(html).has_video);
}

#[test]
fn no_video_markers_means_false() {
    assert!(!analyze("<p>영상 없는 글</p>").has_video);
}
