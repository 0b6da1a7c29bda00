use super::*;

#[test]
fn log_no_from_long_path_digits() {
    assert_eq!(
        extract_log_no("https://blog.naver.com/hani/2230000000001").as_deref(),
        Some("2230000000001")
    );
}

#[test]
fn log_no_from_query_param() {
    assert_eq!(
        extract_log_no("https://blog.naver.com/PostView.naver?blogId=hani&logNo=223000001")
            .as_deref(),
        Some("223000001")
    );
}

#[test]
fn short_digit_runs_are_not_log_nos() {
    assert_eq!(extract_log_no("https://blog.naver.com/hani/123456"), None);
}

#[test]
fn blog_id_resolves_from_url_host_path() {
    assert_eq!(
        resolve_blog_id("https://blog.naver.com/other_writer/2230000000001").as_deref(),
        Some("other_writer")
    );
    assert_eq!(resolve_blog_id("http://127.0.0.1:9000/hani/223"), None);
}

#[test]
fn likes_prefer_json_over_dom() {
    let html = r#"
        <script>var g = {"sympathyCount": 42};</script>
        <span class="sympathy_cnt">999</span>
    "#;
    let detail = parse_post_detail(html);
    assert_eq!(detail.likes, 42);
}

#[test]
fn likes_fall_back_to_dom_selectors() {
    let html = r#"<span class="u_likeit_list_count">공감 17</span>"#;
    let detail = parse_post_detail(html);
    assert_eq!(detail.likes, 17);
}

#[test]
fn comments_use_their_own_pattern_set() {
    let html = r#"<script>{"commentCount": 9, "sympathyCount": 3}</script>"#;
    let detail = parse_post_detail(html);
    assert_eq!(detail.comments, 9);
    assert_eq!(detail.likes, 3);
}

#[test]
fn nested_attribute_selectors_match_count_elements() {
    let html = r#"<div class="post_sympathy"><em class="num_count">5</em></div>"#;
    let detail = parse_post_detail(html);
    assert_eq!(detail.likes, 5);
}

#[test]
fn image_urls_dedup_by_hash_and_filename_prefix() {
    // Same hash segment + filename behind different hosts and query
    // strings — one image.
    let html = r#"
        <img src="https://postfiles.pstatic.net/MjAyNl8wMV8x/cafe_interior_photo.jpg?type=w966">
        <script>var u = "https:\/\/blogfiles.pstatic.net\/MjAyNl8wMV8x\/cafe_interior_photo.jpg";</script>
    "#;
    let detail = parse_post_detail(html);
    assert_eq!(detail.images, 1);
}

#[test]
fn distinct_images_count_separately() {
    let html = r#"
        <img src="https://postfiles.pstatic.net/MjAyNl8wMV8x/first_photo_file.jpg">
        <img src="https://postfiles.pstatic.net/MjAyNl8wMl8y/second_photo_file.jpg">
    "#;
    let detail = parse_post_detail(html);
    assert_eq!(detail.images, 2);
}

#[test]
fn icons_and_profile_assets_are_excluded() {
    let html = r#"
        <img src="https://blogimgs.pstatic.net/static/blog/icon_like.png">
        <img src="https://blogpfthumb-phinf.pstatic.net/MjAyNl8wMV8x/profile_photo_img.jpg">
    "#;
    let detail = parse_post_detail(html);
    assert_eq!(detail.images, 0);
}

#[test]
fn editor_components_are_the_final_fallback() {
    let html = r#"
        <div class="se-component-image"><img src="/relative/editor/img"></div>
        <div class="se-image-resource"></div>
    "#;
    let detail = parse_post_detail(html);
    assert_eq!(detail.images, 2);
}

#[test]
fn empty_page_yields_zero_metrics() {
    let detail = parse_post_detail("<html><body></body></html>");
    assert_eq!(detail.likes, 0);
    assert_eq!(detail.comments, 0);
    assert_eq!(detail.images, 0);
    assert_eq!(detail.char_count, 0);
    assert!(!detail.has_video);
    // The image-SEO analysis still runs and reports the no-image tier.
    assert_eq!(
        detail.image_seo.alt_quality,
        blogdex_core::types::AltQuality::NoImages
    );
}
