use blogdex_core::load_app_config_from_env;

use super::*;

fn test_client() -> BlogClient {
    let config = load_app_config_from_env().expect("default config");
    BlogClient::new(&config).expect("failed to build BlogClient")
}

#[test]
fn post_list_url_targets_the_iframe_page() {
    let client = test_client();
    assert_eq!(
        client.post_list_url("tester"),
        "https://blog.naver.com/PostList.naver?blogId=tester&from=postList&categoryNo=0"
    );
}

#[test]
fn rss_url_appends_blog_id() {
    let client = test_client();
    assert_eq!(client.rss_url("tester"), "https://rss.blog.naver.com/tester");
}

#[test]
fn mobile_post_url_uses_resolved_id_and_log_no() {
    let client = test_client();
    assert_eq!(
        client.mobile_post_url("other_blog", "2230000000"),
        "https://m.blog.naver.com/other_blog/2230000000"
    );
}

#[test]
fn search_url_percent_encodes_the_keyword() {
    let client = test_client();
    let url = client.search_url("서울맛집 후기");
    assert!(url.starts_with("https://search.naver.com/search.naver?where=blog&query="));
    assert!(!url.contains(' '), "spaces must be encoded: {url}");
    assert!(!url.contains('서'), "hangul must be encoded: {url}");
}

#[test]
fn trailing_slash_in_base_url_is_trimmed() {
    let mut config = load_app_config_from_env().expect("default config");
    config.desktop_base_url = "http://127.0.0.1:9000/".to_string();
    let client = BlogClient::new(&config).expect("client");
    assert_eq!(
        client.profile_url("tester"),
        "http://127.0.0.1:9000/profile/intro.naver?blogId=tester"
    );
}
