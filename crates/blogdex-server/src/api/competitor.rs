//! `GET /api/competitor` — top search results for a keyword, with the
//! caller's blog flagged if it appears.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use regex::Regex;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use super::{error_response, AppState};

/// How many top results are compared.
const TOP_RESULTS: usize = 5;

/// Result titles are clipped to this many characters.
const TITLE_LEN: usize = 50;

#[derive(Debug, Deserialize)]
pub(super) struct CompetitorParams {
    keyword: Option<String>,
    blog_id: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(super) struct CompetitorItem {
    pub rank: usize,
    pub blog_id: String,
    pub title: String,
    pub link: String,
    pub is_mine: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct CompetitorResponse {
    pub keyword: String,
    pub competitors: Vec<CompetitorItem>,
    pub my_rank: Option<usize>,
    pub total_competitors: usize,
}

pub(super) async fn analyze_competitor(
    State(state): State<AppState>,
    Query(params): Query<CompetitorParams>,
) -> Response {
    let keyword = params.keyword.unwrap_or_default();
    let keyword = keyword.trim().to_string();
    if keyword.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "키워드를 입력해주세요.");
    }
    let my_blog_id = params.blog_id.unwrap_or_default();

    let encoded = utf8_percent_encode(&keyword, NON_ALPHANUMERIC).to_string();
    let url = format!(
        "{}/search.naver?where=blog&query={encoded}",
        state.config.search_base_url.trim_end_matches('/')
    );

    let response = state
        .proxy
        .get(&url)
        .header(
            reqwest::header::USER_AGENT,
            state.config.desktop_user_agent.as_str(),
        )
        .send()
        .await;

    let competitors = match response {
        Ok(response) if response.status().is_success() => match response.text().await {
            Ok(html) => parse_competitors(&html, &my_blog_id),
            Err(e) => {
                tracing::warn!(error = %e, "competitor body read failed");
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
            }
        },
        Ok(_) => Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "competitor search fetch failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
        }
    };

    let my_rank = competitors.iter().find(|c| c.is_mine).map(|c| c.rank);
    let total_competitors = competitors.len();
    Json(CompetitorResponse {
        keyword,
        competitors,
        my_rank,
        total_competitors,
    })
    .into_response()
}

/// Extract the top blog results from a search page.
pub(super) fn parse_competitors(html: &str, my_blog_id: &str) -> Vec<CompetitorItem> {
    let document = Html::parse_document(html);
    let items = Selector::parse(".api_txt_lines.total_tit, .title_link").expect("valid selector");
    let id_pattern = Regex::new(r"blog\.naver\.com/([a-zA-Z0-9_-]+)").expect("valid regex");

    let mut competitors = Vec::new();
    for element in document.select(&items).take(TOP_RESULTS) {
        let link = element.value().attr("href").unwrap_or("").to_string();
        let title: String = element.text().collect::<String>().trim().to_string();

        let Some(cap) = id_pattern.captures(&link) else {
            continue;
        };
        let blog_id = cap[1].to_string();
        competitors.push(CompetitorItem {
            rank: competitors.len() + 1,
            is_mine: !my_blog_id.is_empty() && blog_id == my_blog_id,
            blog_id,
            title: title.chars().take(TITLE_LEN).collect(),
            link,
        });
    }
    competitors
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_PAGE: &str = r#"
        <a class="api_txt_lines total_tit" href="https://blog.naver.com/top_writer/2230000000001">맛집 1위 글</a>
        <a class="title_link" href="https://blog.naver.com/hani/2230000000002">내 글</a>
        <a class="title_link" href="https://cafe.naver.com/not_a_blog/99">카페 글</a>
        <a class="title_link" href="https://blog.naver.com/third_one/2230000000003">세번째 글</a>
    "#;

    #[test]
    fn parses_top_results_and_flags_mine() {
        let competitors = parse_competitors(SEARCH_PAGE, "hani");
        assert_eq!(competitors.len(), 3, "non-blog links are skipped");
        assert_eq!(competitors[0].blog_id, "top_writer");
        assert_eq!(competitors[0].rank, 1);
        assert!(!competitors[0].is_mine);
        assert_eq!(competitors[1].blog_id, "hani");
        assert!(competitors[1].is_mine);
        assert_eq!(competitors[2].rank, 3);
    }

    #[test]
    fn empty_blog_id_never_matches() {
        let competitors = parse_competitors(SEARCH_PAGE, "");
        assert!(competitors.iter().all(|c| !c.is_mine));
    }

    #[test]
    fn long_titles_are_clipped() {
        let long_title = "가".repeat(80);
        let html = format!(
            r#"<a class="title_link" href="https://blog.naver.com/writer/1">{long_title}</a>"#
        );
        let competitors = parse_competitors(&html, "");
        assert_eq!(competitors[0].title.chars().count(), 50);
    }

    #[test]
    fn no_results_yield_empty_list() {
        assert!(parse_competitors("<html><body></body></html>", "hani").is_empty());
    }
}
