//! `GET /api/trends` — trending-keyword list with a static fallback.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use super::{now_iso, AppState};

/// Response cap.
const MAX_TRENDS: usize = 15;

/// Below this many upstream entries the static list is served instead.
const MIN_UPSTREAM_TRENDS: usize = 5;

/// Evergreen blog-topic keywords served when the upstream is unavailable.
const FALLBACK_TRENDS: &[(&str, &str)] = &[
    ("맛집 추천", "맛집"),
    ("여행 코스", "여행"),
    ("다이어트 식단", "건강"),
    ("주식 투자", "재테크"),
    ("인테리어 팁", "라이프"),
    ("육아 정보", "육아"),
    ("자기계발 책 추천", "도서"),
    ("운동 루틴", "운동"),
    ("카페 추천", "카페"),
    ("부업 방법", "재테크"),
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub(super) struct TrendItem {
    pub keyword: String,
    pub category: String,
}

pub(super) async fn trending_keywords(State(state): State<AppState>) -> Response {
    let mut trends = fetch_upstream_trends(&state).await;

    if trends.len() < MIN_UPSTREAM_TRENDS {
        trends = FALLBACK_TRENDS
            .iter()
            .map(|(keyword, category)| TrendItem {
                keyword: (*keyword).to_string(),
                category: (*category).to_string(),
            })
            .collect();
    }
    trends.truncate(MAX_TRENDS);

    Json(serde_json::json!({
        "trends": trends,
        "updated": now_iso(),
    }))
    .into_response()
}

/// Best-effort shopping-insight fetch; any failure yields an empty list.
async fn fetch_upstream_trends(state: &AppState) -> Vec<TrendItem> {
    let url = format!(
        "{}/shoppingInsight/getKeywordRank.naver",
        state.config.trends_base_url.trim_end_matches('/')
    );

    let response = state
        .proxy
        .post(&url)
        .form(&[("cid", "ALL")])
        .header(
            reqwest::header::USER_AGENT,
            state.config.desktop_user_agent.as_str(),
        )
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await;

    match response {
        Ok(response) if response.status().is_success() => match response.json::<Value>().await {
            Ok(data) => parse_trend_payload(&data),
            Err(e) => {
                tracing::debug!(error = %e, "trend payload parse failed");
                Vec::new()
            }
        },
        Ok(response) => {
            tracing::debug!(status = %response.status(), "trend upstream rejected request");
            Vec::new()
        }
        Err(e) => {
            tracing::debug!(error = %e, "trend upstream unreachable");
            Vec::new()
        }
    }
}

pub(super) fn parse_trend_payload(data: &Value) -> Vec<TrendItem> {
    let Some(results) = data.get("result").and_then(Value::as_array) else {
        return Vec::new();
    };
    results
        .iter()
        .take(10)
        .filter_map(|item| {
            let keyword = item.get("keyword")?.as_str()?.to_string();
            if keyword.is_empty() {
                return None;
            }
            Some(TrendItem {
                keyword,
                category: "쇼핑".to_string(),
            })
        })
        .collect()
}
