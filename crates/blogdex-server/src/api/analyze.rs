//! `GET /api/analyze` — full blog analysis.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blogdex_core::types::{BlogProfile, WeeklyStats};
use serde::{Deserialize, Serialize};

use super::{error_response, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeParams {
    blog_id: Option<String>,
    weekly_avg: Option<u32>,
    weekly_count: Option<u32>,
}

/// Analysis response: the profile plus request-echo fields the frontend
/// renders alongside it.
#[derive(Debug, Serialize)]
pub(super) struct AnalyzeResponse {
    #[serde(flatten)]
    pub profile: BlogProfile,
    pub platform: &'static str,
    /// Echoed weekly average, zeroed when fewer than two days backed it.
    pub weekly_avg_used: u32,
    pub weekly_count: u32,
}

pub(super) async fn analyze_blog(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Response {
    let Some(blog_id) = normalize_blog_id(params.blog_id.as_deref()) else {
        return error_response(StatusCode::BAD_REQUEST, "블로그 ID를 입력해주세요.");
    };

    let weekly = WeeklyStats {
        avg: params.weekly_avg.unwrap_or(0),
        count: params.weekly_count.unwrap_or(0),
    };

    let profile = state.analyzer.analyze(&blog_id, weekly).await;

    Json(AnalyzeResponse {
        profile,
        platform: "naver",
        weekly_avg_used: if weekly.count >= 2 { weekly.avg } else { 0 },
        weekly_count: weekly.count,
    })
    .into_response()
}

/// Reduce a profile URL to its bare blog identifier; bare ids pass through.
pub(super) fn normalize_blog_id(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Some(rest) = raw.split("blog.naver.com/").nth(1) {
        let id = rest
            .split('/')
            .next()
            .unwrap_or("")
            .split('?')
            .next()
            .unwrap_or("");
        if id.is_empty() {
            return None;
        }
        return Some(id.to_string());
    }
    Some(raw.to_string())
}
