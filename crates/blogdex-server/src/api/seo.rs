//! `GET /api/seo-score` — SEO aggregate over a blog's enriched posts.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blogdex_core::types::WeeklyStats;
use serde::Deserialize;

use super::analyze::normalize_blog_id;
use super::{error_response, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SeoParams {
    blog_id: Option<String>,
}

pub(super) async fn seo_score(
    State(state): State<AppState>,
    Query(params): Query<SeoParams>,
) -> Response {
    let Some(blog_id) = normalize_blog_id(params.blog_id.as_deref()) else {
        return error_response(StatusCode::BAD_REQUEST, "블로그 ID를 입력해주세요.");
    };

    let profile = state
        .analyzer
        .analyze(&blog_id, WeeklyStats::default())
        .await;
    let score = blogdex_score::calculate_seo_score(&profile.posts_with_index);
    Json(score).into_response()
}
