//! `GET /api/suggest` — autocomplete keyword proxy.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use serde_json::{json, Value};

use super::AppState;

/// At most this many suggestions are returned.
const MAX_SUGGESTIONS: usize = 15;

#[derive(Debug, Deserialize)]
pub(super) struct SuggestParams {
    keyword: Option<String>,
}

pub(super) async fn keyword_suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Response {
    let keyword = params.keyword.unwrap_or_default();
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Json(json!({
            "error": "키워드를 입력해주세요.",
            "suggestions": [],
        }))
        .into_response();
    }

    let encoded = utf8_percent_encode(keyword, NON_ALPHANUMERIC).to_string();
    let url = format!(
        "{}/mobile/ac?st=100&frm=mobile_sug&q={encoded}",
        state.config.suggest_base_url.trim_end_matches('/')
    );

    let response = state
        .proxy
        .get(&url)
        .header(
            reqwest::header::USER_AGENT,
            state.config.mobile_user_agent.as_str(),
        )
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await;

    match response {
        Ok(response) if response.status().is_success() => {
            match response.json::<Value>().await {
                Ok(data) => {
                    let suggestions = parse_suggestions(&data);
                    Json(json!({ "suggestions": suggestions, "source": "naver" }))
                        .into_response()
                }
                Err(e) => {
                    tracing::warn!(error = %e, "suggestion payload parse failed");
                    Json(json!({ "suggestions": [], "error": "검색 실패" })).into_response()
                }
            }
        }
        Ok(_) => Json(json!({ "suggestions": [], "error": "검색 실패" })).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "suggestion fetch failed");
            Json(json!({ "suggestions": [], "error": e.to_string() })).into_response()
        }
    }
}

/// Pull suggestion strings out of the autocomplete payload.
///
/// The upstream shape is `{"items": [[[term, ...], [term, ...], ...]]}` —
/// the first entry of each inner list is the suggestion. Order-preserving
/// dedup, capped at 15.
pub(super) fn parse_suggestions(data: &Value) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();
    if let Some(first_group) = data
        .get("items")
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .and_then(Value::as_array)
    {
        for entry in first_group {
            if let Some(term) = entry
                .as_array()
                .and_then(|list| list.first())
                .and_then(Value::as_str)
            {
                if !suggestions.iter().any(|s| s == term) {
                    suggestions.push(term.to_string());
                }
            }
            if suggestions.len() >= MAX_SUGGESTIONS {
                break;
            }
        }
    }
    suggestions
}
