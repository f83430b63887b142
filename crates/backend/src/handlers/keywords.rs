use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use contracts::projections::p901_keyword_counts::dto::{
    ClearKeywordsResponse, KeywordCount, TopKeywordsQuery,
};
use serde_json::json;

use super::catalog::{task_failed, ApiError};
use crate::shared::data::context::get_context;

/// GET /api/keywords/top?limit=10
pub async fn top(Query(query): Query<TopKeywordsQuery>) -> Json<Vec<KeywordCount>> {
    Json(get_context().keywords.top(query.limit))
}

/// DELETE /api/keywords
pub async fn clear() -> Result<Json<ClearKeywordsResponse>, ApiError> {
    let cleared = tokio::task::spawn_blocking(|| get_context().keywords.clear())
        .await
        .map_err(task_failed)?;
    match cleared {
        Ok(cleared) => Ok(Json(ClearKeywordsResponse { cleared })),
        Err(e) => {
            tracing::error!("Failed to clear keyword history: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            ))
        }
    }
}
