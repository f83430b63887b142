use contracts::projections::p901_keyword_counts::dto::{
    ClearKeywordsResponse, KeywordCount, TopKeywordsQuery,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_message};

/// Самые частые поисковые запросы
pub async fn fetch_top(limit: usize) -> Result<Vec<KeywordCount>, String> {
    let query = serde_qs::to_string(&TopKeywordsQuery { limit })
        .map_err(|e| format!("Failed to build query: {}", e))?;

    let response = Request::get(&api_url(&format!("/keywords/top?{}", query)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Очистка истории поиска
pub async fn clear_history() -> Result<ClearKeywordsResponse, String> {
    let response = Request::delete(&api_url("/keywords"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
