use contracts::usecases::u501_product_search::criteria::SearchCriteria;
use contracts::usecases::u501_product_search::dto::{
    CatalogFacets, SearchRequest, SearchResponse, SessionDto,
};
use gloo_net::http::Request;
use uuid::Uuid;

use crate::shared::api_utils::{api_url, error_message, ApiError};

/// Значения фильтров каталога (бренды, диапазон цен)
pub async fn fetch_facets() -> Result<CatalogFacets, String> {
    let response = Request::get(&api_url("/catalog/facets"))
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

/// Поиск товаров; непустой запрос попадает в статистику.
/// Ошибка сохраняет HTTP-статус: 404 означает неизвестную сессию.
pub async fn search(
    session_id: Option<Uuid>,
    criteria: SearchCriteria,
) -> Result<SearchResponse, ApiError> {
    let body = SearchRequest {
        session_id,
        criteria,
    };

    let response = Request::post(&api_url("/catalog/search"))
        .json(&body)
        .map_err(|e| ApiError::network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Request failed: {}", e)))?;

    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::network(format!("Failed to parse response: {}", e)))
}

pub async fn create_session() -> Result<SessionDto, String> {
    let response = Request::post(&api_url("/sessions"))
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

/// Сброс фильтров сессии
pub async fn reset_session(session_id: Uuid) -> Result<SessionDto, String> {
    let response = Request::post(&api_url(&format!("/sessions/{}/reset", session_id)))
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
