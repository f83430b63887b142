use axum::http::StatusCode;
use axum::Json;
use contracts::usecases::u501_product_search::dto::{CatalogFacets, SearchRequest, SearchResponse};
use serde_json::json;
use tokio::task::JoinError;

use crate::domain::a001_catalog_product::DataLoadError;
use crate::shared::data::context::get_context;
use crate::usecases::u501_product_search;

pub(crate) type ApiError = (StatusCode, Json<serde_json::Value>);

fn catalog_unavailable(e: DataLoadError) -> ApiError {
    tracing::error!("Catalog is not available: {}", e);
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({"error": e.to_string()})),
    )
}

/// Паника или отмена задачи в blocking-пуле tokio
pub(crate) fn task_failed(e: JoinError) -> ApiError {
    tracing::error!("Blocking task failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "internal error"})),
    )
}

/// GET /api/catalog/facets
pub async fn get_facets() -> Result<Json<CatalogFacets>, ApiError> {
    let catalog = tokio::task::spawn_blocking(|| get_context().catalog())
        .await
        .map_err(task_failed)?
        .map_err(catalog_unavailable)?;
    Ok(Json(catalog.facets()))
}

/// POST /api/catalog/search
///
/// Разбор файла каталога и запись статистики блокируют поток, поэтому
/// выполняются через `spawn_blocking`.
pub async fn search(Json(req): Json<SearchRequest>) -> Result<Json<SearchResponse>, ApiError> {
    tokio::task::spawn_blocking(move || run_search(req))
        .await
        .map_err(task_failed)?
        .map(Json)
}

fn run_search(req: SearchRequest) -> Result<SearchResponse, ApiError> {
    let ctx = get_context();
    let catalog = ctx.catalog().map_err(catalog_unavailable)?;

    // Сессия меняется под блокировкой хранилища: параллельные запросы
    // одной сессии не засчитывают запрос дважды
    let result = match req.session_id {
        Some(id) => {
            let mut result = None;
            ctx.sessions.update(id, &mut |session| {
                result = Some(u501_product_search::search(
                    &catalog,
                    &ctx.keywords,
                    Some(session),
                    req.criteria.clone(),
                ));
            });
            match result {
                Some(r) => r,
                None => {
                    return Err((
                        StatusCode::NOT_FOUND,
                        Json(json!({"error": format!("session {} not found", id)})),
                    ))
                }
            }
        }
        None => u501_product_search::search(&catalog, &ctx.keywords, None, req.criteria),
    };

    let outcome = match result {
        Ok(v) => v,
        Err(e) => {
            tracing::error!("Search keyword could not be saved: {}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            ));
        }
    };

    Ok(SearchResponse {
        total: outcome.products.len(),
        catalog_size: catalog.len(),
        products: outcome.products,
        keyword_recorded: outcome.keyword_recorded,
    })
}
