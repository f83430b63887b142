use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::usecases::u501_product_search::dto::SessionDto;

use crate::shared::data::context::get_context;
use crate::usecases::u501_product_search;

/// POST /api/sessions
pub async fn create() -> Json<SessionDto> {
    Json(get_context().sessions.create().to_dto())
}

/// GET /api/sessions/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<SessionDto>, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match get_context().sessions.get(uuid) {
        Some(s) => Ok(Json(s.to_dto())),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// POST /api/sessions/:id/reset
pub async fn reset(Path(id): Path<String>) -> Result<Json<SessionDto>, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    let mut dto = None;
    get_context().sessions.update(uuid, &mut |session| {
        u501_product_search::reset(session);
        dto = Some(session.to_dto());
    });
    dto.map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// DELETE /api/sessions/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    if get_context().sessions.remove(uuid) {
        Ok(())
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
