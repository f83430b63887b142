use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::config::{resolve_path, StaticFilesConfig};
use crate::system::middleware::request_logger::request_logger;

/// Маршруты API
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Catalog
        .route("/api/catalog/facets", get(handlers::catalog::get_facets))
        .route("/api/catalog/search", post(handlers::catalog::search))
        // Sessions
        .route("/api/sessions", post(handlers::sessions::create))
        .route(
            "/api/sessions/:id",
            get(handlers::sessions::get_by_id).delete(handlers::sessions::delete),
        )
        .route("/api/sessions/:id/reset", post(handlers::sessions::reset))
        // Keyword history
        .route("/api/keywords/top", get(handlers::keywords::top))
        .route("/api/keywords", delete(handlers::keywords::clear))
}

/// Полное приложение: API, статические файлы (схема магазина) и собранный фронтенд
pub fn build_app(static_files: &StaticFilesConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    configure_routes()
        .nest_service(
            "/assets",
            ServeDir::new(resolve_path(&static_files.assets_dir)),
        )
        .fallback_service(ServeDir::new(resolve_path(&static_files.dist_dir)))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
