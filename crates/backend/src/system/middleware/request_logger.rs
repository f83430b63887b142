use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_number;

/// Одна строка на запрос: время, длительность, размер, статус, метод, путь.
///
/// Размер ответов API считается по телу, для статики (wasm, схема магазина)
/// берется из Content-Length, тело не буферизуется.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_api = path.starts_with("/api/");

    let response = next.run(req).await;

    let (response, size) = if is_api {
        let (parts, body) = response.into_parts();
        match to_bytes(body, usize::MAX).await {
            Ok(bytes) => {
                let size = format_number(bytes.len());
                (Response::from_parts(parts, Body::from(bytes)), size)
            }
            Err(e) => {
                tracing::warn!("Failed to read response body for {}: {}", path, e);
                (Response::from_parts(parts, Body::default()), "error".to_string())
            }
        }
    } else {
        let size = response
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<usize>().ok())
            .map(format_number)
            .unwrap_or_else(|| "-".to_string());
        (response, size)
    };

    let status = response.status();
    // Голубой для успешных ответов, коричневый для остальных
    let color_code = if status.is_success() { "36" } else { "33" };
    let elapsed = start.elapsed().as_millis();

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        elapsed,
        size,
        status.as_u16(),
        method,
        path
    );
    if status.is_server_error() {
        tracing::warn!("{} {} -> {} in {}ms", method, path, status, elapsed);
    }

    response
}
