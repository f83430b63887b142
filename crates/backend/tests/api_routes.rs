use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use backend::routes::configure_routes;
use backend::shared::data::context::{initialize_context, AppContext};
use contracts::projections::p901_keyword_counts::dto::KeywordCount;
use contracts::usecases::u501_product_search::dto::{CatalogFacets, SearchResponse, SessionDto};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

// Single test: the application context is process-wide
#[tokio::test]
async fn api_search_flow() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.csv");
    std::fs::write(
        &catalog_path,
        "product_title,brand,price,after_sale,Korting,bbd,image,link\n\
         Milk 1L,Acme,2.50,,,,img,lnk\n\
         Bread,Acme,3.00,2.70,10%,,img,lnk\n",
    )
    .unwrap();
    let keywords_path = dir.path().join("keywords.json");
    initialize_context(AppContext::new(catalog_path.clone(), keywords_path.clone())).unwrap();

    let app = configure_routes();

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");

    let (status, body) = send(&app, "GET", "/api/catalog/facets", None).await;
    assert_eq!(status, StatusCode::OK);
    let facets: CatalogFacets = serde_json::from_slice(&body).unwrap();
    assert_eq!(facets.total, 2);
    assert_eq!(facets.brands, vec!["Acme"]);

    let (status, body) = send(&app, "POST", "/api/sessions", None).await;
    assert_eq!(status, StatusCode::OK);
    let session: SessionDto = serde_json::from_slice(&body).unwrap();

    let search_body = json!({
        "sessionId": session.session_id,
        "criteria": {"query": "milk"}
    });
    let (status, body) = send(&app, "POST", "/api/catalog/search", Some(search_body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let result: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.catalog_size, 2);
    assert!(result.keyword_recorded);

    // Same query in the same session is not counted twice
    let (_, body) = send(&app, "POST", "/api/catalog/search", Some(search_body)).await;
    let result: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert!(!result.keyword_recorded);

    let (status, body) = send(&app, "GET", "/api/keywords/top?limit=5", None).await;
    assert_eq!(status, StatusCode::OK);
    let top: Vec<KeywordCount> = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        top,
        vec![KeywordCount {
            keyword: "milk".to_string(),
            count: 1
        }]
    );

    let uri = format!("/api/sessions/{}/reset", session.session_id);
    let (status, body) = send(&app, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let reset: SessionDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(reset.criteria.query, "");

    let uri = format!("/api/sessions/{}", session.session_id);
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let deleted = json!({"sessionId": session.session_id, "criteria": {"query": "bread"}});
    let (status, _) = send(&app, "POST", "/api/catalog/search", Some(deleted)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let unknown = json!({"sessionId": uuid::Uuid::new_v4(), "criteria": {}});
    let (status, _) = send(&app, "POST", "/api/catalog/search", Some(unknown)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "POST", "/api/sessions/not-a-uuid/reset", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "DELETE", "/api/keywords", None).await;
    assert_eq!(status, StatusCode::OK);
    let persisted = std::fs::read_to_string(&keywords_path).unwrap();
    assert_eq!(persisted.trim(), "{}");

    // Catalog removed: search reports the load error
    std::fs::remove_file(&catalog_path).unwrap();
    let (status, body) = send(&app, "POST", "/api/catalog/search", Some(json!({}))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert!(error["error"].as_str().unwrap().contains("not found"));
}
