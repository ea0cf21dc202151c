//! Verifies the OpenAPI document covers every drink route and is served by the router.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use drinks_catalog::openapi::ApiDoc;
use drinks_catalog::{app_router, AppState, DrinkCatalog, MemoryDrinkStore, Settings};
use std::sync::Arc;
use tower::ServiceExt;
use utoipa::OpenApi;

#[test]
fn every_drink_route_is_documented() {
    let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
    let paths = &json["paths"];
    for (path, method) in [
        ("/drinks", "get"),
        ("/drinks", "post"),
        ("/drinks/{id}", "delete"),
        ("/drinks/{id}", "patch"),
        ("/drinks/{id}", "put"),
        ("/drinks/average_price", "get"),
        ("/drinks/max_duration", "get"),
        ("/drinks/min_duration", "get"),
    ] {
        assert!(
            paths[path][method].is_object(),
            "{} {} should be documented",
            method.to_uppercase(),
            path
        );
    }
}

#[test]
fn list_documents_all_filters() {
    let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
    let params = json["paths"]["/drinks"]["get"]["parameters"]
        .as_array()
        .expect("GET /drinks should have parameters");
    let names: Vec<&str> = params.iter().filter_map(|p| p["name"].as_str()).collect();
    for expected in ["name", "min_price", "max_price", "min_duration", "max_duration"] {
        assert!(names.contains(&expected), "missing filter {expected}");
    }
}

#[test]
fn drink_schema_has_all_fields() {
    let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
    let props = &json["components"]["schemas"]["Drink"]["properties"];
    for field in ["id", "name", "description", "price", "duration"] {
        assert!(props[field].is_object(), "Drink schema missing {field}");
    }
}

#[tokio::test]
async fn document_is_served_at_swagger_path() {
    let state = AppState::new(DrinkCatalog::new(Arc::new(MemoryDrinkStore::new())));
    let app = app_router(state, Settings::default().body_limit);
    let response = app
        .oneshot(Request::builder().uri("/swagger").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["info"]["title"], "Drinks Catalog API");
}
