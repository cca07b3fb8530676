// Filtering behavior of the list endpoint: per-column matches, id sets and
// free-text search.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use car_gateway::entities::car::Car;
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::setup_test_app;

// Just enough escaping to put a JSON filter object into a query string.
fn encode_filter(filter: &str) -> String {
    filter
        .replace('%', "%25")
        .replace('"', "%22")
        .replace('{', "%7B")
        .replace('}', "%7D")
        .replace('[', "%5B")
        .replace(']', "%5D")
        .replace(' ', "%20")
}

async fn create_car(app: &Router, body: serde_json::Value) -> Car {
    let request = Request::builder()
        .method("POST")
        .uri("/api/cars")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).expect("Failed to parse created car")
}

async fn list_filtered(app: &Router, filter: &str) -> Vec<Car> {
    let uri = format!("/api/cars?filter={}", encode_filter(filter));
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).expect("Failed to parse car list")
}

async fn seed(app: &Router) -> (Car, Car, Car) {
    let volvo = create_car(
        app,
        json!({"name": "Volvo 240", "age": 31.0, "isBroken": false}),
    )
    .await;
    let saab = create_car(
        app,
        json!({"name": "Saab 900", "age": 28.0, "isBroken": true}),
    )
    .await;
    let lada = create_car(
        app,
        json!({"name": "Lada Niva", "age": 40.0, "isBroken": true}),
    )
    .await;
    (volvo, saab, lada)
}

#[tokio::test]
async fn test_filter_by_name_contains() {
    let app = setup_test_app().await;
    let (volvo, _, _) = seed(&app).await;

    let cars = list_filtered(&app, r#"{"name": "olvo"}"#).await;
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, volvo.id);
}

#[tokio::test]
async fn test_filter_by_boolean_flag() {
    let app = setup_test_app().await;
    let (volvo, saab, lada) = seed(&app).await;

    let broken = list_filtered(&app, r#"{"isBroken": true}"#).await;
    let broken_ids: Vec<i64> = broken.iter().map(|c| c.id).collect();
    assert_eq!(broken_ids, vec![saab.id, lada.id]);

    let working = list_filtered(&app, r#"{"isBroken": false}"#).await;
    assert_eq!(working.len(), 1);
    assert_eq!(working[0].id, volvo.id);
}

#[tokio::test]
async fn test_filter_by_id_set() {
    let app = setup_test_app().await;
    let (volvo, _, lada) = seed(&app).await;

    let filter = format!(r#"{{"id": [{}, {}]}}"#, volvo.id, lada.id);
    let cars = list_filtered(&app, &filter).await;
    let ids: Vec<i64> = cars.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![volvo.id, lada.id]);

    let filter = format!(r#"{{"id": {}}}"#, volvo.id);
    let cars = list_filtered(&app, &filter).await;
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, volvo.id);
}

#[tokio::test]
async fn test_free_text_search() {
    let app = setup_test_app().await;
    let (_, saab, _) = seed(&app).await;

    let cars = list_filtered(&app, r#"{"q": "saab"}"#).await;
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, saab.id);
}

#[tokio::test]
async fn test_unknown_filter_keys_are_ignored() {
    let app = setup_test_app().await;
    seed(&app).await;

    let cars = list_filtered(&app, r#"{"vin": "nope"}"#).await;
    assert_eq!(cars.len(), 3);
}
