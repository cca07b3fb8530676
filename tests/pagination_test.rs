// Pagination behavior of the list endpoint: Link relations, X-Total-Count,
// page slicing and sorting.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use car_gateway::entities::car::Car;
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::setup_test_app;

async fn seed_cars(app: &Router, count: usize) {
    for i in 0..count {
        let body = json!({
            "name": format!("car-{i:02}"),
            "age": i as f64,
            "isBroken": i % 2 == 0
        });
        let request = Request::builder()
            .method("POST")
            .uri("/api/cars")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

async fn list(app: &Router, uri: &str) -> (String, String, Vec<Car>) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let link = response
        .headers()
        .get("link")
        .expect("Link header missing")
        .to_str()
        .unwrap()
        .to_string();
    let total = response
        .headers()
        .get("x-total-count")
        .expect("X-Total-Count header missing")
        .to_str()
        .unwrap()
        .to_string();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let cars: Vec<Car> = serde_json::from_slice(&body).expect("Failed to parse car list");
    (link, total, cars)
}

#[tokio::test]
async fn test_middle_page_links_and_slice() {
    let app = setup_test_app().await;
    seed_cars(&app, 25).await;

    let (link, total, cars) = list(&app, "/api/cars?page=1&size=10&sort=name,asc").await;

    assert_eq!(total, "25");
    assert_eq!(cars.len(), 10);
    assert_eq!(cars[0].name.as_deref(), Some("car-10"));
    assert_eq!(cars[9].name.as_deref(), Some("car-19"));

    assert!(link.contains("</api/cars?page=2&size=10>; rel=\"next\""));
    assert!(link.contains("</api/cars?page=0&size=10>; rel=\"prev\""));
    assert!(link.contains("</api/cars?page=2&size=10>; rel=\"last\""));
    assert!(link.contains("</api/cars?page=0&size=10>; rel=\"first\""));
}

#[tokio::test]
async fn test_edge_pages_drop_missing_neighbors() {
    let app = setup_test_app().await;
    seed_cars(&app, 25).await;

    let (link, _, cars) = list(&app, "/api/cars?page=0&size=10").await;
    assert_eq!(cars.len(), 10);
    assert!(link.contains("rel=\"next\""));
    assert!(!link.contains("rel=\"prev\""));

    let (link, _, cars) = list(&app, "/api/cars?page=2&size=10").await;
    assert_eq!(cars.len(), 5);
    assert!(!link.contains("rel=\"next\""));
    assert!(link.contains("rel=\"prev\""));
}

#[tokio::test]
async fn test_default_page_size_is_twenty() {
    let app = setup_test_app().await;
    seed_cars(&app, 25).await;

    let (_, total, cars) = list(&app, "/api/cars").await;
    assert_eq!(total, "25");
    assert_eq!(cars.len(), 20);
}

#[tokio::test]
async fn test_sort_descending() {
    let app = setup_test_app().await;
    seed_cars(&app, 25).await;

    let (_, _, cars) = list(&app, "/api/cars?size=5&sort=age,desc").await;
    assert_eq!(cars.len(), 5);
    assert_eq!(cars[0].age, Some(24.0));
    assert_eq!(cars[4].age, Some(20.0));
}

#[tokio::test]
async fn test_empty_list_still_paginates() {
    let app = setup_test_app().await;

    let (link, total, cars) = list(&app, "/api/cars").await;
    assert_eq!(total, "0");
    assert!(cars.is_empty());
    assert!(link.contains("rel=\"first\""));
    assert!(link.contains("rel=\"last\""));
}
