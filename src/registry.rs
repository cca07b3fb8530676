//! The entity route table.
//!
//! Each entity contributes one descriptor: the path segment it is mounted
//! under, the page-title key its pages resolve through translation, and a
//! loader that yields the feature's own route table. Loaders are resolved
//! when the application router is built, before the listener accepts
//! traffic; new entities extend the table without touching the generic
//! layer. Order affects enumeration only.

use std::{future::Future, pin::Pin};

use axum::Router;
use sea_orm::DatabaseConnection;

use crate::entities::car;

type RouterFuture = Pin<Box<dyn Future<Output = Router> + Send>>;

/// Loader yielding a feature's route table.
pub type RouteLoader = fn(DatabaseConnection) -> RouterFuture;

/// One entity's entry in the route table.
pub struct EntityRoutes {
    /// Path segment the feature is mounted under.
    pub path: &'static str,
    /// Translation key for the feature's page title.
    pub page_title: &'static str,
    /// Loader for the feature's route table.
    pub loader: RouteLoader,
}

fn car_loader(db: DatabaseConnection) -> RouterFuture {
    Box::pin(async move { car::router(db) })
}

/// The static, ordered entity route table.
#[must_use]
pub fn entity_routes() -> Vec<EntityRoutes> {
    vec![EntityRoutes {
        path: "cars",
        page_title: "gatewayApp.carCar.home.title",
        loader: car_loader,
    }]
}

/// Resolve every loader and assemble the application router, with each
/// feature nested under `/api/<path>`.
pub async fn build_router(db: &DatabaseConnection) -> Router {
    let mut api = Router::new();
    for entry in entity_routes() {
        let feature = (entry.loader)(db.clone()).await;
        api = api.nest(&format!("/{}", entry.path), feature);
    }
    Router::new().nest("/api", api)
}
