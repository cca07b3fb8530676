use car_gateway::config::Config;
use car_gateway::entities::{
    self,
    car::{Car, CarCreate, CarPatch, CarUpdate},
};
use car_gateway::models::ListParams;
use car_gateway::registry;
use sea_orm::{Database, DatabaseConnection};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "car-gateway",
        description = "Car entity CRUD gateway"
    ),
    components(schemas(Car, CarCreate, CarUpdate, CarPatch, ListParams))
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(false).compact().init();

    let config = Config::from_env();
    let db: DatabaseConnection = Database::connect(&config.database_url).await?;
    entities::bootstrap_schema(&db).await?;

    let app = registry::build_router(&db)
        .await
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "car gateway listening");
    axum::serve(listener, app).await?;
    Ok(())
}
