use axum::Router;
use car_gateway::entities::bootstrap_schema;
use car_gateway::entities::car::{Car, CarCreate};
use car_gateway::registry;
use sea_orm::{Database, DatabaseConnection, DbErr};

#[allow(dead_code)]
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    bootstrap_schema(&db).await?;
    Ok(db)
}

#[allow(dead_code)]
pub async fn setup_test_app() -> Router {
    let db = setup_test_db().await.expect("Failed to setup test database");
    registry::build_router(&db).await
}

// Sample records shared across tests.

#[allow(dead_code)]
pub fn sample_with_required_data() -> Car {
    Car {
        id: 4218,
        name: None,
        age: None,
        is_broken: None,
    }
}

#[allow(dead_code)]
pub fn sample_with_partial_data() -> Car {
    Car {
        id: 7884,
        name: None,
        age: Some(10529.74),
        is_broken: None,
    }
}

#[allow(dead_code)]
pub fn sample_with_full_data() -> Car {
    Car {
        id: 22796,
        name: Some("testimonial yahoo a".to_string()),
        age: Some(11683.4),
        is_broken: Some(true),
    }
}

#[allow(dead_code)]
pub fn sample_with_new_data() -> CarCreate {
    CarCreate::default()
}
