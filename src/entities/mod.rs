use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

pub mod car;

/// Create the tables for every registered entity. Idempotent; used by the
/// binary at startup and by the test suite against in-memory databases.
pub async fn bootstrap_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared(car::CREATE_TABLE_SQL).await?;
    Ok(())
}
