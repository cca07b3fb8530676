use async_trait::async_trait;
use sea_orm::{
    Condition, DatabaseConnection, EntityTrait, IntoActiveModel, Order, PaginatorTrait, QueryOrder,
    QuerySelect, entity::prelude::*,
};
use serde::{Serialize, de::DeserializeOwned};

use crate::errors::ApiError;

/// Payload-side view of the identifier a request body carries, used for the
/// body/path consistency checks the REST layer performs before touching the
/// database. A draft serializes its missing identity as an explicit null, so
/// every payload type can answer this.
pub trait PayloadId {
    fn payload_id(&self) -> Option<i64>;
}

/// Fold an update or patch payload into the active model loaded from the
/// database. Update payloads replace every field; patch payloads only touch
/// the fields they carry.
pub trait MergeIntoActiveModel<ActiveModelType> {
    fn merge_into_activemodel(self, existing: ActiveModelType)
    -> Result<ActiveModelType, ApiError>;
}

/// A REST-managed record type with server-assigned integer identity.
///
/// Implementors wire a Sea-ORM entity to its API models; the default method
/// bodies supply the whole persistence side of the CRUD surface, so a
/// resource normally only declares its types, columns and names.
#[async_trait]
pub trait CrudResource: Sized + Send + Sync + Serialize
where
    Self::EntityType: EntityTrait + Sync,
    Self::ActiveModelType: ActiveModelTrait + ActiveModelBehavior + Send + Sync,
    <Self::EntityType as EntityTrait>::Model: Sync + IntoActiveModel<Self::ActiveModelType>,
    <<Self::EntityType as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
    <<Self::EntityType as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: Into<i64>,
    Self: From<<Self::EntityType as EntityTrait>::Model>,
{
    type EntityType: EntityTrait + Sync;
    type ColumnType: ColumnTrait + Copy + std::fmt::Debug;
    type ActiveModelType: ActiveModelTrait<Entity = Self::EntityType>;
    type CreateModel: Into<Self::ActiveModelType> + PayloadId + DeserializeOwned + Send;
    type UpdateModel: MergeIntoActiveModel<Self::ActiveModelType>
        + PayloadId
        + DeserializeOwned
        + Send
        + Sync;
    type PatchModel: MergeIntoActiveModel<Self::ActiveModelType>
        + PayloadId
        + DeserializeOwned
        + Send
        + Sync;

    const ID_COLUMN: Self::ColumnType;
    const RESOURCE_NAME_SINGULAR: &str;
    const RESOURCE_NAME_PLURAL: &str;

    /// Server-assigned identifier of this record.
    fn id(&self) -> i64;

    async fn get_all(
        db: &DatabaseConnection,
        condition: Condition,
        order_column: Self::ColumnType,
        order_direction: Order,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self>, ApiError> {
        let models = Self::EntityType::find()
            .filter(condition)
            .order_by(order_column, order_direction)
            .offset(offset)
            .limit(limit)
            .all(db)
            .await?;
        Ok(models.into_iter().map(Self::from).collect())
    }

    async fn get_one(db: &DatabaseConnection, id: i64) -> Result<Self, ApiError> {
        let model = Self::EntityType::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ApiError::not_found(Self::RESOURCE_NAME_SINGULAR, Some(id)))?;
        Ok(Self::from(model))
    }

    async fn create(
        db: &DatabaseConnection,
        create_model: Self::CreateModel,
    ) -> Result<Self, ApiError> {
        let active_model: Self::ActiveModelType = create_model.into();
        let result = Self::EntityType::insert(active_model).exec(db).await?;
        Self::get_one(db, result.last_insert_id.into()).await
    }

    /// Full-record replacement. The record must already exist; a missing row
    /// is an id error on the caller's side, not a lookup miss.
    async fn update(
        db: &DatabaseConnection,
        id: i64,
        update_model: Self::UpdateModel,
    ) -> Result<Self, ApiError> {
        let model = Self::EntityType::find_by_id(id).one(db).await?.ok_or_else(|| {
            ApiError::bad_request(format!(
                "{} to update does not exist",
                Self::RESOURCE_NAME_SINGULAR
            ))
        })?;
        let existing: Self::ActiveModelType = model.into_active_model();
        let merged = update_model.merge_into_activemodel(existing)?;
        let updated = merged.update(db).await?;
        Ok(Self::from(updated))
    }

    /// Field merge. Only the fields the payload carries are written.
    async fn patch(
        db: &DatabaseConnection,
        id: i64,
        patch_model: Self::PatchModel,
    ) -> Result<Self, ApiError> {
        let model = Self::EntityType::find_by_id(id).one(db).await?.ok_or_else(|| {
            ApiError::bad_request(format!(
                "{} to update does not exist",
                Self::RESOURCE_NAME_SINGULAR
            ))
        })?;
        let existing: Self::ActiveModelType = model.into_active_model();
        let merged = patch_model.merge_into_activemodel(existing)?;
        let updated = merged.update(db).await?;
        Ok(Self::from(updated))
    }

    /// Delete by id. Deleting an absent record is not an error; removal is
    /// idempotent.
    async fn delete(db: &DatabaseConnection, id: i64) -> Result<(), ApiError> {
        Self::EntityType::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    async fn total_count(db: &DatabaseConnection, condition: Condition) -> Result<u64, ApiError> {
        let query = Self::EntityType::find().filter(condition);
        Ok(PaginatorTrait::count(query, db).await?)
    }

    /// Columns exposed for sorting, keyed by their wire name.
    #[must_use]
    fn sortable_columns() -> Vec<(&'static str, Self::ColumnType)> {
        vec![("id", Self::ID_COLUMN)]
    }

    /// Columns exposed for per-key filtering, keyed by their wire name.
    #[must_use]
    fn filterable_columns() -> Vec<(&'static str, Self::ColumnType)> {
        vec![("id", Self::ID_COLUMN)]
    }

    /// Text columns covered by the free-text `q` filter.
    #[must_use]
    fn searchable_columns() -> Vec<(&'static str, Self::ColumnType)> {
        vec![]
    }
}
