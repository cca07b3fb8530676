//! The car entity and its API models.
//!
//! `Car` is the persisted shape with a server-assigned identifier;
//! `CarCreate` is the draft shape with no identity yet. Updates come in two
//! flavors: `CarUpdate` replaces the full record, `CarPatch` merges only the
//! fields present in the payload.

use axum::{Router, routing::get};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    DatabaseConnection,
    entity::prelude::*,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ApiError;
use crate::routes;
use crate::traits::{CrudResource, MergeIntoActiveModel, PayloadId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
    pub age: Option<f64>,
    pub is_broken: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS car (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    age DOUBLE,
    is_broken BOOLEAN
)";

/// A persisted car record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub name: Option<String>,
    pub age: Option<f64>,
    pub is_broken: Option<bool>,
}

impl From<Model> for Car {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            age: model.age,
            is_broken: model.is_broken,
        }
    }
}

/// A car draft: same fields, no identity yet. Clients conventionally send
/// `"id": null`; a non-null id is rejected before the insert.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarCreate {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub is_broken: Option<bool>,
}

impl PayloadId for CarCreate {
    fn payload_id(&self) -> Option<i64> {
        self.id
    }
}

impl From<CarCreate> for ActiveModel {
    fn from(draft: CarCreate) -> Self {
        Self {
            id: NotSet,
            name: Set(draft.name),
            age: Set(draft.age),
            is_broken: Set(draft.is_broken),
        }
    }
}

/// Full-record replacement payload. Every field is written, so omitted
/// optional fields become null.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarUpdate {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub is_broken: Option<bool>,
}

impl PayloadId for CarUpdate {
    fn payload_id(&self) -> Option<i64> {
        self.id
    }
}

impl MergeIntoActiveModel<ActiveModel> for CarUpdate {
    fn merge_into_activemodel(self, mut existing: ActiveModel) -> Result<ActiveModel, ApiError> {
        existing.name = Set(self.name);
        existing.age = Set(self.age);
        existing.is_broken = Set(self.is_broken);
        Ok(existing)
    }
}

/// Merge-patch payload. An absent field keeps its stored value; an explicit
/// null clears it.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarPatch {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub age: Option<Option<f64>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub is_broken: Option<Option<bool>>,
}

impl PayloadId for CarPatch {
    fn payload_id(&self) -> Option<i64> {
        self.id
    }
}

impl MergeIntoActiveModel<ActiveModel> for CarPatch {
    fn merge_into_activemodel(self, mut existing: ActiveModel) -> Result<ActiveModel, ApiError> {
        if let Some(name) = self.name {
            existing.name = Set(name);
        }
        if let Some(age) = self.age {
            existing.age = Set(age);
        }
        if let Some(is_broken) = self.is_broken {
            existing.is_broken = Set(is_broken);
        }
        Ok(existing)
    }
}

impl CrudResource for Car {
    type EntityType = Entity;
    type ColumnType = Column;
    type ActiveModelType = ActiveModel;
    type CreateModel = CarCreate;
    type UpdateModel = CarUpdate;
    type PatchModel = CarPatch;

    const ID_COLUMN: Column = Column::Id;
    const RESOURCE_NAME_SINGULAR: &str = "car";
    const RESOURCE_NAME_PLURAL: &str = "cars";

    fn id(&self) -> i64 {
        self.id
    }

    fn sortable_columns() -> Vec<(&'static str, Column)> {
        vec![
            ("id", Column::Id),
            ("name", Column::Name),
            ("age", Column::Age),
            ("isBroken", Column::IsBroken),
        ]
    }

    fn filterable_columns() -> Vec<(&'static str, Column)> {
        vec![
            ("id", Column::Id),
            ("name", Column::Name),
            ("age", Column::Age),
            ("isBroken", Column::IsBroken),
        ]
    }

    fn searchable_columns() -> Vec<(&'static str, Column)> {
        vec![("name", Column::Name)]
    }
}

/// The car feature's route table, mounted by the registry.
pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/", get(routes::get_all::<Car>).post(routes::create_one::<Car>))
        .route(
            "/{id}",
            get(routes::get_one::<Car>)
                .put(routes::update_one::<Car>)
                .patch(routes::patch_one::<Car>)
                .delete(routes::delete_one::<Car>),
        )
        .with_state(db)
}
