//! Generic Axum handlers over any [`CrudResource`].
//!
//! Status codes and headers follow the gateway's REST conventions: lists
//! respond 200 with `Link`/`X-Total-Count` pagination headers, creation
//! responds 201 with a `Location` header, removal responds 204 with no body.
//! Body/path id consistency is checked here, before any database work.

use crate::errors::ApiError;
use crate::filter::apply_filters;
use crate::models::{DEFAULT_PAGE_SIZE, ListParams};
use crate::pagination::pagination_headers;
use crate::sort::parse_sort;
use crate::traits::{CrudResource, PayloadId};
use axum::{
    Json,
    extract::{OriginalUri, Path, Query, State},
    http::{StatusCode, header},
};
use hyper::HeaderMap;
use sea_orm::DatabaseConnection;

/// List a page of resources. Pagination state travels in the response
/// headers; the body is a plain JSON array.
pub async fn get_all<T>(
    Query(params): Query<ListParams>,
    OriginalUri(uri): OriginalUri,
    State(db): State<DatabaseConnection>,
) -> Result<(HeaderMap, Json<Vec<T>>), ApiError>
where
    T: CrudResource,
{
    tracing::debug!("REST request to get a page of {}", T::RESOURCE_NAME_PLURAL);
    let page = params.page.unwrap_or(0);
    let size = params.size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);

    let condition = apply_filters(
        params.filter.as_deref(),
        &T::filterable_columns(),
        &T::searchable_columns(),
    );
    let (order_column, order_direction) =
        parse_sort(params.sort.as_deref(), &T::sortable_columns(), T::ID_COLUMN);

    let items = T::get_all(
        &db,
        condition.clone(),
        order_column,
        order_direction,
        page.saturating_mul(size),
        size,
    )
    .await?;
    let total_count = T::total_count(&db, condition).await?;

    let headers = pagination_headers(uri.path(), page, size, total_count);
    Ok((headers, Json(items)))
}

/// Fetch a single resource by id.
pub async fn get_one<T>(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i64>,
) -> Result<Json<T>, ApiError>
where
    T: CrudResource,
{
    tracing::debug!(id, "REST request to get {}", T::RESOURCE_NAME_SINGULAR);
    let item = T::get_one(&db, id).await?;
    Ok(Json(item))
}

/// Create a resource from a draft payload. The draft must not carry an id;
/// the server assigns one and reports it in the body and `Location` header.
pub async fn create_one<T>(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<T::CreateModel>,
) -> Result<(StatusCode, HeaderMap, Json<T>), ApiError>
where
    T: CrudResource,
{
    tracing::debug!("REST request to save {}", T::RESOURCE_NAME_SINGULAR);
    if payload.payload_id().is_some() {
        return Err(ApiError::bad_request(format!(
            "A new {} cannot already have an id",
            T::RESOURCE_NAME_SINGULAR
        )));
    }

    let created = T::create(&db, payload).await?;

    let mut headers = HeaderMap::new();
    let location = format!("/api/{}/{}", T::RESOURCE_NAME_PLURAL, created.id());
    headers.insert(header::LOCATION, location.parse().unwrap());
    Ok((StatusCode::CREATED, headers, Json(created)))
}

/// Replace an existing resource. The payload must carry the id of the
/// record it replaces, matching the path.
pub async fn update_one<T>(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i64>,
    Json(payload): Json<T::UpdateModel>,
) -> Result<Json<T>, ApiError>
where
    T: CrudResource,
{
    tracing::debug!(id, "REST request to update {}", T::RESOURCE_NAME_SINGULAR);
    check_payload_id(id, payload.payload_id(), T::RESOURCE_NAME_SINGULAR)?;
    let updated = T::update(&db, id, payload).await?;
    Ok(Json(updated))
}

/// Merge the provided fields into an existing resource. Fields the payload
/// does not carry are left untouched; explicit nulls clear their field.
pub async fn patch_one<T>(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i64>,
    Json(payload): Json<T::PatchModel>,
) -> Result<Json<T>, ApiError>
where
    T: CrudResource,
{
    tracing::debug!(
        id,
        "REST request to partial update {}",
        T::RESOURCE_NAME_SINGULAR
    );
    check_payload_id(id, payload.payload_id(), T::RESOURCE_NAME_SINGULAR)?;
    let patched = T::patch(&db, id, payload).await?;
    Ok(Json(patched))
}

/// Delete a resource by id. Responds 204 whether or not the record existed.
pub async fn delete_one<T>(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
    T: CrudResource,
{
    tracing::debug!(id, "REST request to delete {}", T::RESOURCE_NAME_SINGULAR);
    T::delete(&db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn check_payload_id(path_id: i64, payload_id: Option<i64>, resource: &str) -> Result<(), ApiError> {
    let Some(payload_id) = payload_id else {
        return Err(ApiError::bad_request(format!(
            "An existing {resource} must carry an id"
        )));
    };
    if payload_id != path_id {
        return Err(ApiError::bad_request(format!(
            "Payload id does not match the path id for {resource}"
        )));
    }
    Ok(())
}
