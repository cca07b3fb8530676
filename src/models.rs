use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Default page size when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Query parameters accepted by every list endpoint.
///
/// # Pagination
/// `page` is zero-based; `size` defaults to 20. The response carries the
/// pagination state in the `Link` and `X-Total-Count` headers, not in the
/// body.
///
/// # Sorting
/// `sort` takes a `column,direction` pair, for example `name,desc`. Unknown
/// columns fall back to sorting by `id`.
///
/// # Filtering
/// The `filter` parameter accepts a JSON-encoded object:
/// - Free text search over text columns: `{"q": "volvo"}`
/// - Filter by a single id: `{"id": 42}`
/// - Filter by multiple ids: `{"id": [42, 43]}`
/// - Contains-match on other columns: `{"name": "olvo"}`
/// - Exact match on boolean columns: `{"isBroken": true}`
#[derive(Deserialize, IntoParams, ToSchema, Default)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Zero-based page index.
    #[param(example = 0)]
    pub page: Option<u64>,
    /// Number of items per page.
    #[param(example = 20)]
    pub size: Option<u64>,
    /// Sort order as `column,direction`.
    #[param(example = "name,asc")]
    pub sort: Option<String>,
    /// JSON-encoded filter object.
    #[param(example = json!({"q": "volvo", "isBroken": false}))]
    pub filter: Option<String>,
}
