use sea_orm::{ColumnTrait, sea_query::Order};

/// Resolve a `column,direction` sort parameter against the columns a
/// resource declares sortable.
///
/// Unknown columns fall back to `default_column`; any direction other than
/// `desc` (case-insensitive) sorts ascending.
#[must_use]
pub fn parse_sort<C>(
    sort: Option<&str>,
    sortable_columns: &[(&str, C)],
    default_column: C,
) -> (C, Order)
where
    C: ColumnTrait + Copy,
{
    let (sort_column, sort_order) = match sort {
        Some(sort) => {
            let mut parts = sort.splitn(2, ',');
            let column = parts.next().unwrap_or("id").trim().to_string();
            let order = parts.next().unwrap_or("asc").trim().to_string();
            (column, order)
        }
        None => ("id".to_string(), "asc".to_string()),
    };

    let order_direction = if sort_order.eq_ignore_ascii_case("desc") {
        Order::Desc
    } else {
        Order::Asc
    };

    let order_column = sortable_columns
        .iter()
        .find(|&&(col_name, _)| col_name == sort_column)
        .map_or(default_column, |&(_, col)| col);

    (order_column, order_direction)
}
