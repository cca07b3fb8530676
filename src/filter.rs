use sea_orm::{ColumnTrait, Condition};
use std::collections::HashMap;

/// Build a query condition from the JSON `filter` parameter.
///
/// A `"q"` key searches all text columns with a contains match; any other
/// key filters the matching column by value type: strings become contains
/// matches, numbers and booleans become equality, arrays become an
/// any-of-equality over their elements. Keys that do not name a filterable
/// column are ignored, as is an unparseable filter string.
#[must_use]
pub fn apply_filters<C>(
    filter_str: Option<&str>,
    filterable_columns: &[(&str, C)],
    searchable_columns: &[(&str, C)],
) -> Condition
where
    C: ColumnTrait + Copy,
{
    let filters: HashMap<String, serde_json::Value> = match filter_str {
        Some(filter) => serde_json::from_str(filter).unwrap_or_default(),
        None => HashMap::new(),
    };

    let mut condition = Condition::all();

    if let Some(q) = filters.get("q").and_then(serde_json::Value::as_str) {
        let mut any_text = Condition::any();
        for (_col_name, col) in searchable_columns {
            any_text = any_text.add(col.contains(q.trim()));
        }
        return condition.add(any_text);
    }

    for (key, value) in filters {
        let Some(&(_, col)) = filterable_columns
            .iter()
            .find(|(col_name, _)| *col_name == key)
        else {
            tracing::debug!(column = %key, "ignoring filter on unknown column");
            continue;
        };

        match value {
            serde_json::Value::String(s) => {
                condition = condition.add(col.contains(s.trim()));
            }
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    condition = condition.add(col.eq(i));
                } else if let Some(f) = n.as_f64() {
                    condition = condition.add(col.eq(f));
                }
            }
            serde_json::Value::Bool(b) => {
                condition = condition.add(col.eq(b));
            }
            serde_json::Value::Array(values) => {
                let mut any_of = Condition::any();
                for v in values {
                    if let Some(i) = v.as_i64() {
                        any_of = any_of.add(col.eq(i));
                    } else if let Some(s) = v.as_str() {
                        any_of = any_of.add(col.eq(s));
                    }
                }
                condition = condition.add(any_of);
            }
            _ => {}
        }
    }

    condition
}
