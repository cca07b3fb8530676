use axum::http::header::HeaderMap;

/// Build the pagination response headers for a list endpoint.
///
/// `Link` carries `first` and `last` relations always, plus `next` and
/// `prev` when the neighboring page exists; `X-Total-Count` carries the
/// filtered total. `page` is zero-based and `path` is the request path the
/// links point back at.
///
/// # Panics
///
/// Panics if the assembled header string cannot be parsed into a valid
/// header value, which cannot happen for ASCII paths.
#[must_use]
pub fn pagination_headers(path: &str, page: u64, size: u64, total_count: u64) -> HeaderMap {
    let size = size.max(1);
    let last_page = if total_count == 0 {
        0
    } else {
        total_count.div_ceil(size) - 1
    };

    let mut links = Vec::new();
    if page < last_page {
        links.push(link_entry(path, page + 1, size, "next"));
    }
    if page > 0 {
        links.push(link_entry(path, page - 1, size, "prev"));
    }
    links.push(link_entry(path, last_page, size, "last"));
    links.push(link_entry(path, 0, size, "first"));

    let mut headers = HeaderMap::new();
    headers.insert("Link", links.join(",").parse().unwrap());
    headers.insert("X-Total-Count", total_count.to_string().parse().unwrap());
    headers
}

fn link_entry(path: &str, page: u64, size: u64, rel: &str) -> String {
    format!("<{path}?page={page}&size={size}>; rel=\"{rel}\"")
}
