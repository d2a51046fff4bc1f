use axum::http::{HeaderMap, HeaderName};

/// Client address as reported by the trusted proxy header, taken verbatim.
/// Missing, non-ASCII or blank values yield `None`.
pub fn client_ip(headers: &HeaderMap, header: &HeaderName) -> Option<String> {
    let value = headers.get(header)?.to_str().ok()?.trim();
    if value.is_empty() {
        return None;
    }
    Some(value.to_string())
}
