//! Common utilities

/// True if a cache payload is absent or zero-length.
pub fn is_empty_payload(text: Option<&str>) -> bool {
    text.map_or(true, str::is_empty)
}
