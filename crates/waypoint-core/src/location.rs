//! Conversion between URL fragments and route paths
//!
//! The browser reports locations as raw fragments (`#/settings`, `#`, or the
//! empty string before any navigation). Routes are matched on the path part.

/// Convert a raw fragment into the path used for route matching
///
/// `""`, `"#"` and `"#/"` all map to `/`. A query suffix is dropped, and a
/// missing leading slash is added (`#settings` → `/settings`).
pub fn fragment_to_path(raw: &str) -> String {
    let fragment = raw.strip_prefix('#').unwrap_or(raw);
    let path = fragment.split('?').next().unwrap_or_default();

    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Convert a route path into a fragment href (`/settings` → `#/settings`)
pub fn path_to_fragment(path: &str) -> String {
    if path.starts_with('/') {
        format!("#{}", path)
    } else {
        format!("#/{}", path)
    }
}
