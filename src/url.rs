//! URL path rules for page shells

/// Marker that flags a print-only page.
const PRINTABLE_MARKER: &str = "/printable";

/// Appends a trailing slash unless one is already present.
///
/// Existing slashes are left alone, so `/a//` stays `/a//`.
///
/// The hosting serves every page from a directory index, so the canonical
/// href must match the slash-terminated URL that is actually served.
///
/// # Arguments
///
/// * `path`: Site relative URL path
///
/// # Returns
///
/// Path ending in exactly one added or existing `/`
pub fn enforce_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

/// Returns true when the page is a print view.
///
/// Plain substring match anywhere in the path, so `/foo/printable-guide/`
/// is also treated as a print page.
pub fn is_print_page(path: &str) -> bool {
    path.contains(PRINTABLE_MARKER)
}

/// Builds the canonical URL for a page.
///
/// # Arguments
///
/// * `origin`: Site origin without trailing slash
/// * `path`: Site relative URL path
///
/// # Returns
///
/// Absolute canonical URL ending with `/`
pub fn canonical_url(origin: &str, path: &str) -> String {
    format!("{}{}", origin, enforce_trailing_slash(path))
}

/// Returns the router sub-path for a page, relative to `/`.
pub fn route_subpath(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}
