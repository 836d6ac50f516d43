//! Mapping from file extensions to MIME types.

/// Fallback used when the extension is unknown or missing.
pub const DEFAULT_CONTENT_TYPE: &str = "*/*";

/// Resolve the `Content-Type` for a resource path from its extension.
///
/// Any query string is ignored. Matching is case-insensitive.
pub fn content_type_for(path: &str) -> &'static str {
    let path = path.split_once('?').map_or(path, |(path, _)| path);
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let Some((_, extension)) = file_name.rsplit_once('.') else {
        return DEFAULT_CONTENT_TYPE;
    };

    match extension.to_ascii_lowercase().as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "ico" => "image/x-icon",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "json" => "application/json",
        "txt" => "text/plain",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
