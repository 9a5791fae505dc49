//! Turning an uploaded image into a markdown fragment.

/// Message used when the backend rejects an upload without saying why.
pub const UPLOAD_FAILED: &str = "upload failed";

/// Resolve the path returned by the upload endpoint to an absolute URL.
///
/// Absolute `http(s)` URLs pass through; anything else is joined onto `origin`.
pub fn resolve_upload_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// The block inserted into the draft for one uploaded image.
pub fn image_markdown(url: &str) -> String {
    format!("\n![image]({url})\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_untouched() {
        assert_eq!(
            resolve_upload_url("http://api", "https://cdn.example/a.png"),
            "https://cdn.example/a.png"
        );
    }

    #[test]
    fn test_relative_path_prefixed_with_origin() {
        assert_eq!(
            resolve_upload_url("http://localhost:8080", "/uploads/a.png"),
            "http://localhost:8080/uploads/a.png"
        );
        assert_eq!(
            resolve_upload_url("http://localhost:8080/", "uploads/a.png"),
            "http://localhost:8080/uploads/a.png"
        );
    }

    #[test]
    fn test_http_prefixed_relative_path_is_joined() {
        assert_eq!(
            resolve_upload_url("http://api", "httpdocs/a.png"),
            "http://api/httpdocs/a.png"
        );
    }

    #[test]
    fn test_markdown_fragment() {
        assert_eq!(
            image_markdown("http://x/y.png"),
            "\n![image](http://x/y.png)\n"
        );
    }
}
