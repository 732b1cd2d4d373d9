//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension, and
//! decides which extensions are served inline as text rather than as a
//! download.

/// Get MIME Content-Type based on file extension
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md" | "log") => "text/plain; charset=utf-8",
        Some("csv") => "text/csv; charset=utf-8",
        Some("xml") => "application/xml",

        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Documents/archives
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz" | "gzip") => "application/gzip",
        Some("tar") => "application/x-tar",

        // SQLite databases and everything unknown download as raw bytes
        _ => "application/octet-stream",
    }
}

/// Whether a file with this extension is returned inline as text
///
/// Everything else streams as a downloadable attachment.
pub fn is_text_extension(extension: Option<&str>) -> bool {
    matches!(extension, Some("txt" | "md" | "json" | "csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(get_content_type(Some("txt")), "text/plain; charset=utf-8");
        assert_eq!(get_content_type(Some("md")), "text/plain; charset=utf-8");
        assert_eq!(get_content_type(Some("json")), "application/json");
        assert_eq!(get_content_type(Some("csv")), "text/csv; charset=utf-8");
        assert_eq!(get_content_type(Some("png")), "image/png");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(get_content_type(Some("db")), "application/octet-stream");
        assert_eq!(get_content_type(None), "application/octet-stream");
    }

    #[test]
    fn test_text_extensions() {
        assert!(is_text_extension(Some("txt")));
        assert!(is_text_extension(Some("md")));
        assert!(is_text_extension(Some("json")));
        assert!(is_text_extension(Some("csv")));
        assert!(!is_text_extension(Some("db")));
        assert!(!is_text_extension(Some("png")));
        assert!(!is_text_extension(None));
    }
}
