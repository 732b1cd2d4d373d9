//! Read endpoint module
//!
//! `GET /read?path=<text>` returns a file from the data directory. Text
//! files come back inline; SQLite databases and other binary files stream as
//! downloadable attachments. Paths are confined to the data directory and
//! traversal attempts are rejected before any I/O.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::fs;

use crate::config::AppState;
use crate::datadir;
use crate::http::{self, cache, mime};
use crate::logger;

pub async fn handle_read(
    query: &HashMap<String, String>,
    state: &Arc<AppState>,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let Some(raw_path) = query.get("path") else {
        return http::error_response(StatusCode::BAD_REQUEST, "Missing 'path' query parameter");
    };

    let Some(file_path) = datadir::resolve(&state.data_dir, raw_path) else {
        return http::error_response(StatusCode::BAD_REQUEST, "Invalid or missing file path");
    };

    if file_path.is_dir() {
        return http::error_response(StatusCode::BAD_REQUEST, "Path is a directory");
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            return http::error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
        }
    };

    let etag = cache::generate_etag(&content);
    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    let extension = file_path.extension().and_then(|e| e.to_str());
    let content_type = mime::get_content_type(extension);

    if mime::is_text_extension(extension) {
        http::inline_text_response(content, content_type, &etag, is_head)
    } else {
        // SQLite databases and unknown binaries download as attachments
        let filename = file_path
            .file_name()
            .map_or_else(|| "download".to_string(), |n| n.to_string_lossy().into_owned());
        http::attachment_response(content, content_type, &filename, &etag, is_head)
    }
}
