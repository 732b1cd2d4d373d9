//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, query-string
//! parsing, and dispatch to the run and read endpoints.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler::{read, run};
use crate::http;
use crate::logger;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);

    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    let query = parse_query(req.uri().query());

    let if_none_match = req
        .headers()
        .get("if-none-match")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let response = match (&method, path.as_str()) {
        (&Method::POST, "/run") => run::handle_run(&query, &state).await,
        (&Method::GET | &Method::HEAD, "/read") => {
            read::handle_read(&query, &state, if_none_match.as_deref(), is_head).await
        }
        (&Method::GET, "/healthz") => http::build_health_response(),
        (&Method::GET, "/") => service_index(),
        (&Method::OPTIONS, _) => http::build_options_response(state.config.http.enable_cors),
        (_, "/run") => http::build_405_response("POST, OPTIONS"),
        (_, "/read") => http::build_405_response("GET, HEAD, OPTIONS"),
        _ => http::build_404_response(),
    };

    if access_log {
        logger::log_request(method.as_str(), &path, response.status().as_u16());
    }

    Ok(response)
}

/// Parse a query string into percent-decoded key/value pairs
///
/// Repeated keys keep the last value.
fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    query
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Service index served at `/`
fn service_index() -> Response<Full<Bytes>> {
    http::json_response(
        StatusCode::OK,
        &serde_json::json!({
            "service": "taskserve",
            "endpoints": {
                "run": "POST /run?task=<text>",
                "read": "GET /read?path=<text>",
                "health": "GET /healthz"
            }
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_decodes() {
        let q = parse_query(Some("task=count%20wednesdays"));
        assert_eq!(q.get("task").unwrap(), "count wednesdays");
    }

    #[test]
    fn test_parse_query_plus_as_space() {
        let q = parse_query(Some("task=sort+contacts&path=data%2Fdates.txt"));
        assert_eq!(q.get("task").unwrap(), "sort contacts");
        assert_eq!(q.get("path").unwrap(), "data/dates.txt");
    }

    #[test]
    fn test_parse_query_empty() {
        assert!(parse_query(None).is_empty());
        assert!(parse_query(Some("")).is_empty());
    }
}
