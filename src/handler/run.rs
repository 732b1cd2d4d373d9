//! Run endpoint module
//!
//! `POST /run?task=<text>` dispatches a free-text task description to one of
//! the fixed file-processing routines. Responds `{"status": "success"}` on
//! completion, or a JSON error carrying the failure message.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::tasks::{self, TaskError};

pub async fn handle_run(
    query: &HashMap<String, String>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let Some(task) = query.get("task") else {
        return http::error_response(StatusCode::BAD_REQUEST, "Missing 'task' query parameter");
    };

    match tasks::dispatch(task, &state.data_dir).await {
        Ok(()) => {
            logger::log_task(task, "success");
            http::json_response(StatusCode::OK, &serde_json::json!({ "status": "success" }))
        }
        Err(err) => {
            let status = match &err {
                TaskError::NotRecognized | TaskError::InvalidPath(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let message = err.to_string();
            logger::log_task(task, &message);
            http::error_response(status, &message)
        }
    }
}
