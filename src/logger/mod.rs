//! Logger module
//!
//! Logging helpers for the task server:
//! - Server lifecycle logging
//! - Access logging for HTTP requests and task runs
//! - Error and warning logging
//! - Optional file-based log targets

pub mod writer;

use crate::config::Config;
use std::net::SocketAddr;
use std::path::Path;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, data_dir: &Path) {
    write_info("======================================");
    write_info("Task server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Data directory: {}", data_dir.display()));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("Endpoints: POST /run  GET /read  GET /healthz");
    write_info("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log a completed HTTP request
pub fn log_request(method: &str, path: &str, status: u16) {
    write_info(&format!("[HTTP] {method} {path} - {status}"));
}

/// Log the outcome of a dispatched task
pub fn log_task(task: &str, outcome: &str) {
    write_info(&format!("[TASK] \"{task}\" - {outcome}"));
}

pub fn log_shutdown_requested() {
    write_info("\n[Shutdown] Graceful shutdown requested");
}

pub fn log_shutdown_complete() {
    write_info("[Shutdown] Server stopped");
}
