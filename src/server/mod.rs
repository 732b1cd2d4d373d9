// Server module entry point
// TCP listener setup, accept loop, connection handling and signal handling

mod connection;
mod listener;
mod signal;

pub use listener::bind_listener;
pub use signal::{start_signal_handler, ShutdownSignal};

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::AppState;
use crate::logger;

/// Run the accept loop until a shutdown signal arrives.
///
/// Each accepted connection is served in its own spawned task; in-flight
/// connections finish naturally after the loop exits.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: &Arc<ShutdownSignal>,
) -> std::io::Result<()> {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown_requested();
                return Ok(());
            }
        }
    }
}
