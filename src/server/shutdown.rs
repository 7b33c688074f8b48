//! Graceful-shutdown signal for `axum::serve`.

use std::fmt::Display;
use std::future::Future;

use tracing::{error, info};

/// Resolves on Ctrl-C or SIGTERM.
///
/// A signal source that cannot be installed is logged and never fires, so
/// the server keeps running on whichever source did install.
pub async fn shutdown_signal() {
    let ctrl_c = signal_or_park("Ctrl+C", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = signal_or_park("SIGTERM", async {
        use tokio::signal::unix::{signal, SignalKind};

        signal(SignalKind::terminate())?.recv().await;
        Ok::<(), std::io::Error>(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

/// Waits for `received`; on a setup error, logs it and parks forever.
async fn signal_or_park<F, E>(source: &str, received: F)
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    match received.await {
        Ok(()) => info!("Received {}, shutting down", source),
        Err(e) => {
            error!("{} handler unavailable: {}", source, e);
            std::future::pending::<()>().await;
        }
    }
}
