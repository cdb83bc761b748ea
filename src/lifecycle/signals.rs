//! OS signal handling.
//!
//! SIGINT tears down the status controller so a response arriving afterwards
//! is discarded.

use crate::lifecycle::Teardown;

/// Wait for Ctrl-C and trigger `teardown`.
///
/// Returns early, without triggering, if the teardown fires elsewhere first.
pub async fn teardown_on_ctrl_c(teardown: Teardown) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            match result {
                Ok(()) => tracing::info!("Interrupt received, tearing down status controller"),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to listen for interrupt signal");
                    return;
                }
            }
            teardown.trigger();
        }
        _ = teardown.triggered() => {}
    }
}
