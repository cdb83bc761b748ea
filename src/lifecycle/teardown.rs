//! Teardown coordination for a status controller.

use tokio_util::sync::CancellationToken;

/// Handle that marks a controller as disposed.
///
/// Clones share the same underlying token. Triggering is sticky: a task that
/// starts waiting after the trigger still observes it.
#[derive(Debug, Clone, Default)]
pub struct Teardown {
    token: CancellationToken,
}

impl Teardown {
    /// Create a new, untriggered teardown handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trigger the teardown. Idempotent.
    pub fn trigger(&self) {
        self.token.cancel();
    }

    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait until the teardown is triggered.
    pub async fn triggered(&self) {
        self.token.cancelled().await;
    }
}
