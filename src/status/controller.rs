//! Connection status controller.
//!
//! # Responsibilities
//! - Own the connection state for the lifetime of one component instance
//! - Issue the single request on `initialize()` (once per instance)
//! - Collapse every failure into the error status, logging the cause
//! - Discard the outcome if the controller was disposed meanwhile

use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::Client;
use thiserror::Error;
use tokio::sync::watch;
use url::Url;
use uuid::Uuid;

use crate::config::EndpointConfig;
use crate::lifecycle::Teardown;
use crate::status::probe::{fetch_message, HelloResponse, ProbeError};
use crate::status::state::{ConnectionState, Status};

/// Errors raised while constructing a controller.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Drives the `loading → success | error` lifecycle of one request.
#[derive(Debug)]
pub struct StatusController {
    id: Uuid,
    endpoint: Url,
    client: Client,
    state: watch::Sender<ConnectionState>,
    teardown: Teardown,
    started: AtomicBool,
}

impl StatusController {
    /// Create a controller for the configured endpoint.
    pub fn new(config: &EndpointConfig) -> Result<Self, ControllerError> {
        let endpoint = Url::parse(&config.url)?;
        Self::with_endpoint(endpoint)
    }

    /// Create a controller for an already parsed endpoint.
    pub fn with_endpoint(endpoint: Url) -> Result<Self, ControllerError> {
        let client = Client::builder().no_proxy().build()?;
        let (state, _) = watch::channel(ConnectionState::loading());

        Ok(Self {
            id: Uuid::new_v4(),
            endpoint,
            client,
            state,
            teardown: Teardown::new(),
            started: AtomicBool::new(false),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Current state.
    pub fn snapshot(&self) -> ConnectionState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> Status {
        self.state.borrow().status()
    }

    /// Receiver notified when the state transitions.
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    /// Handle an owning scope can use to dispose this controller.
    pub fn teardown(&self) -> Teardown {
        self.teardown.clone()
    }

    /// Dispose the controller. Any outcome not yet applied is discarded.
    ///
    /// The trigger happens under the state lock, so once this returns no
    /// transition can be published.
    pub fn dispose(&self) {
        if !self.teardown.is_triggered() {
            tracing::debug!(controller = %self.id, "Disposing status controller");
        }
        self.state.send_if_modified(|_| {
            self.teardown.trigger();
            false
        });
    }

    pub fn is_disposed(&self) -> bool {
        self.teardown.is_triggered()
    }

    /// Issue the single request and apply its outcome.
    ///
    /// Only the first call does anything; later calls return the current
    /// status. Returns the status after the call.
    pub async fn initialize(&self) -> Status {
        if self.started.swap(true, Ordering::SeqCst) {
            tracing::warn!(controller = %self.id, "initialize() called more than once, ignoring");
            return self.status();
        }

        if self.teardown.is_triggered() {
            tracing::debug!(controller = %self.id, "Controller disposed before initialize, skipping request");
            return self.status();
        }

        tracing::debug!(controller = %self.id, endpoint = %self.endpoint, "Requesting backend status");

        let outcome = tokio::select! {
            biased;
            _ = self.teardown.triggered() => {
                tracing::debug!(controller = %self.id, "Controller disposed while request in flight, dropping it");
                return self.status();
            }
            outcome = fetch_message(&self.client, &self.endpoint) => outcome,
        };

        self.apply(outcome)
    }

    fn apply(&self, outcome: Result<HelloResponse, ProbeError>) -> Status {
        if self.teardown.is_triggered() {
            tracing::debug!(controller = %self.id, "Controller disposed, discarding late response");
            return self.status();
        }

        match outcome {
            Ok(body) => {
                tracing::info!(controller = %self.id, endpoint = %self.endpoint, "Backend connection established");
                self.state.send_if_modified(|state| {
                    !self.teardown.is_triggered() && state.succeed(body.message)
                });
            }
            Err(e) => {
                tracing::error!(
                    controller = %self.id,
                    endpoint = %self.endpoint,
                    kind = e.kind(),
                    error = %e,
                    "Backend connection failed"
                );
                self.state
                    .send_if_modified(|state| !self.teardown.is_triggered() && state.fail());
            }
        }

        self.status()
    }
}
