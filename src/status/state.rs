//! Connection status state machine.
//!
//! # States
//! - Loading: request not yet resolved (initial)
//! - Success: server message received (terminal)
//! - Error: any failure (terminal)
//!
//! The message reflects server content if and only if the status is Success.

use std::fmt;

/// Text shown while the request is outstanding.
pub const PLACEHOLDER_MESSAGE: &str = "Cargando...";

/// Text stored after any failure. The cause is only logged.
pub const FAILURE_MESSAGE: &str = "Error al conectar con el backend";

/// Lifecycle marker of the single outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Loading,
    Success,
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Loading => "loading",
            Status::Success => "success",
            Status::Error => "error",
        }
    }

    /// No transition leaves a terminal status.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Loading)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status plus the message shown alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionState {
    status: Status,
    message: String,
}

impl ConnectionState {
    pub fn loading() -> Self {
        Self {
            status: Status::Loading,
            message: PLACEHOLDER_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Move to Success with the server's message.
    ///
    /// Returns `false` and leaves the state untouched if already terminal.
    pub fn succeed(&mut self, message: String) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = Status::Success;
        self.message = message;
        true
    }

    /// Move to Error with the static failure text.
    ///
    /// Returns `false` and leaves the state untouched if already terminal.
    pub fn fail(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = Status::Error;
        self.message = FAILURE_MESSAGE.to_string();
        true
    }
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self::loading()
    }
}
