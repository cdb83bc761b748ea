//! Backend connection status subsystem.
//!
//! # Data Flow
//! ```text
//! StatusController::initialize() (controller.rs)
//!     → single GET to the configured endpoint (probe.rs)
//!     → decode {"message": ...} or collapse the failure
//!     → one transition on ConnectionState (state.rs)
//!     → watch channel notifies the view
//! ```
//!
//! # State Machine
//! ```text
//! Loading → Success: body decoded
//! Loading → Error:   transport failure, non-2xx, or undecodable body
//! Success, Error:    terminal
//! ```

pub mod controller;
pub mod probe;
pub mod state;

pub use controller::{ControllerError, StatusController};
pub use probe::{HelloResponse, ProbeError};
pub use state::{ConnectionState, Status};
