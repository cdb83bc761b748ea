//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Teardown (teardown.rs):
//!     owner disposes controller → token cancelled → in-flight request dropped
//!
//! Signals (signals.rs):
//!     SIGINT → trigger teardown
//! ```

pub mod signals;
pub mod teardown;

pub use signals::teardown_on_ctrl_c;
pub use teardown::Teardown;
