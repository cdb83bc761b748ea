//! Observability subsystem.
//!
//! Diagnostics go to stderr through `tracing`; stdout carries the rendered
//! page only.

pub mod logging;

pub use logging::init_logging;
