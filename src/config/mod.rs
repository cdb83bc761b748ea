//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → EndpointConfig handed to the status controller
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an absent file yields a working config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, EndpointConfig, ObservabilityConfig};
pub use validation::{validate_config, ValidationError};
