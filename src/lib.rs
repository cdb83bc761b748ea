//! Backend connection status component.
//!
//! A single controller issues one request to the backend hello endpoint and
//! moves a three-valued status from `loading` to `success` or `error`. The
//! view renders exactly one fragment for whichever status is current.

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod status;
pub mod view;

pub use config::schema::AppConfig;
pub use lifecycle::Teardown;
pub use status::controller::StatusController;
pub use status::state::{ConnectionState, Status};
