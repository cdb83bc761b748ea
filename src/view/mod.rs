//! Text rendering of the status page.
//!
//! Exactly one fragment is rendered at any time, selected by exact match on
//! the current status.

pub mod fragment;
pub mod page;

pub use fragment::Fragment;
pub use page::render_page;
