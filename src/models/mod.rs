//! Display models for CLI output
//!
//! Converts API response types into CLI-friendly display formats with
//! human-readable labels and column names.

pub mod display;

pub use display::{TaskDisplay, TeamDisplay};
