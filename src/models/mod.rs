//! Display models for CLI output
//!
//! Converts aggregated project records into CLI-friendly display formats.

pub mod display;

pub use display::{ProjectDetailDisplay, ProjectRow};
