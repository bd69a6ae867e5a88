//! Display model implementations

pub mod common;
pub mod project;

pub use project::{ProjectDetailDisplay, ProjectRow};
