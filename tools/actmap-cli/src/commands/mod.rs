//! CLI Command Implementations

pub mod generate;
pub mod show;
