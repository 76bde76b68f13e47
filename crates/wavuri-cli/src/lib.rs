//! wavuri CLI library.
//!
//! Input loading, logging setup and the `encode`, `tone` and `inspect`
//! command implementations behind the `wavuri` binary.

pub mod commands;
pub mod input;
pub mod logging;
