//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `PlaygroundError`, so functions can simply return `Result<T>`.
use crate::error::PlaygroundError;

/// Workspace-wide `Result` alias with `PlaygroundError` as the default error.
pub type Result<T, E = PlaygroundError> = std::result::Result<T, E>;
