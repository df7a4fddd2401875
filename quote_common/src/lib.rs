//!
//! Common types and utilities shared by the pattern assemblies and the playground.
//!
//! This crate aggregates:
//! - `error` — unified error type `PlaygroundError` used across the workspace.
//! - `result` — handy `Result<T, PlaygroundError>` alias.
//! - `quote` — the `Quote` entity and its display form.
//! - `source` — quote sources: the built-in list and quote-file parsing.
//! - `random` — random quote selection helpers.
//! - `display` — the screen and display-host capabilities.
//! - `binding` — observable values for view-model bindings.
#![warn(missing_docs)]
pub mod binding;
pub mod display;
pub mod error;
pub mod quote;
pub mod random;
pub mod result;
pub mod source;

pub use display::{DisplayHost, NavigationStack, Screen};
pub use error::PlaygroundError;
pub use quote::Quote;
pub use result::Result;
pub use source::{BuiltinQuotes, QuoteSource};
