//! Four ways to build the same "show a random quote" screen.
//!
//! Each module assembles a complete screen in one architecture style:
//!
//! - `mvc` — one controller that is both view and controller.
//! - `mvp` — a passive view driven by a presenter.
//! - `mvvm` — a view bound to an observable view model.
//! - `viper` — view, interactor, presenter, entity and router.
//!
//! All of them produce a `quote_common::Screen`, so any `DisplayHost` can show
//! them. `pattern` names the styles for selection on the command line.
#![warn(missing_docs)]
pub mod mvc;
pub mod mvp;
pub mod mvvm;
pub mod pattern;
pub mod viper;

pub use pattern::Pattern;
