//! Names of the available architecture patterns.

use clap::ValueEnum;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Architecture style used to assemble the quote screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Display, EnumString, EnumIter)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum Pattern {
    /// Model - View - Controller.
    Mvc,
    /// Model - View - Presenter.
    Mvp,
    /// Model - View - ViewModel.
    Mvvm,
    /// View - Interactor - Presenter - Entity - Router.
    Viper,
}

impl Pattern {
    /// Every pattern, in presentation order.
    pub fn all() -> Vec<Pattern> {
        Pattern::iter().collect()
    }

    /// Expanded acronym.
    pub fn long_name(&self) -> &'static str {
        match self {
            Pattern::Mvc => "Model - View - Controller",
            Pattern::Mvp => "Model - View - Presenter",
            Pattern::Mvvm => "Model - View - ViewModel",
            Pattern::Viper => "View - Interactor - Presenter - Entity - Router",
        }
    }

    /// One-line summary of how the pattern splits responsibilities.
    pub fn description(&self) -> &'static str {
        match self {
            Pattern::Mvc => {
                "The controller loads the quotes, picks one and formats it itself."
            }
            Pattern::Mvp => {
                "A passive view relays taps to a presenter, which pushes formatted text back."
            }
            Pattern::Mvvm => {
                "The view model publishes the formatted quote; the view observes it."
            }
            Pattern::Viper => {
                "A router assembles view, presenter and interactor; the interactor owns the use cases."
            }
        }
    }
}
