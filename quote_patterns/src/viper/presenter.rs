//! Mediator between the VIPER view and interactor.
use std::cell::RefCell;
use std::rc::Weak;

use log::debug;
use quote_common::Quote;

use crate::viper::contract::{QuoteOutput, QuoteProvider, QuoteViewContract, QuoteViewEventHandler};

/// Handles view events by delegating to the provider, and formats the
/// provider's results for the view.
pub struct ViperQuotePresenter {
    view_contract: Weak<dyn QuoteViewContract>,
    provider: RefCell<Box<dyn QuoteProvider>>,
}

impl ViperQuotePresenter {
    /// Creates a presenter rendering into `view_contract` and owning `provider`.
    pub fn new(view_contract: Weak<dyn QuoteViewContract>, provider: Box<dyn QuoteProvider>) -> Self {
        Self {
            view_contract,
            provider: RefCell::new(provider),
        }
    }
}

impl QuoteViewEventHandler for ViperQuotePresenter {
    fn on_load(&self) {
        self.provider.borrow_mut().load();
    }

    fn on_quote_requested(&self) {
        self.provider.borrow_mut().generate_quote();
    }
}

impl QuoteOutput for ViperQuotePresenter {
    fn on_quote_produced(&self, quote: &Quote) {
        match self.view_contract.upgrade() {
            Some(view) => view.render(&quote.to_string()),
            None => debug!("View released, dropping quote from {}", quote.source),
        }
    }
}
