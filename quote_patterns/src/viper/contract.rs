//! Contracts between the VIPER layers.
use quote_common::Quote;

/// Interaction from the presenter to the view.
pub trait QuoteViewContract {
    /// Sets the displayed label text.
    fn render(&self, text: &str);
}

/// Use cases implemented by the interactor.
pub trait QuoteProvider {
    /// Populates the quote collection. Loading again replaces it.
    fn load(&mut self);

    /// Picks a quote at random and reports it to the output.
    ///
    /// Returns `None`, without reporting anything, when no quotes are loaded.
    fn generate_quote(&mut self) -> Option<Quote>;
}

/// User actions and lifecycle events, implemented by the presenter.
pub trait QuoteViewEventHandler {
    /// The view has loaded.
    fn on_load(&self);

    /// The user asked for a quote.
    fn on_quote_requested(&self);
}

/// Results reported by the interactor.
pub trait QuoteOutput {
    /// A quote has been picked.
    fn on_quote_produced(&self, quote: &Quote);
}
