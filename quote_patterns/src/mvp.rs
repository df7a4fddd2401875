//! MVP: Model - View - Presenter.
//!
//! The view is passive: it relays taps to its presenter and displays whatever
//! text the presenter hands back through `MvpQuoteViewContract`. The view owns
//! the presenter; the presenter only holds a weak reference to the view.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use quote_common::random::pick_quote;
use quote_common::{Quote, QuoteSource, Screen};
use rand::RngCore;

/// Interaction from the presenter to the view.
pub trait MvpQuoteViewContract {
    /// Displays the formatted quote.
    fn set_quote(&self, quote: &str);
}

/// Handles user actions and decides what the view shows.
pub struct MvpQuotePresenter {
    view_contract: Weak<dyn MvpQuoteViewContract>,
    quotes: Vec<Quote>,
    rng: RefCell<Box<dyn RngCore>>,
}

impl MvpQuotePresenter {
    /// Creates a presenter for `view_contract`, loading quotes from `source`.
    pub fn new(
        view_contract: Weak<dyn MvpQuoteViewContract>,
        source: &dyn QuoteSource,
        rng: Box<dyn RngCore>,
    ) -> Self {
        Self {
            view_contract,
            quotes: source.quotes(),
            rng: RefCell::new(rng),
        }
    }

    /// Picks a quote and pushes it to the view.
    ///
    /// Returns the formatted text, or `None` when there are no quotes.
    pub fn generate_quote(&self) -> Option<String> {
        let text = {
            let mut rng = self.rng.borrow_mut();
            pick_quote(&self.quotes, rng.as_mut())?.to_string()
        };
        match self.view_contract.upgrade() {
            Some(view) => view.set_quote(&text),
            None => debug!("MVP view is gone, skipping update"),
        }
        Some(text)
    }
}

/// Passive view for the MVP assembly.
pub struct MvpQuoteView {
    presenter: MvpQuotePresenter,
    quote_label: RefCell<String>,
}

impl MvpQuoteView {
    /// The presenter driving this view.
    pub fn presenter(&self) -> &MvpQuotePresenter {
        &self.presenter
    }
}

impl MvpQuoteViewContract for MvpQuoteView {
    fn set_quote(&self, quote: &str) {
        *self.quote_label.borrow_mut() = quote.to_string();
    }
}

impl Screen for MvpQuoteView {
    fn title(&self) -> &str {
        "MVP"
    }

    fn view_did_load(&self) {}

    fn did_tap_button(&self) {
        self.presenter.generate_quote();
    }

    fn label_text(&self) -> String {
        self.quote_label.borrow().clone()
    }
}

/// Assembles the MVP screen: the view owns its presenter, the presenter
/// points back at the view weakly.
pub fn assemble(source: &dyn QuoteSource, rng: Box<dyn RngCore>) -> Rc<MvpQuoteView> {
    Rc::new_cyclic(|view: &Weak<MvpQuoteView>| {
        let view_contract: Weak<dyn MvpQuoteViewContract> = view.clone();
        MvpQuoteView {
            presenter: MvpQuotePresenter::new(view_contract, source, rng),
            quote_label: RefCell::new(String::new()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_common::BuiltinQuotes;
    use quote_common::random::quote_rng;

    struct RecordingView {
        received: RefCell<Vec<String>>,
    }

    impl MvpQuoteViewContract for RecordingView {
        fn set_quote(&self, quote: &str) {
            self.received.borrow_mut().push(quote.to_string());
        }
    }

    #[test]
    fn tap_updates_the_label() {
        let view = assemble(&vec![Quote::new("Stay on target.", "Gold Five")], quote_rng(Some(2)));
        view.did_tap_button();
        assert_eq!(view.label_text(), "Stay on target. -Gold Five");
    }

    #[test]
    fn presenter_pushes_formatted_quotes_from_the_list() {
        let recorder = Rc::new(RecordingView { received: RefCell::new(Vec::new()) });
        let contract: Rc<dyn MvpQuoteViewContract> = recorder.clone();
        let presenter = MvpQuotePresenter::new(Rc::downgrade(&contract), &BuiltinQuotes, quote_rng(Some(9)));

        let formatted: Vec<String> = BuiltinQuotes.quotes().iter().map(Quote::to_string).collect();
        for _ in 0..20 {
            let text = presenter.generate_quote().unwrap();
            assert!(formatted.contains(&text));
        }
        assert_eq!(recorder.received.borrow().len(), 20);
    }

    #[test]
    fn empty_source_pushes_nothing() {
        let recorder = Rc::new(RecordingView { received: RefCell::new(Vec::new()) });
        let contract: Rc<dyn MvpQuoteViewContract> = recorder.clone();
        let presenter = MvpQuotePresenter::new(Rc::downgrade(&contract), &Vec::<Quote>::new(), quote_rng(None));
        assert_eq!(presenter.generate_quote(), None);
        assert!(recorder.received.borrow().is_empty());
    }

    #[test]
    fn released_view_is_skipped() {
        let contract: Rc<dyn MvpQuoteViewContract> =
            Rc::new(RecordingView { received: RefCell::new(Vec::new()) });
        let presenter = MvpQuotePresenter::new(Rc::downgrade(&contract), &BuiltinQuotes, quote_rng(Some(1)));
        drop(contract);
        assert!(presenter.generate_quote().is_some());
    }
}
