//! MVVM: Model - View - ViewModel.
//!
//! The view model owns the quotes and publishes the formatted current quote
//! through an `Observable`. The view only forwards taps and mirrors whatever
//! the view model publishes; it never sees a `Quote`.
use std::cell::RefCell;
use std::rc::Rc;

use crossbeam_channel::Receiver;
use log::debug;
use quote_common::binding::Observable;
use quote_common::random::pick_quote;
use quote_common::{Quote, QuoteSource, Screen};
use rand::RngCore;

/// Application logic and formatting for the MVVM screen.
pub struct MvvmQuoteViewModel {
    quotes: Vec<Quote>,
    rng: RefCell<Box<dyn RngCore>>,
    current_quote: Observable<String>,
}

impl MvvmQuoteViewModel {
    /// Creates a view model with quotes from `source` and an empty current quote.
    pub fn new(source: &dyn QuoteSource, rng: Box<dyn RngCore>) -> Self {
        Self {
            quotes: source.quotes(),
            rng: RefCell::new(rng),
            current_quote: Observable::new(String::new()),
        }
    }

    /// Observable formatted quote.
    pub fn current_quote(&self) -> &Observable<String> {
        &self.current_quote
    }

    /// Picks a quote and publishes it. Nothing is published without quotes.
    pub fn generate_quote(&self) {
        let text = {
            let mut rng = self.rng.borrow_mut();
            match pick_quote(&self.quotes, rng.as_mut()) {
                Some(quote) => quote.to_string(),
                None => {
                    debug!("MVVM view model has no quotes to publish");
                    return;
                }
            }
        };
        self.current_quote.set(text);
    }
}

/// View bound to an `MvvmQuoteViewModel`.
pub struct MvvmQuoteView {
    view_model: MvvmQuoteViewModel,
    updates: Receiver<String>,
    quote_label: RefCell<String>,
}

impl MvvmQuoteView {
    /// Binds a view to `view_model`, receiving its current value at once.
    pub fn bind(view_model: MvvmQuoteViewModel) -> Self {
        let updates = view_model.current_quote().subscribe();
        let view = Self {
            view_model,
            updates,
            quote_label: RefCell::new(String::new()),
        };
        view.apply_updates();
        view
    }

    /// The bound view model.
    pub fn view_model(&self) -> &MvvmQuoteViewModel {
        &self.view_model
    }

    fn apply_updates(&self) {
        for quote in self.updates.try_iter() {
            *self.quote_label.borrow_mut() = quote;
        }
    }
}

impl Screen for MvvmQuoteView {
    fn title(&self) -> &str {
        "MVVM"
    }

    fn view_did_load(&self) {
        self.apply_updates();
    }

    fn did_tap_button(&self) {
        self.view_model.generate_quote();
        self.apply_updates();
    }

    fn label_text(&self) -> String {
        self.apply_updates();
        self.quote_label.borrow().clone()
    }
}

/// Assembles the MVVM screen.
pub fn assemble(source: &dyn QuoteSource, rng: Box<dyn RngCore>) -> Rc<MvvmQuoteView> {
    Rc::new(MvvmQuoteView::bind(MvvmQuoteViewModel::new(source, rng)))
}
