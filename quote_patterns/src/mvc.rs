//! MVC: Model - View - Controller.
//!
//! The controller is the view as well. It loads the model when its view
//! loads, and on a tap it picks a quote and formats it on its own. Business
//! logic, formatting and display all live in one type.
use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use quote_common::random::pick_quote;
use quote_common::{Quote, QuoteSource, Screen};
use rand::RngCore;

/// View and controller in one.
pub struct MvcQuoteController {
    source: Rc<dyn QuoteSource>,
    quotes: RefCell<Vec<Quote>>,
    rng: RefCell<Box<dyn RngCore>>,
    quote_label: RefCell<String>,
}

impl MvcQuoteController {
    /// Creates a controller that loads its quotes from `source` once shown.
    pub fn new(source: Rc<dyn QuoteSource>, rng: Box<dyn RngCore>) -> Self {
        Self {
            source,
            quotes: RefCell::new(Vec::new()),
            rng: RefCell::new(rng),
            quote_label: RefCell::new(String::new()),
        }
    }

    /// Number of loaded quotes.
    pub fn quote_count(&self) -> usize {
        self.quotes.borrow().len()
    }
}

impl Screen for MvcQuoteController {
    fn title(&self) -> &str {
        "MVC"
    }

    fn view_did_load(&self) {
        *self.quotes.borrow_mut() = self.source.quotes();
        debug!("MVC controller loaded {} quotes", self.quote_count());
    }

    fn did_tap_button(&self) {
        let quotes = self.quotes.borrow();
        let mut rng = self.rng.borrow_mut();
        match pick_quote(&quotes, rng.as_mut()) {
            Some(quote) => *self.quote_label.borrow_mut() = quote.to_string(),
            None => debug!("MVC controller has no quotes to show"),
        }
    }

    fn label_text(&self) -> String {
        self.quote_label.borrow().clone()
    }
}

/// Assembles the MVC screen.
pub fn assemble(source: Rc<dyn QuoteSource>, rng: Box<dyn RngCore>) -> Rc<MvcQuoteController> {
    Rc::new(MvcQuoteController::new(source, rng))
}
