//! Use-case layer of the VIPER assembly.
use std::rc::{Rc, Weak};

use log::debug;
use quote_common::random::pick_quote;
use quote_common::{Quote, QuoteSource};
use rand::RngCore;

use crate::viper::contract::{QuoteOutput, QuoteProvider};

/// Owns the quote collection and implements the quote use cases.
pub struct ViperQuoteInteractor {
    source: Rc<dyn QuoteSource>,
    /// `None` until `load` has run.
    quotes: Option<Vec<Quote>>,
    output: Option<Weak<dyn QuoteOutput>>,
    rng: Box<dyn RngCore>,
}

impl ViperQuoteInteractor {
    /// Creates an interactor that loads from `source`. No output is attached yet.
    pub fn new(source: Rc<dyn QuoteSource>, rng: Box<dyn RngCore>) -> Self {
        Self {
            source,
            quotes: None,
            output: None,
            rng,
        }
    }

    /// Attaches the output sink. The interactor does not keep it alive.
    pub fn set_output(&mut self, output: Weak<dyn QuoteOutput>) {
        self.output = Some(output);
    }

    /// Loaded quotes, empty before `load`.
    pub fn quotes(&self) -> &[Quote] {
        self.quotes.as_deref().unwrap_or_default()
    }
}

impl QuoteProvider for ViperQuoteInteractor {
    fn load(&mut self) {
        let quotes = self.source.quotes();
        debug!("Interactor loaded {} quotes", quotes.len());
        self.quotes = Some(quotes);
    }

    fn generate_quote(&mut self) -> Option<Quote> {
        let Some(quotes) = self.quotes.as_deref() else {
            debug!("generate_quote called before load");
            return None;
        };
        let Some(quote) = pick_quote(quotes, self.rng.as_mut()).cloned() else {
            debug!("No quotes loaded, nothing to report");
            return None;
        };

        match self.output.as_ref().and_then(Weak::upgrade) {
            Some(output) => output.on_quote_produced(&quote),
            None => debug!("Interactor output is gone, quote not reported"),
        }
        Some(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_common::BuiltinQuotes;
    use quote_common::random::quote_rng;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOutput {
        produced: RefCell<Vec<Quote>>,
    }

    impl QuoteOutput for RecordingOutput {
        fn on_quote_produced(&self, quote: &Quote) {
            self.produced.borrow_mut().push(quote.clone());
        }
    }

    fn wired(source: Rc<dyn QuoteSource>, seed: u64) -> (ViperQuoteInteractor, Rc<RecordingOutput>) {
        let output = Rc::new(RecordingOutput::default());
        let sink: Rc<dyn QuoteOutput> = output.clone();
        let mut interactor = ViperQuoteInteractor::new(source, quote_rng(Some(seed)));
        interactor.set_output(Rc::downgrade(&sink));
        (interactor, output)
    }

    #[test]
    fn reports_exactly_one_member_per_call() {
        let (mut interactor, output) = wired(Rc::new(BuiltinQuotes), 5);
        interactor.load();
        let all = BuiltinQuotes.quotes();

        for call in 1..=50 {
            let quote = interactor.generate_quote().unwrap();
            assert!(all.contains(&quote));
            assert_eq!(output.produced.borrow().len(), call);
            assert_eq!(output.produced.borrow().last(), Some(&quote));
        }
    }

    #[test]
    fn empty_collection_reports_nothing() {
        let (mut interactor, output) = wired(Rc::new(Vec::<Quote>::new()), 5);
        interactor.load();
        assert_eq!(interactor.generate_quote(), None);
        assert!(output.produced.borrow().is_empty());
    }

    #[test]
    fn generate_before_load_reports_nothing() {
        let (mut interactor, output) = wired(Rc::new(BuiltinQuotes), 5);
        assert_eq!(interactor.generate_quote(), None);
        assert!(output.produced.borrow().is_empty());
    }

    #[test]
    fn load_twice_does_not_duplicate() {
        let (mut interactor, _output) = wired(Rc::new(BuiltinQuotes), 5);
        interactor.load();
        let first = interactor.quotes().to_vec();
        interactor.load();
        assert_eq!(interactor.quotes(), first.as_slice());
        assert_eq!(interactor.quotes().len(), 13);
    }

    #[test]
    fn released_output_is_skipped() {
        let mut interactor = ViperQuoteInteractor::new(Rc::new(BuiltinQuotes), quote_rng(Some(1)));
        {
            let sink: Rc<dyn QuoteOutput> = Rc::new(RecordingOutput::default());
            interactor.set_output(Rc::downgrade(&sink));
        }
        interactor.load();
        assert!(interactor.generate_quote().is_some());
    }

    #[test]
    fn without_output_still_returns_the_quote() {
        let mut interactor = ViperQuoteInteractor::new(
            Rc::new(vec![Quote::new("Never tell me the odds.", "Han Solo")]),
            quote_rng(None),
        );
        interactor.load();
        assert_eq!(
            interactor.generate_quote(),
            Some(Quote::new("Never tell me the odds.", "Han Solo"))
        );
    }
}
