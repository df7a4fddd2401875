//! Assembly and navigation for the VIPER screen.
//!
//! The router is the composition root: it builds view, interactor and
//! presenter, wires them together, and shows the view either on a parent
//! host it is given or on its own root host. Every call to `present_screen`
//! builds a new, independent graph; the router holds the root reference of
//! each displayed screen and `dismiss_screen` gives up the latest one.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info};
use quote_common::random::quote_rng;
use quote_common::{DisplayHost, QuoteSource, Result, Screen};

use crate::viper::contract::{QuoteOutput, QuoteViewContract};
use crate::viper::interactor::ViperQuoteInteractor;
use crate::viper::presenter::ViperQuotePresenter;
use crate::viper::view::ViperQuoteView;

/// Lifecycle of the screen managed by a router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Nothing has been built yet.
    Uninitialized,
    /// The object graph is wired but not displayed.
    Assembled,
    /// The screen is on a host.
    Displayed,
    /// The screen has been taken down.
    Dismissed,
}

struct PresentedScreen {
    view: Rc<ViperQuoteView>,
    host: Rc<RefCell<dyn DisplayHost>>,
}

/// Builds and presents VIPER quote screens.
pub struct ViperQuoteRouter {
    root_host: Rc<RefCell<dyn DisplayHost>>,
    source: Rc<dyn QuoteSource>,
    seed: Option<u64>,
    presented: Vec<PresentedScreen>,
    state: ScreenState,
}

impl ViperQuoteRouter {
    /// Creates a router showing screens on `root_host` unless a parent is
    /// given. `seed` makes each assembled screen's quote sequence repeatable.
    pub fn new(root_host: Rc<RefCell<dyn DisplayHost>>, source: Rc<dyn QuoteSource>, seed: Option<u64>) -> Self {
        Self {
            root_host,
            source,
            seed,
            presented: Vec::new(),
            state: ScreenState::Uninitialized,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// The most recently presented view still displayed, if any.
    pub fn quote_view(&self) -> Option<Rc<ViperQuoteView>> {
        self.presented.last().map(|presented| Rc::clone(&presented.view))
    }

    /// Number of screens this router currently has displayed.
    pub fn presented_count(&self) -> usize {
        self.presented.len()
    }

    /// Assembles a fresh screen and shows it on `parent`, or on the root host
    /// when no parent is given.
    ///
    /// Screens presented earlier stay displayed. If the host refuses the
    /// screen, the new graph is dropped and the state is left unchanged.
    pub fn present_screen(&mut self, parent: Option<Rc<RefCell<dyn DisplayHost>>>) -> Result<Rc<ViperQuoteView>> {
        let previous = self.state;
        let view = self.assemble();
        self.state = ScreenState::Assembled;

        let host = parent.unwrap_or_else(|| Rc::clone(&self.root_host));
        if let Err(e) = host.borrow_mut().show(view.clone()) {
            view.detach();
            self.state = previous;
            return Err(e);
        }

        self.presented.push(PresentedScreen {
            view: Rc::clone(&view),
            host,
        });
        self.state = ScreenState::Displayed;
        info!("VIPER quote screen presented ({} displayed)", self.presented.len());
        Ok(view)
    }

    /// Takes the latest displayed screen off its host and releases its object
    /// graph.
    ///
    /// Returns `false` when nothing was displayed.
    pub fn dismiss_screen(&mut self) -> Result<bool> {
        let Some(presented) = self.presented.pop() else {
            debug!("dismiss_screen: nothing presented");
            return Ok(false);
        };

        let screen: Rc<dyn Screen> = presented.view.clone();
        let removed = presented.host.borrow_mut().dismiss(&screen);
        presented.view.detach();
        self.state = if self.presented.is_empty() {
            ScreenState::Dismissed
        } else {
            ScreenState::Displayed
        };
        if !removed? {
            debug!("VIPER screen was no longer on its host");
        }
        info!("VIPER quote screen dismissed");
        Ok(true)
    }

    fn assemble(&self) -> Rc<ViperQuoteView> {
        let view = Rc::new(ViperQuoteView::new());
        let weak_view: Weak<ViperQuoteView> = Rc::downgrade(&view);
        let view_contract: Weak<dyn QuoteViewContract> = weak_view;

        let mut interactor = ViperQuoteInteractor::new(Rc::clone(&self.source), quote_rng(self.seed));
        let presenter = Rc::new_cyclic(|presenter: &Weak<ViperQuotePresenter>| {
            let output: Weak<dyn QuoteOutput> = presenter.clone();
            interactor.set_output(output);
            ViperQuotePresenter::new(view_contract, Box::new(interactor))
        });
        view.set_event_handler(presenter);
        debug!("VIPER screen assembled");
        view
    }
}
