//! Display surface of the VIPER assembly.
use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use quote_common::Screen;

use crate::viper::contract::{QuoteViewContract, QuoteViewEventHandler};

/// Label plus button. Owns its event handler.
#[derive(Default)]
pub struct ViperQuoteView {
    event_handler: RefCell<Option<Rc<dyn QuoteViewEventHandler>>>,
    quote_label: RefCell<String>,
}

impl ViperQuoteView {
    /// Creates a view with an empty label and no event handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the handler receiving this view's events.
    pub fn set_event_handler(&self, event_handler: Rc<dyn QuoteViewEventHandler>) {
        *self.event_handler.borrow_mut() = Some(event_handler);
    }

    /// Drops the event handler, and with it the presenter and interactor.
    pub fn detach(&self) {
        self.event_handler.borrow_mut().take();
    }

    /// Returns `true` while an event handler is installed.
    pub fn is_attached(&self) -> bool {
        self.event_handler.borrow().is_some()
    }

    pub(crate) fn handler(&self) -> Option<Rc<dyn QuoteViewEventHandler>> {
        let handler = self.event_handler.borrow().clone();
        if handler.is_none() {
            debug!("VIPER view has no event handler");
        }
        handler
    }
}

impl QuoteViewContract for ViperQuoteView {
    fn render(&self, text: &str) {
        *self.quote_label.borrow_mut() = text.to_string();
    }
}

impl Screen for ViperQuoteView {
    fn title(&self) -> &str {
        "VIPER"
    }

    fn view_did_load(&self) {
        if let Some(handler) = self.handler() {
            handler.on_load();
        }
    }

    fn did_tap_button(&self) {
        if let Some(handler) = self.handler() {
            handler.on_quote_requested();
        }
    }

    fn label_text(&self) -> String {
        self.quote_label.borrow().clone()
    }
}
