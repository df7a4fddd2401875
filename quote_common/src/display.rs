//! Screens and the hosts that display them.
//!
//! A `Screen` is the display surface of one pattern assembly: a label, a
//! single button, and the two signals the surface emits (loaded, button
//! tapped). A `DisplayHost` is whatever shows screens to the user; hosts fire
//! a screen's load signal when they show it.
use std::rc::Rc;

use log::debug;

use crate::result::Result;

/// Title of the single button on every quote screen.
pub const SHOW_QUOTES_BUTTON: &str = "Show Quotes";

/// Display surface exposed to hosts.
///
/// Screens are shared through `Rc` and use interior mutability, since a tap
/// on a screen eventually renders back into that same screen.
pub trait Screen {
    /// Short title shown above the screen.
    fn title(&self) -> &str;

    /// Signal emitted once the screen has been shown.
    fn view_did_load(&self);

    /// Signal emitted when the button is tapped.
    fn did_tap_button(&self);

    /// Current label text.
    fn label_text(&self) -> String;

    /// Title of the button.
    fn button_title(&self) -> &str {
        SHOW_QUOTES_BUTTON
    }
}

/// Capability to show and dismiss screens.
pub trait DisplayHost {
    /// Shows `screen` on top of whatever is displayed and fires its load signal.
    fn show(&mut self, screen: Rc<dyn Screen>) -> Result<()>;

    /// Removes `screen` if it is displayed. Returns whether it was.
    fn dismiss(&mut self, screen: &Rc<dyn Screen>) -> Result<bool>;
}

/// In-memory stack of displayed screens; the last one is on top.
#[derive(Default)]
pub struct NavigationStack {
    screens: Vec<Rc<dyn Screen>>,
}

impl NavigationStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen currently on top, if any.
    pub fn top(&self) -> Option<Rc<dyn Screen>> {
        self.screens.last().cloned()
    }

    /// Number of displayed screens.
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Returns `true` when nothing is displayed.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Returns `true` if `screen` is currently displayed.
    pub fn contains(&self, screen: &Rc<dyn Screen>) -> bool {
        self.screens.iter().any(|shown| Rc::ptr_eq(shown, screen))
    }
}

impl DisplayHost for NavigationStack {
    fn show(&mut self, screen: Rc<dyn Screen>) -> Result<()> {
        debug!("Showing screen '{}' (depth {})", screen.title(), self.screens.len() + 1);
        self.screens.push(Rc::clone(&screen));
        screen.view_did_load();
        Ok(())
    }

    fn dismiss(&mut self, screen: &Rc<dyn Screen>) -> Result<bool> {
        let before = self.screens.len();
        self.screens.retain(|shown| !Rc::ptr_eq(shown, screen));
        let removed = self.screens.len() != before;
        debug!("Dismiss screen '{}': removed={}", screen.title(), removed);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingScreen {
        loads: Cell<usize>,
    }

    impl Screen for CountingScreen {
        fn title(&self) -> &str {
            "counting"
        }
        fn view_did_load(&self) {
            self.loads.set(self.loads.get() + 1);
        }
        fn did_tap_button(&self) {}
        fn label_text(&self) -> String {
            String::new()
        }
    }

    fn screen() -> Rc<CountingScreen> {
        Rc::new(CountingScreen { loads: Cell::new(0) })
    }

    #[test]
    fn show_pushes_and_loads() {
        let mut stack = NavigationStack::new();
        let first = screen();
        stack.show(first.clone()).unwrap();
        assert_eq!(first.loads.get(), 1);
        assert_eq!(stack.len(), 1);

        let second = screen();
        stack.show(second.clone()).unwrap();
        let top = stack.top().unwrap();
        let expected: Rc<dyn Screen> = second;
        assert!(Rc::ptr_eq(&top, &expected));
    }

    #[test]
    fn dismiss_removes_only_that_screen() {
        let mut stack = NavigationStack::new();
        let first: Rc<dyn Screen> = screen();
        let second: Rc<dyn Screen> = screen();
        stack.show(first.clone()).unwrap();
        stack.show(second.clone()).unwrap();

        assert!(stack.dismiss(&first).unwrap());
        assert!(!stack.contains(&first));
        assert!(stack.contains(&second));
        assert!(!stack.dismiss(&first).unwrap());
    }

    #[test]
    fn default_button_title() {
        assert_eq!(screen().button_title(), "Show Quotes");
    }
}
