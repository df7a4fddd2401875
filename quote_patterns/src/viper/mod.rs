//! VIPER: View - Interactor - Presenter - Entity - Router.
//!
//! Every letter is its own layer:
//!
//! - `view` — `ViperQuoteView`, the display surface. Forwards its load and tap
//!   signals to an event handler and renders whatever text it is given.
//! - `interactor` — `ViperQuoteInteractor`, the use cases: load the quotes and
//!   pick one. Results go out through a `QuoteOutput`.
//! - `presenter` — `ViperQuotePresenter`, the mediator. It is the view's event
//!   handler and the interactor's output, and formats quotes for display.
//! - Entity — `quote_common::Quote`.
//! - `router` — `ViperQuoteRouter`, assembles the other layers and owns the
//!   display lifecycle of the screen.
//!
//! Ownership runs one way: view → presenter → interactor. The presenter's
//! link to the view and the interactor's link to the presenter are `Weak`, so
//! dropping the view releases the whole graph.
pub mod contract;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod view;

pub use contract::{QuoteOutput, QuoteProvider, QuoteViewContract, QuoteViewEventHandler};
pub use interactor::ViperQuoteInteractor;
pub use presenter::ViperQuotePresenter;
pub use quote_common::Quote;
pub use router::{ScreenState, ViperQuoteRouter};
pub use view::ViperQuoteView;
