//! Application layer of ffm.
//!
//! - [nav]: [NavState], the current directory, sort mode, reload flag and listing.
//! - [handlers]: turning input events into state transitions.
//! - [state]: the event loop tying a [NavState] to a display.
//! - [display]: the [DisplayAdapter] contract the loop renders through.
//! - [keymap]: key bindings to input events.

pub mod display;
pub mod handlers;
pub mod keymap;
pub mod nav;
pub mod state;

pub use display::{DisplayAdapter, InputEvent, ListingView, SelectionStep};
pub use handlers::KeypressResult;
pub use keymap::Keymap;
pub use nav::NavState;
