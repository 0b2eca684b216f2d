//! Input event handler methods for ffm.
//!
//! This module implements the [NavState] method that turns one [InputEvent]
//! into a state transition, delegating cursor movement to the display.

use crate::app::NavState;
use crate::app::display::{DisplayAdapter, InputEvent, SelectionStep};
use crate::core::SortMode;

/// Result of processing a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressResult {
    Continue,
    Quit,
}

impl NavState {
    /// Applies one input event.
    ///
    /// Transitions that need a fresh listing only set the reload flag; the
    /// caller rebuilds before the next frame.
    pub fn handle_event<D: DisplayAdapter + ?Sized>(
        &mut self,
        event: InputEvent,
        display: &mut D,
    ) -> KeypressResult {
        match event {
            InputEvent::MoveUp => display.move_selection(SelectionStep::Up),
            InputEvent::MoveDown => display.move_selection(SelectionStep::Down),
            InputEvent::NavigateParent => self.go_parent(),
            InputEvent::Enter => {
                self.enter(display.current_selection());
            }
            InputEvent::SortBySize => {
                self.set_sort(SortMode::Size);
            }
            InputEvent::SortByName => {
                self.set_sort(SortMode::Name);
            }
            InputEvent::Resize => self.request_reload(),
            InputEvent::Quit => return KeypressResult::Quit,
            InputEvent::Unrecognized => {}
        }
        KeypressResult::Continue
    }
}
