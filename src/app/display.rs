//! Contract between the navigation state and whatever paints the listing.
//!
//! The state machine only talks to a [DisplayAdapter]; the ratatui/crossterm
//! implementation lives in `core::terminal`, tests use scripted fakes.

use crate::core::{FileEntry, SortMode};

use std::io;
use std::path::Path;

/// Input events as reported by the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveUp,
    MoveDown,
    Enter,
    Quit,
    SortByName,
    SortBySize,
    Resize,
    NavigateParent,
    Unrecognized,
}

/// Cursor movement delegated to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStep {
    Up,
    Down,
}

/// Everything a display needs to paint one frame.
///
/// `generation` changes every time the listing is rebuilt, which tells the
/// display to put its cursor back on the first entry.
#[derive(Debug, Clone, Copy)]
pub struct ListingView<'a> {
    pub dir: &'a Path,
    pub entries: &'a [FileEntry],
    pub sort_mode: SortMode,
    pub generation: u64,
}

/// Renders listings as a selectable menu and reports input back.
pub trait DisplayAdapter {
    /// Paints the ordered entries, the current directory and the quit hint.
    fn render(&mut self, view: &ListingView<'_>) -> io::Result<()>;

    /// Blocks until the next input event.
    fn poll_event(&mut self) -> io::Result<InputEvent>;

    fn move_selection(&mut self, step: SelectionStep);

    /// Index of the highlighted entry in the last rendered listing.
    /// `None` when that listing was empty.
    fn current_selection(&self) -> Option<usize>;

    /// Releases rendering resources. Must be safe to call more than once,
    /// only the first call does any work.
    fn teardown(&mut self) -> io::Result<()>;
}
