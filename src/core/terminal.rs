//! Terminal display for ffm.
//!
//! [TerminalDisplay] is the crossterm/ratatui implementation of
//! [DisplayAdapter]: it owns raw mode and the alternate screen, draws each
//! listing through `ui::render` and turns key presses into input events.

use crate::app::{DisplayAdapter, InputEvent, Keymap, ListingView, NavState, SelectionStep};
use crate::config::Config;
use crate::core::BrowseError;
use crate::ui;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::widgets::ListState;
use std::io::{self, Stdout};

pub struct TerminalDisplay<'a, B: Backend> {
    terminal: Terminal<B>,
    keymap: Keymap,
    config: &'a Config,
    list_state: ListState,
    generation: Option<u64>,
    len: usize,
    torn_down: bool,
    owns_tty: bool,
}

impl<'a> TerminalDisplay<'a, CrosstermBackend<Stdout>> {
    /// Switches the terminal to raw mode on the alternate screen and hides the
    /// cursor.
    pub fn enter(config: &'a Config) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = restore_tty();
            return Err(e);
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self::new(terminal, config, true)),
            Err(e) => {
                let _ = restore_tty();
                Err(e)
            }
        }
    }
}

/// Leaves raw mode and the alternate screen. Both steps always run; the first
/// failure is returned.
fn restore_tty() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}

fn backend_err<E: std::fmt::Display>(e: E) -> io::Error {
    io::Error::other(e.to_string())
}

impl<'a, B: Backend> TerminalDisplay<'a, B> {
    /// Wraps an existing terminal. With `owns_tty` set, teardown restores raw
    /// mode and the main screen.
    pub fn new(terminal: Terminal<B>, config: &'a Config, owns_tty: bool) -> Self {
        Self {
            terminal,
            keymap: Keymap::from_keys(config.keys()),
            config,
            list_state: ListState::default(),
            generation: None,
            len: 0,
            torn_down: false,
            owns_tty,
        }
    }

    #[inline]
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Puts the cursor on the first entry when a new listing arrives, and keeps
    /// it in bounds otherwise.
    fn sync_cursor(&mut self, view: &ListingView) {
        self.len = view.entries.len();
        if self.generation != Some(view.generation) {
            self.generation = Some(view.generation);
            self.list_state = ListState::default();
        }

        if self.len == 0 {
            self.list_state.select(None);
        } else {
            let idx = self.list_state.selected().unwrap_or(0).min(self.len - 1);
            self.list_state.select(Some(idx));
        }
    }
}

impl<B: Backend> DisplayAdapter for TerminalDisplay<'_, B> {
    fn render(&mut self, view: &ListingView<'_>) -> io::Result<()> {
        self.sync_cursor(view);
        let config = self.config;
        let list_state = &mut self.list_state;
        self.terminal
            .draw(|f| ui::render(f, view, config, list_state))
            .map_err(backend_err)?;
        Ok(())
    }

    fn poll_event(&mut self) -> io::Result<InputEvent> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(self.keymap.lookup(key));
                }
                Event::Resize(_, _) => return Ok(InputEvent::Resize),
                _ => {}
            }
        }
    }

    fn move_selection(&mut self, step: SelectionStep) {
        let Some(current) = self.list_state.selected() else {
            return;
        };
        let next = match step {
            SelectionStep::Up => current.saturating_sub(1),
            SelectionStep::Down => (current + 1).min(self.len.saturating_sub(1)),
        };
        self.list_state.select(Some(next));
    }

    fn current_selection(&self) -> Option<usize> {
        self.list_state.selected().filter(|&idx| idx < self.len)
    }

    fn teardown(&mut self) -> io::Result<()> {
        if self.torn_down {
            return Ok(());
        }
        self.torn_down = true;

        // Every step runs even when an earlier one failed.
        let tty = if self.owns_tty { restore_tty() } else { Ok(()) };
        let cursor = self.terminal.show_cursor().map_err(backend_err);
        let flush = self.terminal.backend_mut().flush().map_err(backend_err);
        tty.and(cursor).and(flush)
    }
}

impl<B: Backend> Drop for TerminalDisplay<'_, B> {
    fn drop(&mut self) {
        let _ = self.teardown();
    }
}

/// Initializes the terminal and runs the navigation loop on it.
///
/// Blocks until quit. The terminal is restored before this returns, whether
/// the loop ended normally or with an error.
pub fn run_terminal(nav: &mut NavState, config: &Config) -> Result<(), BrowseError> {
    let mut display = TerminalDisplay::enter(config)?;
    nav.run_session(&mut display)
}
