//! Navigation loop tests for ffm
//!
//! These tests drive [NavState] end to end through a scripted display that
//! replays a fixed list of input events and records every frame it is asked to
//! paint. Temporary directories are removed when the tests finish.

use ffm_tui::app::{DisplayAdapter, InputEvent, ListingView, NavState, SelectionStep};
use ffm_tui::core::{BrowseError, SortMode};

use std::collections::{BTreeSet, VecDeque};
use std::error;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;
use tempfile::tempdir;

/// What the scripted display saw on one render call.
#[derive(Debug, Clone)]
struct Frame {
    dir: PathBuf,
    names: Vec<OsString>,
    sort_mode: SortMode,
    generation: u64,
}

#[derive(Default)]
struct ScriptedDisplay {
    events: VecDeque<InputEvent>,
    frames: Vec<Frame>,
    cursor: Option<usize>,
    len: usize,
    generation: Option<u64>,
    teardowns: usize,
}

impl ScriptedDisplay {
    fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }

    fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl DisplayAdapter for ScriptedDisplay {
    fn render(&mut self, view: &ListingView<'_>) -> io::Result<()> {
        self.len = view.entries.len();
        if self.generation != Some(view.generation) {
            self.generation = Some(view.generation);
            self.cursor = None;
        }
        self.cursor = if self.len == 0 {
            None
        } else {
            Some(self.cursor.unwrap_or(0).min(self.len - 1))
        };

        self.frames.push(Frame {
            dir: view.dir.to_path_buf(),
            names: view.entries.iter().map(|e| e.name().to_os_string()).collect(),
            sort_mode: view.sort_mode,
            generation: view.generation,
        });
        Ok(())
    }

    fn poll_event(&mut self) -> io::Result<InputEvent> {
        // Running out of script ends the session like a user quitting.
        Ok(self.events.pop_front().unwrap_or(InputEvent::Quit))
    }

    fn move_selection(&mut self, step: SelectionStep) {
        if let Some(cur) = self.cursor {
            self.cursor = Some(match step {
                SelectionStep::Up => cur.saturating_sub(1),
                SelectionStep::Down => (cur + 1).min(self.len.saturating_sub(1)),
            });
        }
    }

    fn current_selection(&self) -> Option<usize> {
        self.cursor
    }

    fn teardown(&mut self) -> io::Result<()> {
        self.teardowns += 1;
        Ok(())
    }
}

fn names_set(frame: &Frame) -> BTreeSet<OsString> {
    frame.names.iter().cloned().collect()
}

#[test]
fn quit_ends_session_with_single_teardown() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), b"a")?;

    let mut nav = NavState::new(dir.path().to_path_buf(), SortMode::Name);
    let mut display = ScriptedDisplay::new([InputEvent::MoveDown, InputEvent::Quit]);

    nav.run_session(&mut display)?;

    assert_eq!(display.teardowns, 1);
    assert_eq!(display.frames.len(), 2);
    assert!(display.events.is_empty());
    Ok(())
}

#[test]
fn enter_then_parent_restores_listing() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("alpha"))?;
    fs::write(dir.path().join("alpha").join("inner.txt"), b"inner")?;
    fs::write(dir.path().join("beta.txt"), b"beta")?;

    let mut nav = NavState::new(dir.path().to_path_buf(), SortMode::Name);
    // "alpha" sorts first, so the initial cursor is on it
    let mut display = ScriptedDisplay::new([
        InputEvent::Enter,
        InputEvent::NavigateParent,
        InputEvent::Quit,
    ]);

    nav.run_session(&mut display)?;

    let frames = &display.frames;
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[1].dir, fs::canonicalize(dir.path().join("alpha"))?);
    assert_eq!(frames[1].names, vec![OsString::from("inner.txt")]);
    assert_eq!(frames[2].dir, frames[0].dir);
    assert_eq!(names_set(&frames[0]), names_set(&frames[2]));
    Ok(())
}

#[test]
fn sort_switch_reloads_only_on_change() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("big.bin"), vec![0u8; 4096])?;
    fs::write(dir.path().join("small.bin"), b"x")?;

    let mut nav = NavState::new(dir.path().to_path_buf(), SortMode::Name);
    let mut display = ScriptedDisplay::new([
        InputEvent::SortByName,
        InputEvent::SortBySize,
        InputEvent::SortBySize,
        InputEvent::Quit,
    ]);

    nav.run_session(&mut display)?;

    let generations: Vec<u64> = display.frames.iter().map(|f| f.generation).collect();
    assert_eq!(generations[0], generations[1]);
    assert_ne!(generations[1], generations[2]);
    assert_eq!(generations[2], generations[3]);

    let size_frame = &display.frames[2];
    assert_eq!(size_frame.sort_mode, SortMode::Size);
    assert_eq!(
        size_frame.names,
        vec![OsString::from("big.bin"), OsString::from("small.bin")]
    );
    Ok(())
}

#[test]
fn enter_on_file_is_ignored() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("only.txt"), b"data")?;

    let mut nav = NavState::new(dir.path().to_path_buf(), SortMode::Name);
    let mut display = ScriptedDisplay::new([InputEvent::Enter, InputEvent::Quit]);

    nav.run_session(&mut display)?;

    assert_eq!(display.frames.len(), 2);
    assert_eq!(display.frames[0].dir, display.frames[1].dir);
    assert_eq!(display.frames[0].generation, display.frames[1].generation);
    Ok(())
}

#[test]
fn resize_and_unrecognized_input() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let mut nav = NavState::new(dir.path().to_path_buf(), SortMode::Name);
    let mut display = ScriptedDisplay::new([
        InputEvent::Unrecognized,
        InputEvent::Resize,
        InputEvent::Quit,
    ]);

    nav.run_session(&mut display)?;

    let frames = &display.frames;
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].generation, frames[1].generation);
    assert_ne!(frames[1].generation, frames[2].generation);
    assert!(frames[2].names.is_empty());
    Ok(())
}

#[test]
fn cursor_moves_select_entered_dir() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    for name in ["one", "two", "three"] {
        fs::create_dir(dir.path().join(name))?;
    }

    let mut nav = NavState::new(dir.path().to_path_buf(), SortMode::Name);
    // sorted: one, three, two
    let mut display = ScriptedDisplay::new([
        InputEvent::MoveDown,
        InputEvent::MoveDown,
        InputEvent::MoveDown,
        InputEvent::MoveUp,
        InputEvent::Enter,
        InputEvent::Quit,
    ]);

    nav.run_session(&mut display)?;

    let last = display.last_frame().ok_or("no frame rendered")?;
    assert_eq!(last.dir, fs::canonicalize(dir.path().join("three"))?);
    Ok(())
}

#[test]
fn missing_start_dir_fails_after_teardown() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let mut nav = NavState::new(dir.path().join("gone"), SortMode::Name);
    let mut display = ScriptedDisplay::new([]);

    let result = nav.run_session(&mut display);

    assert!(matches!(result, Err(BrowseError::WorkingDir { .. })));
    assert_eq!(display.teardowns, 1);
    assert!(display.frames.is_empty());
    Ok(())
}

#[test]
fn directory_removed_while_browsing() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let doomed = dir.path().join("doomed");
    fs::create_dir(&doomed)?;

    let mut nav = NavState::new(doomed.clone(), SortMode::Name);
    nav.reload()?;
    fs::remove_dir(&doomed)?;

    let mut display = ScriptedDisplay::new([InputEvent::Resize, InputEvent::Quit]);
    let result = nav.run_session(&mut display);

    assert!(result.is_err());
    assert_eq!(display.teardowns, 1);
    Ok(())
}
