//! Navigation state and listing logic for ffm.
//!
//! Owns the current directory, the active sort mode, the reload flag and the
//! listing itself. Transitions only record what should happen; the listing is
//! rebuilt by [NavState::reload] before the next frame.

use crate::app::display::ListingView;
use crate::core::{BrowseError, FileEntry, SortMode, browse_dir, sort_entries};

use std::fs;
use std::path::{Path, PathBuf};

/// Holds the navigation and listing state of the browser.
pub struct NavState {
    current_dir: PathBuf,
    sort_mode: SortMode,
    needs_reload: bool,
    entries: Vec<FileEntry>,
    generation: u64,
}

impl NavState {
    /// Creates the state for `path`. Nothing is listed until the first
    /// [NavState::reload].
    pub fn new(path: PathBuf, sort_mode: SortMode) -> Self {
        Self {
            current_dir: path,
            sort_mode,
            needs_reload: true,
            entries: Vec::new(),
            generation: 0,
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    #[inline]
    pub fn needs_reload(&self) -> bool {
        self.needs_reload
    }

    #[inline]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn view(&self) -> ListingView<'_> {
        ListingView {
            dir: &self.current_dir,
            entries: &self.entries,
            sort_mode: self.sort_mode,
            generation: self.generation,
        }
    }

    // Transitions

    #[inline]
    pub fn request_reload(&mut self) {
        self.needs_reload = true;
    }

    /// Targets the parent directory. The `..` component is resolved by the
    /// next reload, so the parent of `/` is `/`.
    pub fn go_parent(&mut self) {
        self.current_dir.push("..");
        self.request_reload();
    }

    /// Moves into the entry at `selected` if it is navigable.
    /// Returns `false` (and changes nothing) otherwise.
    pub fn enter(&mut self, selected: Option<usize>) -> bool {
        let target = selected
            .and_then(|idx| self.entries.get(idx))
            .filter(|entry| entry.is_navigable())
            .and_then(|entry| entry.absolute_path())
            .map(Path::to_path_buf);

        match target {
            Some(path) => {
                self.current_dir = path;
                self.request_reload();
                true
            }
            None => {
                log::trace!("enter ignored for selection {selected:?}");
                false
            }
        }
    }

    /// Switches the sort mode. Selecting the active mode again is a no-op.
    pub fn set_sort(&mut self, mode: SortMode) -> bool {
        if self.sort_mode == mode {
            return false;
        }
        self.sort_mode = mode;
        self.request_reload();
        true
    }

    /// Rebuilds the listing of the current directory.
    ///
    /// Resolves the directory to its canonical form, lists and sorts it, then
    /// replaces the previous listing as a whole.
    pub fn reload(&mut self) -> Result<(), BrowseError> {
        let resolved =
            fs::canonicalize(&self.current_dir).map_err(|source| BrowseError::WorkingDir {
                path: self.current_dir.clone(),
                source,
            })?;

        let mut entries = browse_dir(&resolved)?;
        sort_entries(&mut entries, self.sort_mode);

        log::debug!(
            "listed {} ({} entries, sort: {})",
            resolved.display(),
            entries.len(),
            self.sort_mode.as_str()
        );

        self.current_dir = resolved;
        self.entries = entries;
        self.generation = self.generation.wrapping_add(1);
        self.needs_reload = false;
        Ok(())
    }
}
