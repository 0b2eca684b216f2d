//! Core runtime logic for ffm.
//!
//! This module contains the non-UI “engine” pieces used by the application:
//! - [fm]: directory enumeration and entry resolution (see [browse_dir], [resolve_entry], [FileEntry]).
//! - [formatter]: sort strategies and the size/time formatting shown for each entry.
//! - [error]: the [BrowseError] returned by everything that touches the filesystem.
//! - [terminal]: the crossterm/ratatui display used by the binary.

pub mod error;
pub mod fm;
pub mod formatter;
pub mod terminal;

pub use error::BrowseError;
pub use fm::{FileEntry, FileType, browse_dir, resolve_entry};
pub use formatter::{
    SortMode, fit_to_width, format_display_label, format_file_size, format_file_time,
    format_file_time_in, locale_from_env, parse_locale, sort_entries,
};
