//! Error type for the directory listing engine.
//!
//! Every variant is considered unrecoverable by the application: the event loop
//! stops, the terminal is restored and the diagnostic is printed by `main`.

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowseError {
    /// The directory could not be opened for enumeration.
    #[error("cannot open directory '{}': {source}", path.display())]
    OpenDir { path: PathBuf, source: io::Error },

    /// Enumeration started but a later read failed.
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    /// lstat on an enumerated entry failed.
    #[error("cannot read metadata of '{}': {source}", path.display())]
    Metadata { path: PathBuf, source: io::Error },

    /// A non-symlink entry could not be canonicalized.
    #[error("cannot resolve '{}': {source}", path.display())]
    Resolve { path: PathBuf, source: io::Error },

    /// Growing the listing storage failed.
    #[error("cannot grow listing to {requested} entries: {source}")]
    Alloc {
        requested: usize,
        source: TryReserveError,
    },

    /// The directory to navigate to could not be resolved.
    #[error("cannot resolve working directory '{}': {source}", path.display())]
    WorkingDir { path: PathBuf, source: io::Error },

    /// Rendering or input failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
