//! Miscellaneous utilities for ffm.
//!
//! - [cli]: command line parsing with clap.
//! - [helpers]: colour parsing, home lookup and start directory resolution.
//! - [logger]: the optional file-backed logger.

pub mod cli;
pub mod helpers;
pub mod logger;

pub use helpers::{get_home, parse_color, resolve_start_dir, shorten_home_path};
