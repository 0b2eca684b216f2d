//! Helpers for ffm.
//!
//! Provides utility functions:
//! - Color parsing from strings or hex codes
//! - Looking up the home directory
//! - Displaying home directories as "~" in file paths
//! - Resolving the directory the browser starts in

use crate::core::BrowseError;

use ratatui::style::Color;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::{fs, io};

/// Parses a string (color name or hex) into a ratatui::style::color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB)
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        _ => s
            .strip_prefix('#')
            .and_then(parse_hex)
            .unwrap_or(Color::Reset),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let expanded = match hex.len() {
        6 => hex.to_string(),
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };
    let rgb = u32::from_str_radix(&expanded, 16).ok()?;
    Some(Color::Rgb(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    ))
}

pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Util function to shorten home directory to ~.
/// Used by the header line of the listing.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = get_home()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        let mut short = stripped.display().to_string();
        if short.starts_with(MAIN_SEPARATOR) {
            short.remove(0);
        }
        return format!("~{}{}", MAIN_SEPARATOR, short);
    }
    path.display().to_string()
}

/// Resolves the directory given on the command line to an absolute path.
///
/// Fails with [BrowseError::WorkingDir] when the path does not exist or is not
/// a directory.
pub fn resolve_start_dir(path: &Path) -> Result<PathBuf, BrowseError> {
    let resolved = fs::canonicalize(path).map_err(|source| BrowseError::WorkingDir {
        path: path.to_path_buf(),
        source,
    })?;

    if !resolved.is_dir() {
        return Err(BrowseError::WorkingDir {
            path: path.to_path_buf(),
            source: io::Error::from(io::ErrorKind::NotADirectory),
        });
    }
    Ok(resolved)
}
