//! Sorting and display formatting for file entries in ffm.
//!
//! Holds the two sort strategies applied to a listing ([SortMode]) and the
//! helpers that build the size/timestamp column shown next to every entry.

use crate::core::FileEntry;

use chrono::{DateTime, Local, Locale};
use serde::Deserialize;
use unicode_width::UnicodeWidthChar;

use std::cmp::Ordering;
use std::sync::LazyLock;
use std::time::SystemTime;

/// Unit ladder used by [format_file_size], one step per factor of 1024.
pub const SIZE_UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Shown instead of a size for directories.
pub const DIR_MARKER: &str = "<DIR>";

/// Label of an entry whose symlink target could not be resolved.
pub const BROKEN_SYMLINK_LABEL: &str = "broken symlink";

/// Ordering strategy for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Byte-wise ascending on names.
    #[default]
    Name,
    /// Largest first.
    Size,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Name => "name",
            SortMode::Size => "size",
        }
    }
}

/// Sorts the given file entries in place.
///
/// Directories are not grouped; a directory sorts by its own inode size under
/// [SortMode::Size]. The sort is stable, so entries of equal size keep their
/// previous relative order.
pub fn sort_entries(entries: &mut [FileEntry], mode: SortMode) {
    match mode {
        SortMode::Name => entries.sort_by(|a, b| a.name().cmp(b.name())),
        SortMode::Size => entries.sort_by(|a, b| cmp_size_desc(a.size(), b.size())),
    }
}

#[inline]
fn cmp_size_desc(a: i64, b: i64) -> Ordering {
    b.cmp(&a)
}

/// Formats a byte count into the largest unit that keeps the value below 1024.
///
/// The number of decimals equals the number of scaling steps taken, so bytes
/// have none, kilobytes one, megabytes two and so on.
/// Directories get [DIR_MARKER] instead.
pub fn format_file_size(size: i64, is_dir: bool) -> String {
    if is_dir {
        return DIR_MARKER.to_string();
    }

    let mut value = size as f64;
    let mut step = 0;
    while value >= 1024.0 && step < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        step += 1;
    }
    format!("{:.*} {}", step, value, SIZE_UNITS[step])
}

/// Locale consulted for timestamps, read once from the environment.
static TIME_LOCALE: LazyLock<Locale> =
    LazyLock::new(|| locale_from_env(|key| std::env::var(key).ok()));

/// Picks the time locale the way the C library does: `LC_ALL`, then
/// `LC_TIME`, then `LANG`. Unset or empty variables are skipped.
pub fn locale_from_env<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    ["LC_ALL", "LC_TIME", "LANG"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty())
        .map_or(Locale::POSIX, |value| parse_locale(&value))
}

/// Maps a locale name such as `de_DE.UTF-8` or `sr_RS@latin` to a [Locale].
/// `C`, `POSIX` and unknown names fall back to [Locale::POSIX].
pub fn parse_locale(name: &str) -> Locale {
    let base = name.split(['.', '@']).next().unwrap_or_default();
    match base {
        "" | "C" | "POSIX" => Locale::POSIX,
        other => Locale::try_from(other).unwrap_or(Locale::POSIX),
    }
}

/// Formats a modification time in the local timezone using the locale's
/// date and time representation.
pub fn format_file_time(modified: SystemTime) -> String {
    format_file_time_in(modified, *TIME_LOCALE)
}

/// [format_file_time] with an explicit locale.
pub fn format_file_time_in(modified: SystemTime, locale: Locale) -> String {
    let dt: DateTime<Local> = DateTime::from(modified);
    dt.format_localized("%c", locale).to_string()
}

/// Builds the precomputed label column of an entry: right aligned size,
/// separator, timestamp.
pub fn format_display_label(size: i64, is_dir: bool, modified: SystemTime) -> String {
    format!(
        "{:>8}  |  {}",
        format_file_size(size, is_dir),
        format_file_time(modified)
    )
}

/// Fits `text` into exactly `width` terminal columns.
///
/// Control characters are shown as `?`. Text that does not fit is cut and ends
/// in `…`; shorter text is padded with spaces.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut current_w = 0;
    let total_w: usize = text
        .chars()
        .map(|c| if c.is_control() { 1 } else { c.width().unwrap_or(0) })
        .sum();
    let budget = if total_w > width {
        width.saturating_sub(1)
    } else {
        width
    };

    for c in text.chars() {
        let c = if c.is_control() { '?' } else { c };
        let w = c.width().unwrap_or(0);
        if current_w + w > budget {
            break;
        }
        out.push(c);
        current_w += w;
    }

    if total_w > width && width > 0 {
        out.push('…');
        current_w += 1;
    }

    if current_w < width {
        out.push_str(&" ".repeat(width - current_w));
    }
    out
}
