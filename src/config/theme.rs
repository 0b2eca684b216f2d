//! Theme configuration options for ffm
//!
//! This module defines the `[theme]` table of the ffm.toml configuration file.
//! Every colour left at `"default"` falls back to the internal theme.

use crate::utils::parse_color;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use std::sync::LazyLock;

/// Theme configuration options
/// # Examples
/// ```toml
/// [theme]
/// selection_icon = "> "
/// [theme.directory]
/// fg = "cyan"
/// [theme.selection]
/// bg = "#303030"
/// ```
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Theme {
    accent: ColorPair,
    selection: ColorPair,
    entry: ColorPair,
    directory: ColorPair,
    symlink: ColorPair,
    broken: ColorPair,
    path: ColorPair,
    status_line: ColorPair,
    selection_icon: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            accent: ColorPair {
                fg: Color::Indexed(238),
                ..ColorPair::default()
            },
            selection: ColorPair {
                bg: Color::Indexed(236),
                ..ColorPair::default()
            },
            entry: ColorPair::default(),
            directory: ColorPair {
                fg: Color::Blue,
                ..ColorPair::default()
            },
            symlink: ColorPair {
                fg: Color::Magenta,
                ..ColorPair::default()
            },
            broken: ColorPair {
                fg: Color::Red,
                ..ColorPair::default()
            },
            path: ColorPair {
                fg: Color::Magenta,
                ..ColorPair::default()
            },
            status_line: ColorPair {
                fg: Color::DarkGray,
                ..ColorPair::default()
            },
            selection_icon: "> ".into(),
        }
    }
}

impl Theme {
    /// Internal default theme, used as fallback when a colour is `Reset`.
    pub fn internal_defaults() -> &'static Self {
        static DEFAULT: LazyLock<Theme> = LazyLock::new(Theme::default);
        &DEFAULT
    }

    pub fn accent_style(&self) -> Style {
        self.accent.style_or(&Theme::internal_defaults().accent)
    }

    pub fn selection_style(&self) -> Style {
        self.selection
            .style_or(&Theme::internal_defaults().selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn entry_style(&self) -> Style {
        self.entry.style_or(&Theme::internal_defaults().entry)
    }

    pub fn directory_style(&self) -> Style {
        self.directory
            .style_or(&Theme::internal_defaults().directory)
    }

    pub fn symlink_style(&self) -> Style {
        self.symlink.style_or(&Theme::internal_defaults().symlink)
    }

    pub fn broken_style(&self) -> Style {
        self.broken.style_or(&Theme::internal_defaults().broken)
    }

    pub fn path_style(&self) -> Style {
        self.path.style_or(&Theme::internal_defaults().path)
    }

    pub fn status_line_style(&self) -> Style {
        self.status_line
            .style_or(&Theme::internal_defaults().status_line)
    }

    pub fn selection_icon(&self) -> &str {
        &self.selection_icon
    }
}

/// ColorPair struct to hold foreground and background colors.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    /// Resolves the ColorPair by replacing Reset colors with those from another ColorPair.
    pub fn resolve(&self, other: &ColorPair) -> Self {
        Self {
            fg: if self.fg == Color::Reset {
                other.fg
            } else {
                self.fg
            },
            bg: if self.bg == Color::Reset {
                other.bg
            } else {
                self.bg
            },
        }
    }

    /// Converts the ColorPair to a Style, falling back to `fallback` for Reset colors.
    pub fn style_or(&self, fallback: &ColorPair) -> Style {
        let resolved = self.resolve(fallback);
        Style::default().fg(resolved.fg).bg(resolved.bg)
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_colors_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let theme: Theme = toml::from_str(
            r##"
            selection_icon = "* "
            [directory]
            fg = "cyan"
            [selection]
            bg = "#102030"
            "##,
        )?;

        assert_eq!(theme.directory_style().fg, Some(Color::Cyan));
        assert_eq!(theme.selection_style().bg, Some(Color::Rgb(0x10, 0x20, 0x30)));
        assert_eq!(theme.selection_icon(), "* ");
        // untouched tables keep the internal colours
        assert_eq!(theme.broken_style().fg, Some(Color::Red));
        Ok(())
    }

    #[test]
    fn default_keyword_falls_back() -> Result<(), Box<dyn std::error::Error>> {
        let theme: Theme = toml::from_str(
            r#"
            [path]
            fg = "default"
            "#,
        )?;
        assert_eq!(theme.path_style().fg, Some(Color::Magenta));
        Ok(())
    }
}
