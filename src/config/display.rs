//! Display configuration options for ffm
//!
//! This module defines the `[display]` table of the ffm.toml configuration file.

use ratatui::widgets::BorderType;
use serde::Deserialize;

/// Display configuration options
///
/// Controls the chrome around the listing: the path header, the border of the
/// list and how the cursor is drawn.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Display {
    header: bool,
    borders: bool,
    border_shape: BorderShape,
    selection_marker: bool,
    scroll_padding: usize,
}

impl Display {
    #[inline]
    pub fn header(&self) -> bool {
        self.header
    }

    #[inline]
    pub fn borders(&self) -> bool {
        self.borders
    }

    #[inline]
    pub fn border_shape(&self) -> &BorderShape {
        &self.border_shape
    }

    #[inline]
    pub fn selection_marker(&self) -> bool {
        self.selection_marker
    }

    #[inline]
    pub fn scroll_padding(&self) -> usize {
        self.scroll_padding
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            header: true,
            borders: true,
            border_shape: BorderShape::Square,
            selection_marker: true,
            scroll_padding: 2,
        }
    }
}

/// Border shape options
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BorderShape {
    Square,
    Rounded,
    Double,
    Thick,
}

impl BorderShape {
    pub fn as_border_type(&self) -> BorderType {
        match self {
            BorderShape::Square => BorderType::Plain,
            BorderShape::Rounded => BorderType::Rounded,
            BorderShape::Double => BorderType::Double,
            BorderShape::Thick => BorderType::Thick,
        }
    }
}
