//! The general configuration settings for ffm.
//!
//! This module defines the [General] struct for deserializing the `[general]`
//! table: the initial sort mode and the optional log file.

use crate::core::SortMode;

use log::LevelFilter;
use serde::Deserialize;

use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    sort: SortMode,
    log_file: Option<PathBuf>,
    #[serde(deserialize_with = "deserialize_level")]
    log_level: LevelFilter,
}

impl Default for General {
    fn default() -> Self {
        General {
            sort: SortMode::Name,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl General {
    /// Sort mode the browser starts with.
    #[inline]
    pub fn sort(&self) -> SortMode {
        self.sort
    }

    #[inline]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    #[inline]
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

/// Accepts level names in any case: `off`, `error`, `warn`, `info`, `debug`, `trace`.
fn deserialize_level<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse()
        .map_err(|_| serde::de::Error::custom(format!("unknown log level `{s}`")))
}
