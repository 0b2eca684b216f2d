//! Input configuration options for ffm
//!
//! This module defines the key bindings which are read from the `[keys]` table
//! of the ffm.toml configuration file.

use serde::Deserialize;

/// Key lists for every input event
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    go_up: Vec<String>,
    go_down: Vec<String>,
    go_parent: Vec<String>,
    go_into_dir: Vec<String>,
    sort_by_name: Vec<String>,
    sort_by_size: Vec<String>,
    quit: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    go_up,
    go_down,
    go_parent,
    go_into_dir,
    sort_by_name,
    sort_by_size,
    quit,
);

/// Default input configuration options
impl Default for Keys {
    fn default() -> Self {
        Keys {
            go_up: vec!["k".into(), "Up".into()],
            go_down: vec!["j".into(), "Down".into()],
            go_parent: vec!["h".into(), "Left".into(), "Backspace".into()],
            go_into_dir: vec!["l".into(), "Right".into(), "Enter".into()],
            sort_by_name: vec!["a".into()],
            sort_by_size: vec!["s".into()],
            quit: vec!["q".into()],
        }
    }
}
