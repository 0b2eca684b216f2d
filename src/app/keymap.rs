//! Key mapping for ffm.
//!
//! Translates crossterm key events into [InputEvent]s using the bindings from
//! the `[keys]` table of the configuration.

use crate::app::display::InputEvent;
use crate::config::Keys;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Key + modifiers as used in keybind/keymap
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub(crate) struct Key {
    pub(crate) code: KeyCode,
    pub(crate) modifiers: KeyModifiers,
}

/// Stores the mapping from Key to input event, built from the config
pub struct Keymap {
    map: HashMap<Key, InputEvent>,
}

impl Keymap {
    /// Builds the keymap from the configured key lists.
    /// Later bindings win when the same key is listed twice.
    #[rustfmt::skip]
    pub fn from_keys(keys: &Keys) -> Self {
        let mut map = HashMap::new();

        bind(keys.go_up(),         InputEvent::MoveUp,         &mut map);
        bind(keys.go_down(),       InputEvent::MoveDown,       &mut map);
        bind(keys.go_parent(),     InputEvent::NavigateParent, &mut map);
        bind(keys.go_into_dir(),   InputEvent::Enter,          &mut map);
        bind(keys.sort_by_name(),  InputEvent::SortByName,     &mut map);
        bind(keys.sort_by_size(),  InputEvent::SortBySize,     &mut map);
        bind(keys.quit(),          InputEvent::Quit,           &mut map);

        Keymap { map }
    }

    /// Looks up the event for a given key event.
    /// Unbound keys map to [InputEvent::Unrecognized].
    pub fn lookup(&self, key: KeyEvent) -> InputEvent {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(event) = self.map.get(&k).copied() {
            return event;
        }

        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            if let Some(event) = self.map.get(&k2).copied() {
                return event;
            }
        }
        InputEvent::Unrecognized
    }
}

/// Parses a binding such as `"k"`, `"Up"`, `"ctrl+x"` or `"<c-x>"`.
pub(crate) fn parse_key(s: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    let is_bracketed = s.starts_with('<') && s.ends_with('>');
    let mut input = s.trim_start_matches('<').trim_end_matches('>').to_string();

    if is_bracketed && input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();

        for &prefix in parts.iter().take(parts.len().saturating_sub(1)) {
            match prefix.to_lowercase().as_str() {
                "c" | "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "a" | "m" | "alt" => modifiers |= KeyModifiers::ALT,
                "s" | "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        input = parts.last()?.to_string();
    }

    // a lone "+" or " " is a key on its own
    if input == "+" || input == " " {
        return Some(Key {
            code: KeyCode::Char(input.chars().next()?),
            modifiers,
        });
    }

    for part in input.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,

            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "enter" | "return" => code = Some(KeyCode::Enter),
            "esc" => code = Some(KeyCode::Esc),
            "backspace" | "back" => code = Some(KeyCode::Backspace),
            "tab" => code = Some(KeyCode::Tab),
            "home" => code = Some(KeyCode::Home),
            "end" => code = Some(KeyCode::End),
            "space" | "spc" => code = Some(KeyCode::Char(' ')),

            _ => {
                if part.chars().count() == 1 {
                    let mut c = part.chars().next()?;
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        c = c.to_ascii_uppercase();
                    }
                    code = Some(KeyCode::Char(c));
                } else if p_low.starts_with('f')
                    && p_low.len() > 1
                    && p_low[1..].chars().all(|c| c.is_ascii_digit())
                {
                    let n = p_low[1..].parse().ok()?;
                    code = Some(KeyCode::F(n));
                } else if part.is_empty() {
                    continue;
                } else {
                    return None;
                }
            }
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

fn bind(key_list: &[String], event: InputEvent, map: &mut HashMap<Key, InputEvent>) {
    for k in key_list {
        match parse_key(k) {
            Some(key) => {
                map.insert(key, event);
            }
            None => log::warn!("ignoring unparsable key binding {k:?} for {event:?}"),
        }
    }
}
