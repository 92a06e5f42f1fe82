//! Keyboard input model for the palette.

use crate::config::ActivationChord;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Char(char),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

/// One key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStroke {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyStroke {
    /// Key press without modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

impl ActivationChord {
    /// Whether `stroke` is the palette toggle chord.
    pub fn matches(&self, stroke: &KeyStroke) -> bool {
        let Key::Char(ch) = stroke.key else {
            return false;
        };
        let modifier_held =
            (self.ctrl && stroke.modifiers.ctrl) || (self.meta && stroke.modifiers.meta);
        modifier_held && ch.eq_ignore_ascii_case(&self.key)
    }
}

/// Key name could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyParseError(pub String);

impl Display for KeyParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized key `{}`", self.0)
    }
}

impl Error for KeyParseError {}

/// Parses DOM-style key names with optional `+`-joined modifiers, e.g.
/// `ArrowDown`, `down`, `Escape`, `ctrl+k`, `cmd+K`.
impl FromStr for KeyStroke {
    type Err = KeyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let mut parts = trimmed.split('+').map(str::trim).collect::<Vec<_>>();
        let Some(name) = parts.pop().filter(|name| !name.is_empty()) else {
            return Err(KeyParseError(trimmed.to_string()));
        };

        let mut modifiers = Modifiers::default();
        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "cmd" | "meta" | "super" => modifiers.meta = true,
                "shift" => modifiers.shift = true,
                "alt" | "option" => modifiers.alt = true,
                _ => return Err(KeyParseError(trimmed.to_string())),
            }
        }

        let key = match name.to_ascii_lowercase().as_str() {
            "arrowup" | "up" => Key::ArrowUp,
            "arrowdown" | "down" => Key::ArrowDown,
            "enter" | "return" => Key::Enter,
            "escape" | "esc" => Key::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::Char(ch),
                    _ => return Err(KeyParseError(trimmed.to_string())),
                }
            }
        };
        Ok(Self { key, modifiers })
    }
}
