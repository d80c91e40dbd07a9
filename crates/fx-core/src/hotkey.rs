//! Hotkey strings such as `ctrl+alt+h`.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HotkeyError {
    #[error("hotkey `{0}` has no modifier")]
    MissingModifier(String),
    #[error("hotkey `{0}` has no key")]
    MissingKey(String),
    #[error("hotkey `{0}` names more than one key")]
    MultipleKeys(String),
    #[error("unrecognised hotkey token `{token}` in `{hotkey}`")]
    UnknownToken { hotkey: String, token: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.ctrl || self.alt || self.shift || self.meta
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Stored uppercase.
    Char(char),
    /// F1..=F24
    Function(u8),
    Space,
    Enter,
    Tab,
    Escape,
}

impl Key {
    fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Key::Char(c.to_ascii_uppercase()));
        }
        match token {
            "space" => Some(Key::Space),
            "enter" | "return" => Some(Key::Enter),
            "tab" => Some(Key::Tab),
            "esc" | "escape" => Some(Key::Escape),
            _ => {
                let n: u8 = token.strip_prefix('f')?.parse().ok()?;
                (1..=24).contains(&n).then_some(Key::Function(n))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl Hotkey {
    pub fn parse(s: &str) -> Result<Self, HotkeyError> {
        let mut modifiers = Modifiers::default();
        let mut key = None;
        for token in s.split('+').map(str::trim).filter(|t| !t.is_empty()) {
            let token = token.to_ascii_lowercase();
            match token.as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "win" | "meta" | "super" => modifiers.meta = true,
                other => {
                    let parsed = Key::from_token(other).ok_or_else(|| HotkeyError::UnknownToken {
                        hotkey: s.to_string(),
                        token: other.to_string(),
                    })?;
                    if key.replace(parsed).is_some() {
                        return Err(HotkeyError::MultipleKeys(s.to_string()));
                    }
                }
            }
        }
        let key = key.ok_or_else(|| HotkeyError::MissingKey(s.to_string()))?;
        if !modifiers.any() {
            return Err(HotkeyError::MissingModifier(s.to_string()));
        }
        Ok(Self { modifiers, key })
    }

    #[inline]
    pub fn matches(&self, modifiers: Modifiers, key: Key) -> bool {
        self.modifiers == modifiers && self.key == key
    }
}

impl FromStr for Hotkey {
    type Err = HotkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.modifiers;
        for (on, name) in [
            (m.ctrl, "ctrl+"),
            (m.alt, "alt+"),
            (m.shift, "shift+"),
            (m.meta, "win+"),
        ] {
            if on {
                f.write_str(name)?;
            }
        }
        match self.key {
            Key::Char(c) => write!(f, "{}", c.to_ascii_lowercase()),
            Key::Function(n) => write!(f, "f{n}"),
            Key::Space => f.write_str("space"),
            Key::Enter => f.write_str("enter"),
            Key::Tab => f.write_str("tab"),
            Key::Escape => f.write_str("esc"),
        }
    }
}
