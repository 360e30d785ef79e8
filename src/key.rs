//! Key bindings.
//!
//! A [`Binding`] groups the key presses that trigger one action together
//! with the help text describing it. Bindings match incoming
//! [`KeyMsg`] values, modifiers included, so `ctrl+c` and `c` stay distinct.
//!
//! ```rust
//! use bubbletea_rs::KeyMsg;
//! use catalog_view::key::{Binding, KeyPress};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let quit = Binding::new(vec![
//!     KeyPress::from(KeyCode::Char('q')),
//!     KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)),
//! ])
//! .with_help("q/ctrl+c", "quit");
//!
//! let ctrl_c = KeyMsg { key: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
//! let plain_c = KeyMsg { key: KeyCode::Char('c'), modifiers: KeyModifiers::NONE };
//! assert!(quit.matches(&ctrl_c));
//! assert!(!quit.matches(&plain_c));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Whether `msg` is this key press.
    ///
    /// Shift is ignored for character keys since the terminal already
    /// reports it through the character's case.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        let mut modifiers = msg.modifiers;
        if matches!(msg.key, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        modifiers == self.modifiers
    }
}

/// Help text shown for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    pub key: String,
    pub desc: String,
}

/// Key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given keys.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    pub fn help(&self) -> &Help {
        &self.help
    }

    pub fn enabled(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|press| press.matches(msg))
    }
}

/// A set of bindings that can describe itself for a help line.
pub trait KeyMap {
    /// Bindings worth listing in the one-line help.
    fn short_help(&self) -> Vec<&Binding>;
}

/// Renders enabled bindings as `key desc` pairs joined by `separator`.
pub fn help_line(bindings: &[&Binding], separator: &str) -> String {
    bindings
        .iter()
        .filter(|b| b.enabled() && !b.help().key.is_empty())
        .map(|b| format!("{} {}", b.help().key, b.help().desc))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(key: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg { key, modifiers }
    }

    #[test]
    fn test_binding_matches_any_key() {
        let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')]).with_help("→/l", "next");
        assert!(next.matches(&msg(KeyCode::Right, KeyModifiers::NONE)));
        assert!(next.matches(&msg(KeyCode::Char('l'), KeyModifiers::NONE)));
        assert!(!next.matches(&msg(KeyCode::Left, KeyModifiers::NONE)));
    }

    #[test]
    fn test_modifiers_must_match() {
        let quit = Binding::new(vec![KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL))]);
        assert!(quit.matches(&msg(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!quit.matches(&msg(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_shift_ignored_for_characters() {
        let last = Binding::new(vec![KeyCode::Char('G')]);
        assert!(last.matches(&msg(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(last.matches(&msg(KeyCode::Char('G'), KeyModifiers::NONE)));
        assert!(!last.matches(&msg(KeyCode::Char('g'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]);
        b.set_enabled(false);
        assert!(!b.matches(&msg(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!Binding::new(Vec::<KeyCode>::new()).enabled());
    }

    #[test]
    fn test_help_line() {
        let a = Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search");
        let b = Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit");
        let hidden = Binding::new(vec![KeyCode::Char('x')]);
        assert_eq!(help_line(&[&a, &hidden, &b], " • "), "/ search • q quit");
    }
}
