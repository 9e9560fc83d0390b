use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub key: Key,
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
}

#[derive(Debug, Error)]
pub enum KeyParseError {
    #[error("empty key spec")]
    Empty,
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

impl KeySpec {
    /// Parses specs like `j`, `C-c`, `A-x`, `tab`, `S-tab`, `space`.
    pub fn parse(s: &str) -> std::result::Result<Self, KeyParseError> {
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }

        let mut modifiers = Modifiers::default();
        let mut shift = false;
        let mut remaining = s;

        loop {
            if let Some(rest) = remaining.strip_prefix("C-") {
                modifiers.ctrl = true;
                remaining = rest;
            } else if let Some(rest) = remaining.strip_prefix("A-") {
                modifiers.alt = true;
                remaining = rest;
            } else if let Some(rest) = remaining.strip_prefix("S-") {
                shift = true;
                remaining = rest;
            } else {
                break;
            }
        }

        let mut chars = remaining.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) if shift => {
                Key::Char(shift_char(c).ok_or_else(|| KeyParseError::UnknownKey(s.to_string()))?)
            }
            (Some(c), None) => Key::Char(c),
            _ => match remaining.to_lowercase().as_str() {
                "tab" if shift => Key::BackTab,
                "ret" | "enter" => Key::Enter,
                "esc" | "escape" => Key::Esc,
                "tab" => Key::Tab,
                "backtab" | "btab" => Key::BackTab,
                "backspace" | "bs" => Key::Backspace,
                "del" | "delete" => Key::Delete,
                "up" => Key::Up,
                "down" => Key::Down,
                "left" => Key::Left,
                "right" => Key::Right,
                "home" => Key::Home,
                "end" => Key::End,
                "space" => Key::Char(' '),
                "" => return Err(KeyParseError::Empty),
                _ => return Err(KeyParseError::UnknownKey(remaining.to_string())),
            },
        };

        Ok(KeySpec { key, modifiers })
    }

    #[must_use]
    pub fn from_event(event: &KeyEvent) -> Self {
        let key = match event.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Unknown,
        };

        // Shift is already folded into the character (J vs j) and into BackTab
        let modifiers = Modifiers {
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
        };

        KeySpec { key, modifiers }
    }

    #[must_use]
    pub fn to_key_string(&self) -> String {
        let mut s = String::new();
        if self.modifiers.ctrl {
            s.push_str("C-");
        }
        if self.modifiers.alt {
            s.push_str("A-");
        }
        match &self.key {
            Key::Char(' ') => s.push_str("space"),
            Key::Char(c) => s.push(*c),
            Key::Enter => s.push_str("ret"),
            Key::Esc => s.push_str("esc"),
            Key::Tab => s.push_str("tab"),
            Key::BackTab => s.push_str("S-tab"),
            Key::Backspace => s.push_str("backspace"),
            Key::Delete => s.push_str("del"),
            Key::Up => s.push_str("up"),
            Key::Down => s.push_str("down"),
            Key::Left => s.push_str("left"),
            Key::Right => s.push_str("right"),
            Key::Home => s.push_str("home"),
            Key::End => s.push_str("end"),
            Key::Unknown => s.push_str("unknown"),
        }
        s
    }
}

/// The character a US layout produces for `c` with shift held, which is
/// what the terminal reports.
fn shift_char(c: char) -> Option<char> {
    match c {
        'a'..='z' => Some(c.to_ascii_uppercase()),
        'A'..='Z' => Some(c),
        '1' => Some('!'),
        '2' => Some('@'),
        '3' => Some('#'),
        '4' => Some('$'),
        '5' => Some('%'),
        '6' => Some('^'),
        '7' => Some('&'),
        '8' => Some('*'),
        '9' => Some('('),
        '0' => Some(')'),
        '-' => Some('_'),
        '=' => Some('+'),
        '[' => Some('{'),
        ']' => Some('}'),
        '\\' => Some('|'),
        ';' => Some(':'),
        '\'' => Some('"'),
        ',' => Some('<'),
        '.' => Some('>'),
        '/' => Some('?'),
        '`' => Some('~'),
        _ => None,
    }
}

/// Actions available while a project list has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Quit,
    MoveUp,
    MoveDown,
    SwitchList,
    MoveProject,
    FocusForm,
    ToggleHelp,
}

impl KeyAction {
    pub const ALL: [KeyAction; 7] = [
        KeyAction::MoveDown,
        KeyAction::MoveUp,
        KeyAction::SwitchList,
        KeyAction::MoveProject,
        KeyAction::FocusForm,
        KeyAction::ToggleHelp,
        KeyAction::Quit,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            KeyAction::Quit => "quit",
            KeyAction::MoveUp => "move_up",
            KeyAction::MoveDown => "move_down",
            KeyAction::SwitchList => "switch_list",
            KeyAction::MoveProject => "move_project",
            KeyAction::FocusForm => "focus_form",
            KeyAction::ToggleHelp => "toggle_help",
        }
    }

    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            KeyAction::Quit => "Quit",
            KeyAction::MoveUp => "Select previous project",
            KeyAction::MoveDown => "Select next project",
            KeyAction::SwitchList => "Switch between active and finished",
            KeyAction::MoveProject => "Move selected project to the other list",
            KeyAction::FocusForm => "Add a new project",
            KeyAction::ToggleHelp => "Toggle this help",
        }
    }

    fn default_keys(self) -> &'static [&'static str] {
        match self {
            KeyAction::Quit => &["q", "C-c"],
            KeyAction::MoveUp => &["k", "up"],
            KeyAction::MoveDown => &["j", "down"],
            KeyAction::SwitchList => &["tab", "S-tab", "h", "l", "left", "right"],
            KeyAction::MoveProject => &["m", "space"],
            KeyAction::FocusForm => &["n", "i"],
            KeyAction::ToggleHelp => &["?"],
        }
    }
}

pub struct Keymap {
    bindings: HashMap<KeySpec, KeyAction>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut keymap = Self {
            bindings: HashMap::new(),
        };
        for action in KeyAction::ALL {
            for key in action.default_keys() {
                if let Ok(spec) = KeySpec::parse(key) {
                    keymap.bindings.insert(spec, action);
                }
            }
        }
        keymap
    }
}

impl Keymap {
    /// Builds the default keymap, then replaces the keys of every action
    /// named in `overrides` (action name to key specs).
    pub fn new(overrides: &HashMap<String, Vec<String>>) -> Result<Self> {
        let mut keymap = Self::default();

        for (name, keys) in overrides {
            let action = KeyAction::parse(name).ok_or_else(|| Error::UnknownAction(name.clone()))?;
            let specs = keys
                .iter()
                .map(|k| KeySpec::parse(k))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|source| Error::KeySpec {
                    action: name.clone(),
                    source,
                })?;

            keymap.bindings.retain(|_, a| *a != action);
            for spec in specs {
                keymap.bindings.insert(spec, action);
            }
        }

        Ok(keymap)
    }

    #[must_use]
    pub fn lookup(&self, event: &KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&KeySpec::from_event(event)).copied()
    }

    /// Key strings bound to `action`, sorted for stable display.
    #[must_use]
    pub fn keys_for(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(spec, _)| spec.to_key_string())
            .collect();
        keys.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        keys
    }
}
