use super::action::Action;
use crate::domain::models::Section;
use crate::theme::PaletteType;
use clap::ValueEnum;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    pub custom: Option<HashMap<String, String>>, // "ctrl+k" = "open_palette"
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "vim".to_string(),
            custom: None,
        }
    }
}

/// Normal-mode bindings. Palette-mode keys are fixed, see `app::input`.
#[derive(Debug)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();

        // --- Default Profile ---
        global.insert(key(KeyCode::Char('q')), Action::Quit);
        global.insert(ctrl('k'), Action::OpenPalette);
        global.insert(key(KeyCode::Char('/')), Action::OpenPalette);
        global.insert(key(KeyCode::Down), Action::ScrollDown(1));
        global.insert(key(KeyCode::Up), Action::ScrollUp(1));
        global.insert(key(KeyCode::PageDown), Action::ScrollDown(10));
        global.insert(key(KeyCode::PageUp), Action::ScrollUp(10));
        global.insert(key(KeyCode::Home), Action::ScrollTop);
        global.insert(key(KeyCode::End), Action::ScrollBottom);
        global.insert(key(KeyCode::Char('t')), Action::CycleTheme);
        global.insert(key(KeyCode::Esc), Action::DismissError);
        for (i, section) in Section::all().iter().enumerate() {
            if let Some(digit) = char::from_digit(i as u32 + 1, 10) {
                global.insert(key(KeyCode::Char(digit)), Action::JumpToSection(*section));
            }
        }

        // --- Vim Profile ---
        if config.profile == "vim" {
            global.insert(key(KeyCode::Char('j')), Action::ScrollDown(1));
            global.insert(key(KeyCode::Char('k')), Action::ScrollUp(1));
            global.insert(ctrl('d'), Action::ScrollDown(10));
            global.insert(ctrl('u'), Action::ScrollUp(10));
            global.insert(key(KeyCode::Char('g')), Action::ScrollTop);
            global.insert(key(KeyCode::Char('G')), Action::ScrollBottom);
            global.insert(
                KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
                Action::ScrollBottom,
            );
        }

        // --- Custom Overrides ---
        if let Some(custom) = &config.custom {
            for (spec, name) in custom {
                match (parse_key(spec), parse_action(name)) {
                    (Some(event), Some(action)) => {
                        global.insert(event, action);
                    }
                    _ => tracing::warn!(key = %spec, action = %name, "ignoring invalid key binding"),
                }
            }
        }

        Self { global }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.global.get(&event).cloned()
    }
}

/// Parses `"ctrl+k"`, `"alt+1"`, `"G"`, `"pagedown"` and friends.
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut parts: Vec<&str> = spec.split('+').collect();
    let last = parts.pop()?;

    for part in parts {
        match part.trim().to_lowercase().as_str() {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            _ => return None,
        }
    }

    let code = match last.trim().to_lowercase().as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = last.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

/// Maps a config action name onto an [`Action`].
pub fn parse_action(name: &str) -> Option<Action> {
    let action = match name.trim() {
        "quit" => Action::Quit,
        "open_palette" => Action::OpenPalette,
        "scroll_down" => Action::ScrollDown(1),
        "scroll_up" => Action::ScrollUp(1),
        "page_down" => Action::ScrollDown(10),
        "page_up" => Action::ScrollUp(10),
        "top" => Action::ScrollTop,
        "bottom" => Action::ScrollBottom,
        "cycle_theme" => Action::CycleTheme,
        "dismiss_error" => Action::DismissError,
        other => {
            if let Some(theme) = other.strip_prefix("theme_") {
                return PaletteType::from_str(theme, true)
                    .ok()
                    .map(Action::SwitchTheme);
            }
            let section = other.strip_prefix("goto_")?;
            let section = Section::all().iter().find(|s| s.as_str() == section)?;
            Action::JumpToSection(*section)
        }
    };
    Some(action)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
