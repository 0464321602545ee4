use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::samples::SampleEmail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Form
    NextField,
    PrevField,
    ClearField,
    LoadSample(SampleEmail),
    CycleTemplate,

    // Classification
    Classify,
    ClearResult,
    Export,

    // Report pane
    ScrollUp,
    ScrollDown,

    Dismiss,
    Quit,

    // Help
    Help, // Toggle help view
}

pub struct KeyBindings {
    bindings: HashMap<KeyEvent, Action>,
}

/// A displayable keybinding entry
#[derive(Debug, Clone)]
pub struct KeybindingEntry {
    pub key: String,
    pub description: String,
    pub category: &'static str,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            bindings: Self::form_bindings(),
        }
    }

    pub fn get(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings.get(event).copied()
    }

    /// Get all keybindings as displayable entries grouped by category
    pub fn all_bindings(&self) -> Vec<KeybindingEntry> {
        let mut entries: Vec<_> = self
            .bindings
            .iter()
            .map(|(event, action)| KeybindingEntry {
                key: format_key_event(event),
                description: action_description(action),
                category: action_category(action),
            })
            .collect();

        entries.sort_by(|a, b| {
            category_order(a.category)
                .cmp(&category_order(b.category))
                .then_with(|| a.description.cmp(&b.description))
                .then_with(|| a.key.cmp(&b.key))
        });
        entries
    }

    // Every field is a text field, so plain characters are never bound
    fn form_bindings() -> HashMap<KeyEvent, Action> {
        let mut map = HashMap::new();

        // Form
        map.insert(key_code(KeyCode::Tab), Action::NextField);
        map.insert(shift_key_code(KeyCode::BackTab), Action::PrevField);
        map.insert(ctrl_key('u'), Action::ClearField);
        map.insert(key_code(KeyCode::F(2)), Action::LoadSample(SampleEmail::Legitimate));
        map.insert(key_code(KeyCode::F(3)), Action::LoadSample(SampleEmail::Suspicious));
        map.insert(key_code(KeyCode::F(4)), Action::LoadSample(SampleEmail::Marketing));
        map.insert(ctrl_key('t'), Action::CycleTemplate);

        // Classification
        map.insert(ctrl_key('r'), Action::Classify);
        map.insert(key_code(KeyCode::F(5)), Action::Classify);
        map.insert(ctrl_key('l'), Action::ClearResult);
        map.insert(ctrl_key('s'), Action::Export);

        // Report pane
        map.insert(key_code(KeyCode::PageUp), Action::ScrollUp);
        map.insert(key_code(KeyCode::PageDown), Action::ScrollDown);

        map.insert(key_code(KeyCode::Esc), Action::Dismiss);
        map.insert(ctrl_key('q'), Action::Quit);
        map.insert(ctrl_key('c'), Action::Quit);

        // Help
        map.insert(key_code(KeyCode::F(1)), Action::Help);

        map
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn shift_key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::SHIFT)
}

/// Format a KeyEvent for display
fn format_key_event(event: &KeyEvent) -> String {
    let mut parts = Vec::new();

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl+");
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt+");
    }

    let key_str = match event.code {
        KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => format!("{:?}", event.code),
    };

    format!("{}{}", parts.join(""), key_str)
}

/// Get a human-readable description for an action
fn action_description(action: &Action) -> String {
    match action {
        Action::NextField => "Next field".to_string(),
        Action::PrevField => "Previous field".to_string(),
        Action::ClearField => "Clear focused field".to_string(),
        Action::LoadSample(sample) => format!("Load {} sample", sample.label().to_lowercase()),
        Action::CycleTemplate => "Switch classification template".to_string(),
        Action::Classify => "Classify email".to_string(),
        Action::ClearResult => "Clear report".to_string(),
        Action::Export => "Export report to file".to_string(),
        Action::ScrollUp => "Scroll report up".to_string(),
        Action::ScrollDown => "Scroll report down".to_string(),
        Action::Dismiss => "Dismiss error".to_string(),
        Action::Quit => "Quit".to_string(),
        Action::Help => "Toggle help".to_string(),
    }
}

/// Get the category for an action
fn action_category(action: &Action) -> &'static str {
    match action {
        Action::NextField
        | Action::PrevField
        | Action::ClearField
        | Action::LoadSample(_)
        | Action::CycleTemplate => "Form",

        Action::Classify | Action::ClearResult | Action::Export => "Report",

        Action::ScrollUp | Action::ScrollDown => "Navigation",

        Action::Dismiss | Action::Quit | Action::Help => "General",
    }
}

/// Get sort order for categories
fn category_order(category: &str) -> u8 {
    match category {
        "Report" => 0,
        "Form" => 1,
        "Navigation" => 2,
        "General" => 3,
        _ => 99,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_bindings() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.get(&ctrl_key('r')), Some(Action::Classify));
        assert_eq!(bindings.get(&ctrl_key('l')), Some(Action::ClearResult));
        assert_eq!(bindings.get(&ctrl_key('s')), Some(Action::Export));
        assert_eq!(
            bindings.get(&key_code(KeyCode::F(3))),
            Some(Action::LoadSample(SampleEmail::Suspicious))
        );
    }

    #[test]
    fn test_plain_characters_are_unbound() {
        let bindings = KeyBindings::new();
        for c in ['a', 'q', 'r', ' ', '.'] {
            assert_eq!(
                bindings.get(&KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
                None
            );
        }
    }

    #[test]
    fn test_help_entries_start_with_report_actions() {
        let entries = KeyBindings::new().all_bindings();
        assert_eq!(entries.first().map(|e| e.category), Some("Report"));
        assert!(entries.iter().any(|e| e.key == "Ctrl+R"));
    }
}
