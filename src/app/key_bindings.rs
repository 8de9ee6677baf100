use crate::app::command::Command;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

pub struct KeyBindings {
    bindings: HashMap<KeyBinding, Command>,
}

impl KeyBindings {
    /// Default table. Copy commands are only installed when the clipboard
    /// backend exists, so the keys stay inert otherwise.
    pub fn new(clipboard_available: bool) -> Self {
        let mut table = Self {
            bindings: HashMap::new(),
        };
        table.install_defaults(clipboard_available);
        table
    }

    pub fn bind(&mut self, key: KeyBinding, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn resolve(&self, event: KeyEvent) -> Option<Command> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }

    /// Binds a character with and without the shift modifier; terminals
    /// disagree on whether uppercase and symbol keys report SHIFT.
    fn bind_char(&mut self, ch: char, command: Command) {
        self.bind(KeyBinding::key(KeyCode::Char(ch)), command);
        self.bind(
            KeyBinding::new(KeyCode::Char(ch), KeyModifiers::SHIFT),
            command,
        );
    }

    fn install_defaults(&mut self, clipboard_available: bool) {
        self.bind_char('j', Command::MoveCursor(1));
        self.bind_char('k', Command::MoveCursor(-1));
        self.bind(KeyBinding::key(KeyCode::Down), Command::MoveCursor(1));
        self.bind(KeyBinding::key(KeyCode::Up), Command::MoveCursor(-1));

        self.bind_char('J', Command::MoveCursor(15));
        self.bind_char('K', Command::MoveCursor(-15));
        self.bind(KeyBinding::key(KeyCode::PageDown), Command::MoveCursor(15));
        self.bind(KeyBinding::key(KeyCode::PageUp), Command::MoveCursor(-15));

        self.bind_char('g', Command::JumpTop);
        self.bind_char('G', Command::JumpBottom);

        self.bind_char('e', Command::ToggleExpand);
        self.bind_char('o', Command::ToggleExpand);
        self.bind_char('E', Command::ExpandAll);
        self.bind_char('O', Command::ExpandAll);
        self.bind_char('C', Command::CollapseAll);

        if clipboard_available {
            self.bind_char('y', Command::CopyPath);
            self.bind_char('Y', Command::CopyValue);
        }

        self.bind_char('h', Command::ToggleHelp);
        self.bind_char('?', Command::ToggleHelp);
        self.bind(KeyBinding::key(KeyCode::Enter), Command::CloseFloating);

        self.bind_char('q', Command::Quit);
        self.bind(
            KeyBinding::ctrl(KeyCode::Char('c')),
            Command::Quit,
        );
    }
}
