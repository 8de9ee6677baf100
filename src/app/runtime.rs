use crate::app::command::Command;
use crate::app::key_bindings::KeyBindings;
use crate::app::state::AppState;
use crate::clipboard::Clipboard;
use crate::terminal::{Terminal, TerminalEvent};
use crate::tree::node::Node;
use crate::ui::layout::Layout;
use crate::ui::renderer;
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The event loop: owns the terminal, the state and the clipboard, and maps
/// key presses to commands until the user quits.
pub struct Runtime {
    state: AppState,
    terminal: Terminal,
    key_bindings: KeyBindings,
    clipboard: Option<Clipboard>,
}

impl Runtime {
    pub fn new(tree: Node, terminal: Terminal, clipboard: Option<Clipboard>) -> Self {
        let clipboard_available = clipboard.is_some();
        Self {
            state: AppState::new(tree, clipboard_available),
            terminal,
            key_bindings: KeyBindings::new(clipboard_available),
            clipboard,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;
        let run_result = self.event_loop();
        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn event_loop(&mut self) -> io::Result<()> {
        self.render()?;

        while !self.state.should_exit() {
            if !self.terminal.poll(POLL_INTERVAL)? {
                continue;
            }
            match self.terminal.read_event()? {
                TerminalEvent::Key(key) => {
                    if let Some(command) = self.key_bindings.resolve(key) {
                        self.apply(command);
                        self.render()?;
                    }
                }
                TerminalEvent::Resize(_) => self.render()?,
            }
        }
        Ok(())
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::MoveCursor(delta) => self.state.move_cursor(delta),
            Command::JumpTop => self.state.jump_top(),
            Command::JumpBottom => self.state.jump_bottom(),
            Command::ToggleExpand => self.state.toggle_expand(),
            Command::ExpandAll => self.state.expand_all(),
            Command::CollapseAll => self.state.collapse_all(),
            Command::CopyPath => {
                let path = self.state.path_text().to_string();
                self.copy_to_clipboard(path, "Path copied to clipboard");
            }
            Command::CopyValue => {
                if let Some(json) = self.state.selected_json() {
                    self.copy_to_clipboard(json, "Value copied to clipboard");
                }
            }
            Command::ToggleHelp => self.state.toggle_help(),
            Command::CloseFloating => self.state.close_floating(),
            Command::Quit => self.state.quit(),
        }
    }

    fn copy_to_clipboard(&mut self, text: String, success: &str) {
        let Some(clipboard) = self.clipboard.as_mut() else {
            return;
        };
        match clipboard.copy(&text) {
            Ok(()) => self.state.show_message(success),
            Err(err) => self.state.show_message(format!("Copy failed: {err}")),
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let size = self.terminal.size();
        let layout = Layout::compute(size);
        self.state.sync_viewport(layout.tree.inner_height());
        let frame = renderer::render(&self.state, &layout, size);
        self.terminal.render_frame(&frame)
    }
}
