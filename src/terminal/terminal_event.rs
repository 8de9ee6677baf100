use crate::terminal::input_event::KeyEvent;
use crate::terminal::terminal::Size;

#[derive(Debug, Clone, Copy)]
pub enum TerminalEvent {
    Key(KeyEvent),
    Resize(Size),
}
