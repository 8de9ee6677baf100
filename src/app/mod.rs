pub mod command;
pub mod key_bindings;
pub mod runtime;
pub mod state;

pub use command::Command;
pub use key_bindings::{KeyBinding, KeyBindings};
pub use runtime::Runtime;
pub use state::{AppState, UiState};
