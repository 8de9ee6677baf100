pub mod app;
pub mod cli;
pub mod clipboard;
pub mod terminal;
pub mod tree;
pub mod ui;

pub use app::command::Command;
pub use app::runtime::Runtime;
pub use app::state::AppState;

pub use tree::draw::{draw_lines, to_json_pretty};
pub use tree::locate::locate;
pub use tree::node::{Node, NodeKind};
pub use tree::parse::ParseError;
pub use tree::path::{PathSegment, TreePath};

pub use terminal::Terminal;
