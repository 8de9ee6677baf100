pub mod draw;
pub mod locate;
pub mod node;
pub mod parse;
pub mod path;

pub use draw::{draw_lines, to_json_pretty};
pub use locate::locate;
pub use node::{Node, NodeKind};
pub use parse::{ParseError, from_bytes, from_reader, from_str};
pub use path::{PathSegment, TreePath};
