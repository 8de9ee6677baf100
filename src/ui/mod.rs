pub mod frame;
pub mod layout;
pub mod renderer;
pub mod scroll;
pub mod span;
pub mod style;

pub use frame::{Frame, Line};
pub use layout::{Layout, PaneRect};
pub use scroll::ScrollState;
pub use span::Span;
pub use style::{Color, Style};
