use crate::tree::draw::{draw_lines, to_json_pretty};
use crate::tree::locate::locate;
use crate::tree::node::Node;
use crate::ui::scroll::ScrollState;

/// Spaces per nesting level in the content pane.
const CONTENT_INDENT: usize = 2;

/// Transient view toggles, owned here and threaded into the renderer rather
/// than living in process globals.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub help_visible: bool,
    pub message: Option<String>,
}

/// Everything the event loop mutates: the document tree, the rendered
/// navigation buffer, the cursor with its scroll window, and the derived
/// content/path text for the other two panes.
pub struct AppState {
    tree: Node,
    nav_lines: Vec<String>,
    cursor: usize,
    scroll: ScrollState,
    content: String,
    path_text: String,
    ui: UiState,
    clipboard_available: bool,
    should_exit: bool,
}

impl AppState {
    pub fn new(tree: Node, clipboard_available: bool) -> Self {
        let mut state = Self {
            nav_lines: draw_lines(&tree),
            tree,
            cursor: 0,
            scroll: ScrollState::new(None),
            content: String::new(),
            path_text: String::new(),
            ui: UiState::default(),
            clipboard_available,
            should_exit: false,
        };
        state.refresh_selection();
        state
    }

    pub fn nav_lines(&self) -> &[String] {
        &self.nav_lines
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn path_text(&self) -> &str {
        &self.path_text
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn clipboard_available(&self) -> bool {
        self.clipboard_available
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Fits the scroll window to the navigation pane's current height.
    /// Called before every paint; the terminal may have been resized.
    pub fn sync_viewport(&mut self, max_visible: usize) {
        self.scroll.max_visible = Some(max_visible);
        self.scroll.ensure_visible(self.cursor, self.nav_lines.len());
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let total = self.nav_lines.len();
        if total == 0 {
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, total as isize - 1) as usize;
        self.scroll.ensure_visible(self.cursor, total);
        self.refresh_selection();
    }

    pub fn jump_top(&mut self) {
        self.move_cursor(-(self.nav_lines.len() as isize));
    }

    pub fn jump_bottom(&mut self) {
        self.move_cursor(self.nav_lines.len() as isize);
    }

    pub fn toggle_expand(&mut self) {
        let path = locate(&self.nav_lines, self.cursor);
        if let Some(node) = self.tree.find_mut(&path) {
            node.toggle_expanded();
        }
        self.redraw();
    }

    pub fn expand_all(&mut self) {
        self.tree.expand_all();
        self.redraw();
    }

    pub fn collapse_all(&mut self) {
        self.tree.collapse_all();
        self.redraw();
    }

    /// Pretty JSON of the node under the cursor, if the path resolves.
    pub fn selected_json(&self) -> Option<String> {
        let path = locate(&self.nav_lines, self.cursor);
        self.tree
            .find(&path)
            .map(|node| to_json_pretty(node, CONTENT_INDENT, 0))
    }

    pub fn toggle_help(&mut self) {
        self.ui.help_visible = !self.ui.help_visible;
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.ui.message = Some(message.into());
    }

    pub fn close_floating(&mut self) {
        self.ui.help_visible = false;
        self.ui.message = None;
    }

    pub fn quit(&mut self) {
        self.should_exit = true;
    }

    fn redraw(&mut self) {
        self.nav_lines = draw_lines(&self.tree);
        ScrollState::clamp_active(&mut self.cursor, self.nav_lines.len());
        self.scroll.ensure_visible(self.cursor, self.nav_lines.len());
        self.refresh_selection();
    }

    /// Re-derives the path and content panes from the cursor position. A
    /// path that no longer resolves leaves the content pane untouched
    /// rather than blanking it.
    fn refresh_selection(&mut self) {
        let path = locate(&self.nav_lines, self.cursor);
        self.path_text = path.to_string();
        if let Some(node) = self.tree.find(&path) {
            self.content = to_json_pretty(node, CONTENT_INDENT, 0);
        }
    }
}
