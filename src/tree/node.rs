use crate::tree::path::{PathSegment, TreePath};

/// Closed set of JSON value kinds. Scalars carry their literal text so the
/// renderer never re-derives formatting from a dynamic representation.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Object,
    Array,
    String(String),
    Number(String),
    Bool(bool),
    Null,
}

impl NodeKind {
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }
}

/// One value in the document tree.
///
/// The shape of the tree is fixed after parse; `expanded` is the only field
/// that mutates during a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    /// Object field name selecting this node from its parent. Absent for
    /// array elements and the root.
    pub key: Option<String>,
    /// Array position selecting this node from its parent. Absent for
    /// object fields and the root.
    pub index: Option<usize>,
    pub children: Vec<Node>,
    /// Whether children are shown in the navigation pane. Never read for
    /// scalar kinds.
    pub expanded: bool,
}

impl Node {
    pub fn composite(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            key: None,
            index: None,
            children,
            expanded: true,
        }
    }

    pub fn scalar(kind: NodeKind) -> Self {
        Self {
            kind,
            key: None,
            index: None,
            children: Vec::new(),
            expanded: false,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn is_composite(&self) -> bool {
        self.kind.is_composite()
    }

    /// The label this node carries in the navigation pane and, equally, the
    /// textual form of the path segment selecting it. `None` for the root.
    pub fn path_label(&self) -> Option<String> {
        if let Some(key) = &self.key {
            return Some(key.clone());
        }
        self.index.map(|index| format!("[{index}]"))
    }

    /// Walks the path from this node down. Any unresolved segment yields
    /// `None`; the empty path yields the node itself.
    pub fn find(&self, path: &TreePath) -> Option<&Node> {
        let mut current = self;
        for segment in path.segments() {
            current = current.child(segment)?;
        }
        Some(current)
    }

    pub fn find_mut(&mut self, path: &TreePath) -> Option<&mut Node> {
        let mut current = self;
        for segment in path.segments() {
            current = current.child_mut(segment)?;
        }
        Some(current)
    }

    fn child(&self, segment: &PathSegment) -> Option<&Node> {
        match segment {
            PathSegment::Key(key) => self
                .children
                .iter()
                .find(|child| child.key.as_deref() == Some(key.as_str())),
            PathSegment::Index(index) => self
                .children
                .iter()
                .find(|child| child.index == Some(*index)),
        }
    }

    fn child_mut(&mut self, segment: &PathSegment) -> Option<&mut Node> {
        match segment {
            PathSegment::Key(key) => self
                .children
                .iter_mut()
                .find(|child| child.key.as_deref() == Some(key.as_str())),
            PathSegment::Index(index) => self
                .children
                .iter_mut()
                .find(|child| child.index == Some(*index)),
        }
    }

    /// Flips visibility of this node's children. No-op on scalars.
    pub fn toggle_expanded(&mut self) {
        if self.is_composite() {
            self.expanded = !self.expanded;
        }
    }

    pub fn expand_all(&mut self) {
        self.set_expanded_recursive(true);
    }

    pub fn collapse_all(&mut self) {
        self.set_expanded_recursive(false);
    }

    fn set_expanded_recursive(&mut self, expanded: bool) {
        if self.is_composite() {
            self.expanded = expanded;
        }
        for child in &mut self.children {
            child.set_expanded_recursive(expanded);
        }
    }
}
