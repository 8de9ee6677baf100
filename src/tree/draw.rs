use crate::tree::node::{Node, NodeKind};

/// Connector in front of a node that has later siblings.
pub const SIGN_BRANCH: &str = "├─ ";
/// Connector in front of the last sibling.
pub const SIGN_END: &str = "└─ ";
/// Guide column under an ancestor that has later siblings.
pub const SIGN_CONTINUE: &str = "│ ";
/// Guide column under an ancestor that was the last sibling.
pub const SIGN_BLANK: &str = "  ";
/// Suffix on a collapsed composite with hidden children.
pub const COLLAPSED_MARKER: &str = " (+)";
/// Label of the synthetic wrapper line above the document's own nodes.
pub const ROOT_LABEL: &str = "root";

/// Serializes the tree for the navigation pane: one line per visible node,
/// document order, starting with the synthetic root line. Labels are bare
/// keys or `[i]` index forms; the glyph widths keep post-strip indentation
/// strictly increasing along every ancestor chain, which position
/// resolution relies on.
pub fn draw_lines(root: &Node) -> Vec<String> {
    let mut line = ROOT_LABEL.to_string();
    if hides_children(root) {
        line.push_str(COLLAPSED_MARKER);
    }
    let mut lines = vec![line];

    if root.is_composite() && root.expanded {
        draw_children(root, "", &mut lines);
    }
    lines
}

fn draw_children(parent: &Node, prefix: &str, lines: &mut Vec<String>) {
    let count = parent.children.len();
    for (position, child) in parent.children.iter().enumerate() {
        draw_node(child, prefix, position + 1 == count, lines);
    }
}

fn draw_node(node: &Node, prefix: &str, last: bool, lines: &mut Vec<String>) {
    let connector = if last { SIGN_END } else { SIGN_BRANCH };
    let label = node.path_label().unwrap_or_default();
    let mut line = format!("{prefix}{connector}{label}");
    if hides_children(node) {
        line.push_str(COLLAPSED_MARKER);
    }
    lines.push(line);

    if node.is_composite() && node.expanded {
        let column = if last { SIGN_BLANK } else { SIGN_CONTINUE };
        let child_prefix = format!("{prefix}{column}");
        draw_children(node, &child_prefix, lines);
    }
}

fn hides_children(node: &Node) -> bool {
    node.is_composite() && !node.children.is_empty() && !node.expanded
}

/// Pretty-prints the full subtree as canonical JSON, `indent_unit` spaces
/// per nesting level starting at `depth`. Collapse state is ignored; the
/// content pane always shows everything.
pub fn to_json_pretty(node: &Node, indent_unit: usize, depth: usize) -> String {
    let mut out = String::new();
    write_value(node, indent_unit, depth, &mut out);
    out
}

fn write_value(node: &Node, indent_unit: usize, depth: usize, out: &mut String) {
    match &node.kind {
        NodeKind::Object => {
            out.push('{');
            if node.children.is_empty() {
                out.push('}');
                return;
            }
            out.push('\n');
            for (position, child) in node.children.iter().enumerate() {
                push_indent(out, indent_unit, depth + 1);
                out.push('"');
                push_escaped(out, child.key.as_deref().unwrap_or_default());
                out.push_str("\": ");
                write_value(child, indent_unit, depth + 1, out);
                if position + 1 < node.children.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            push_indent(out, indent_unit, depth);
            out.push('}');
        }
        NodeKind::Array => {
            out.push('[');
            if node.children.is_empty() {
                out.push(']');
                return;
            }
            out.push('\n');
            for (position, child) in node.children.iter().enumerate() {
                push_indent(out, indent_unit, depth + 1);
                write_value(child, indent_unit, depth + 1, out);
                if position + 1 < node.children.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            push_indent(out, indent_unit, depth);
            out.push(']');
        }
        NodeKind::String(text) => {
            out.push('"');
            push_escaped(out, text);
            out.push('"');
        }
        NodeKind::Number(literal) => out.push_str(literal),
        NodeKind::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
        NodeKind::Null => out.push_str("null"),
    }
}

fn push_indent(out: &mut String, indent_unit: usize, depth: usize) {
    for _ in 0..indent_unit * depth {
        out.push(' ');
    }
}

fn push_escaped(out: &mut String, input: &str) {
    for ch in input.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if c < '\u{20}' => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => out.push(c),
        }
    }
}
