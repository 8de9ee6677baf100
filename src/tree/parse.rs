use crate::tree::node::{Node, NodeKind};
use serde_json::Value;
use std::fmt;
use std::io::Read;

/// Failure to turn raw input into a document tree.
#[derive(Debug)]
pub enum ParseError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read input: {err}"),
            Self::Json(err) => write!(f, "invalid json: {err}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Decodes a JSON document into a tree. Object member order follows the
/// input text (serde_json's ordered map keeps insertion order), which the
/// navigation render depends on for stability.
pub fn from_bytes(bytes: &[u8]) -> Result<Node, ParseError> {
    let value: Value = serde_json::from_slice(bytes)?;
    Ok(node_from_value(None, None, &value))
}

pub fn from_str(input: &str) -> Result<Node, ParseError> {
    from_bytes(input.as_bytes())
}

pub fn from_reader(mut reader: impl Read) -> Result<Node, ParseError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    from_bytes(&buffer)
}

fn node_from_value(key: Option<String>, index: Option<usize>, value: &Value) -> Node {
    let mut node = match value {
        Value::Object(members) => Node::composite(
            NodeKind::Object,
            members
                .iter()
                .map(|(child_key, child)| node_from_value(Some(child_key.clone()), None, child))
                .collect(),
        ),
        Value::Array(items) => Node::composite(
            NodeKind::Array,
            items
                .iter()
                .enumerate()
                .map(|(position, child)| node_from_value(None, Some(position), child))
                .collect(),
        ),
        Value::String(text) => Node::scalar(NodeKind::String(text.clone())),
        Value::Number(number) => Node::scalar(NodeKind::Number(number.to_string())),
        Value::Bool(flag) => Node::scalar(NodeKind::Bool(*flag)),
        Value::Null => Node::scalar(NodeKind::Null),
    };
    node.key = key;
    node.index = index;
    node
}

#[cfg(test)]
mod tests {
    use super::{ParseError, from_bytes, from_str};
    use crate::tree::node::NodeKind;

    #[test]
    fn object_member_order_follows_the_input() {
        let tree = from_str(r#"{"zebra": 1, "apple": 2, "mango": 3}"#).expect("parse");
        let keys: Vec<&str> = tree
            .children
            .iter()
            .map(|child| child.key.as_deref().expect("key"))
            .collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn array_elements_carry_their_positions() {
        let tree = from_str(r#"["a", "b", "c"]"#).expect("parse");
        assert_eq!(tree.kind, NodeKind::Array);
        let indices: Vec<usize> = tree
            .children
            .iter()
            .map(|child| child.index.expect("index"))
            .collect();
        assert_eq!(indices, [0, 1, 2]);
        assert!(tree.children.iter().all(|child| child.key.is_none()));
    }

    #[test]
    fn scalars_keep_their_literal_text() {
        let tree = from_str(r#"{"n": 2.5, "s": "hi", "b": true, "z": null}"#).expect("parse");
        assert_eq!(tree.children[0].kind, NodeKind::Number("2.5".to_string()));
        assert_eq!(tree.children[1].kind, NodeKind::String("hi".to_string()));
        assert_eq!(tree.children[2].kind, NodeKind::Bool(true));
        assert_eq!(tree.children[3].kind, NodeKind::Null);
    }

    #[test]
    fn composites_start_expanded() {
        let tree = from_str(r#"{"a": {"b": [1]}}"#).expect("parse");
        assert!(tree.expanded);
        assert!(tree.children[0].expanded);
        assert!(tree.children[0].children[0].expanded);
    }

    #[test]
    fn empty_composites_have_no_children() {
        let tree = from_str(r#"{"o": {}, "a": []}"#).expect("parse");
        assert!(tree.children[0].children.is_empty());
        assert!(tree.children[1].children.is_empty());
    }

    #[test]
    fn malformed_input_is_a_json_error() {
        let err = from_bytes(b"{\"open\": ").expect_err("must fail");
        assert!(matches!(err, ParseError::Json(_)));
    }
}
