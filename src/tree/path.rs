use std::fmt;

/// One step in the walk from the document root to a node: an object key or
/// an array position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl PathSegment {
    /// Reads a navigation label back into a segment. Array elements render
    /// as `[n]`; anything else is an object key, including keys that merely
    /// resemble a bracket form without a numeric body.
    pub fn from_label(label: &str) -> Self {
        if let Some(inner) = label
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            && let Ok(index) = inner.parse::<usize>()
        {
            return Self::Index(index);
        }
        Self::Key(label.to_string())
    }

    pub fn label(&self) -> String {
        match self {
            Self::Key(key) => key.clone(),
            Self::Index(index) => format!("[{index}]"),
        }
    }
}

/// Ordered segments identifying a node by walking from the root. The root
/// itself is the empty path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TreePath {
    segments: Vec<PathSegment>,
}

impl TreePath {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        self.segments.as_slice()
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            labels
                .into_iter()
                .map(|label| PathSegment::from_label(label.as_ref()))
                .collect(),
        )
    }
}

impl fmt::Display for TreePath {
    /// Canonical accessor notation: keys as quoted bracket lookups with `"`
    /// and `\` escaped, indices in bare bracket form, no separator between
    /// segments.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                PathSegment::Key(key) => {
                    f.write_str("[\"")?;
                    f.write_str(key.replace('\\', "\\\\").replace('"', "\\\"").as_str())?;
                    f.write_str("\"]")?;
                }
                PathSegment::Index(index) => {
                    write!(f, "[{index}]")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{PathSegment, TreePath};

    #[test]
    fn root_path_formats_empty() {
        assert_eq!(TreePath::empty().to_string(), "");
    }

    #[test]
    fn keys_are_quoted_and_indices_pass_through() {
        let path = TreePath::new(vec![
            PathSegment::Key("a".to_string()),
            PathSegment::Key("b c".to_string()),
            PathSegment::Index(1),
        ]);
        assert_eq!(path.to_string(), "[\"a\"][\"b c\"][1]");
    }

    #[test]
    fn quotes_and_backslashes_in_keys_are_escaped() {
        let path = TreePath::new(vec![PathSegment::Key("a\"b".to_string())]);
        assert_eq!(path.to_string(), "[\"a\\\"b\"]");

        let path = TreePath::new(vec![PathSegment::Key("a\\b".to_string())]);
        assert_eq!(path.to_string(), "[\"a\\\\b\"]");
    }

    #[test]
    fn labels_round_trip_through_segments() {
        assert_eq!(
            PathSegment::from_label("[3]"),
            PathSegment::Index(3),
        );
        assert_eq!(
            PathSegment::from_label("name"),
            PathSegment::Key("name".to_string()),
        );
        assert_eq!(PathSegment::Index(3).label(), "[3]");
        assert_eq!(PathSegment::Key("name".to_string()).label(), "name");
    }

    #[test]
    fn bracketed_labels_without_numeric_body_stay_keys() {
        assert_eq!(
            PathSegment::from_label("[abc]"),
            PathSegment::Key("[abc]".to_string()),
        );
    }

    #[test]
    fn from_labels_builds_mixed_paths() {
        let path = TreePath::from_labels(["y", "[1]"]);
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Key("y".to_string()),
                PathSegment::Index(1),
            ]
        );
        assert_eq!(path.to_string(), "[\"y\"][1]");
    }
}
