use crate::ui::style::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A run of text with one style, the unit the renderer composes lines from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Display width in terminal cells.
    pub fn width(&self) -> usize {
        self.text.width()
    }

    /// Splits into a head of at most `width` cells and the remainder, if
    /// any. A wide character that straddles the boundary goes to the tail.
    pub fn split_at_width(self, width: usize) -> (Span, Option<Span>) {
        if self.width() <= width {
            return (self, None);
        }

        let mut taken = 0usize;
        let mut boundary = 0usize;
        for (offset, ch) in self.text.char_indices() {
            let ch_width = ch.width().unwrap_or(0);
            if taken + ch_width > width {
                break;
            }
            taken += ch_width;
            boundary = offset + ch.len_utf8();
        }

        let tail = Span::styled(self.text[boundary..].to_string(), self.style);
        let head = Span::styled(self.text[..boundary].to_string(), self.style);
        (head, Some(tail))
    }
}

#[cfg(test)]
mod tests {
    use super::Span;

    #[test]
    fn split_respects_display_width() {
        let span = Span::new("hello");
        let (head, tail) = span.split_at_width(3);
        assert_eq!(head.text, "hel");
        assert_eq!(tail.expect("tail").text, "lo");
    }

    #[test]
    fn split_is_identity_when_span_fits() {
        let span = Span::new("ok");
        let (head, tail) = span.split_at_width(5);
        assert_eq!(head.text, "ok");
        assert!(tail.is_none());
    }

    #[test]
    fn wide_characters_do_not_straddle_the_boundary() {
        let span = Span::new("a漢b");
        let (head, tail) = span.split_at_width(2);
        assert_eq!(head.text, "a");
        assert_eq!(tail.expect("tail").text, "漢b");
    }
}
