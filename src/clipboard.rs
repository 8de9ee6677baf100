use copypasta::{ClipboardContext, ClipboardProvider};
use std::fmt;

/// Clipboard failure. Never fatal; the caller reports it as a message.
#[derive(Debug)]
pub struct ClipboardError {
    message: String,
}

impl ClipboardError {
    fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl std::error::Error for ClipboardError {}

/// System clipboard handle. Construction fails on platforms or sessions
/// without clipboard support; callers treat that as "feature unavailable".
pub struct Clipboard {
    context: ClipboardContext,
}

impl Clipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let context = ClipboardContext::new().map_err(ClipboardError::new)?;
        Ok(Self { context })
    }

    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.context
            .set_contents(text.to_string())
            .map_err(ClipboardError::new)
    }

    pub fn read(&mut self) -> Result<String, ClipboardError> {
        self.context.get_contents().map_err(ClipboardError::new)
    }
}
