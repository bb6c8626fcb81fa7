use serde::{Deserialize, Serialize};

/// A named text body taking part in a comparison.
///
/// The name is whatever the uploader supplied and is never validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocument {
    pub name: String,
    pub content: String,
}

impl TextDocument {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { name: name.into(), content: content.into() }
    }

    /// Decode raw bytes as UTF-8 text.
    ///
    /// Invalid sequences become U+FFFD. A byte order mark and `\r\n` line
    /// endings are kept as-is.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(name, String::from_utf8_lossy(bytes).into_owned())
    }

    /// Number of lines in the content, counted the way [`crate::split_lines`] splits.
    pub fn line_count(&self) -> usize {
        crate::split_lines(&self.content).len()
    }
}
