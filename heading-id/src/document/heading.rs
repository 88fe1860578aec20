//! Heading representation

use super::inline::{self, Inline};
use crate::heading_ids::HeadingNode;

/// A heading with its inline content and assigned id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level (1 = h1, 2 = h2, etc.)
    pub level: usize,

    /// 1-based line of the heading in the source
    pub line_number: usize,

    /// Inline content of the heading
    pub content: Vec<Inline>,

    /// Id attribute, if one has been assigned
    pub id: Option<String>,
}

impl Heading {
    /// Create a heading without an id
    pub fn new(level: usize, line_number: usize, content: Vec<Inline>) -> Self {
        Self {
            level,
            line_number,
            content,
            id: None,
        }
    }

    /// Plain text of the heading, styling removed
    pub fn text(&self) -> String {
        inline::plain_text(&self.content)
    }
}

impl HeadingNode for Heading {
    fn level(&self) -> usize {
        self.level
    }

    fn plain_text(&self) -> String {
        self.text()
    }

    fn last_text_mut(&mut self) -> Option<&mut String> {
        match self.content.last_mut() {
            Some(Inline::Text(text)) => Some(text),
            _ => None,
        }
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
