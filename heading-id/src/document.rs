//! Document model for heading id assignment
//!
//! A [`Document`] holds the headings of one markdown source, built from
//! pulldown-cmark's event stream. Headings implement
//! [`HeadingNode`](crate::heading_ids::HeadingNode) so ids can be assigned in
//! place.

use crate::heading_ids::{HeadingIdPass, IdSource};
use crate::options::Options;

// Submodules
mod heading;
mod inline;
mod parser;

// Re-export public types
pub use heading::Heading;
pub use inline::{plain_text, Inline};
pub use parser::HeadingParser;

/// Headings of one markdown document, in document order
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// All headings of the document
    pub headings: Vec<Heading>,
}

/// Counts of ids assigned to a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentSummary {
    /// Headings with an id taken from a `{#id}` marker
    pub explicit: usize,
    /// Headings with an id generated from their text
    pub generated: usize,
    /// Headings left without an id
    pub without_id: usize,
}

impl Document {
    /// Parse markdown content into a document
    pub fn parse(content: &str) -> Self {
        Self {
            headings: HeadingParser::parse(content),
        }
    }

    /// Assign ids to all headings in one run
    ///
    /// # Parameters
    /// * `options` - Options for this run
    ///
    /// # Returns
    /// * `AssignmentSummary` - How many headings got which kind of id
    pub fn assign_ids(&mut self, options: &Options) -> AssignmentSummary {
        let mut pass = HeadingIdPass::new(options);
        let mut summary = AssignmentSummary::default();

        for heading in self.headings.iter_mut() {
            match pass.apply(heading).map(|assigned| assigned.source) {
                Some(IdSource::Explicit) => summary.explicit += 1,
                Some(IdSource::Default) => summary.generated += 1,
                None => summary.without_id += 1,
            }
        }

        log::debug!(
            "Assigned {} default ids, {} registry entries",
            summary.generated,
            pass.registry().len()
        );
        summary
    }

    /// Ids of all headings, in document order
    pub fn ids(&self) -> Vec<Option<&str>> {
        self.headings.iter().map(|h| h.id.as_deref()).collect()
    }
}
