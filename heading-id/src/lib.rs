//! heading-id - ids for markdown headings
//!
//! Assigns an `id` to each heading of a document, either taken from a
//! trailing `{#id}` marker or generated from the heading text.
//!
//! ```
//! use heading_id::{Document, Options};
//!
//! let mut doc = Document::parse("# Intro {#start}\n## Usage\n## Usage");
//! let options = Options {
//!     defaults: true,
//!     unique_defaults: true,
//!     ..Options::default()
//! };
//! doc.assign_ids(&options);
//!
//! assert_eq!(doc.ids(), vec![Some("start"), Some("usage"), Some("usage-1")]);
//! assert_eq!(doc.headings[0].text(), "Intro");
//! ```

#![deny(unsafe_code)]

pub mod document;
pub mod heading_ids;
pub mod options;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use document::{AssignmentSummary, Document, Heading, Inline};
pub use heading_ids::{
    assign_heading_ids, extract_explicit_id, format_default_id, generate_default_id, AssignedId,
    ExplicitId, HeadingIdPass, HeadingNode, IdRegistry, IdSource, FALLBACK_SLUG,
};
pub use options::{Options, OptionsError};
