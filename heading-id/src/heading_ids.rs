//! Heading id assignment
//!
//! Every heading visited by a [`HeadingIdPass`] goes through two steps, in
//! document order:
//! 1. **Explicit ids**: a trailing `{#id}` marker in the heading's last plain
//!    text inline is extracted, applied, and stripped from the text.
//! 2. **Default ids**: when no marker is present and `defaults` is enabled,
//!    an id is derived from the heading's flattened text, optionally prefixed
//!    and disambiguated against earlier default ids of the same run.
//!
//! The two steps are mutually exclusive for a single heading.

use crate::options::Options;

// Submodules
mod default_id;
mod explicit;
mod registry;

// Re-export public types
pub use default_id::{format_default_id, generate_default_id, FALLBACK_SLUG};
pub use explicit::{extract_explicit_id, ExplicitId};
pub use registry::IdRegistry;

/// Capabilities a heading must expose to receive an id
///
/// This keeps the id logic independent of any concrete document tree.
pub trait HeadingNode {
    /// Heading level (1 = h1, 2 = h2, etc.)
    fn level(&self) -> usize;

    /// Concatenation of all text leaves of the heading, styling removed
    fn plain_text(&self) -> String;

    /// The last inline child, if it is a plain text leaf
    ///
    /// Only this leaf may carry an explicit `{#id}` marker.
    fn last_text_mut(&mut self) -> Option<&mut String>;

    /// Set the heading's id attribute
    fn set_id(&mut self, id: String);
}

/// Where an assigned id came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSource {
    /// Extracted from a trailing `{#id}` marker
    Explicit,
    /// Generated from the heading text
    Default,
}

/// An id assigned to a heading during a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedId {
    /// The id written to the heading
    pub id: String,
    /// How the id was obtained
    pub source: IdSource,
}

/// A single id assignment run over one document
///
/// The pass owns the [`IdRegistry`] used for disambiguation, so two
/// documents processed with two passes never influence each other.
#[derive(Debug)]
pub struct HeadingIdPass<'a> {
    options: &'a Options,
    registry: IdRegistry,
}

impl<'a> HeadingIdPass<'a> {
    /// Start a new run with an empty registry
    pub fn new(options: &'a Options) -> Self {
        Self {
            options,
            registry: IdRegistry::new(),
        }
    }

    /// Assign an id to a single heading
    ///
    /// Headings must be passed in document order for default id suffixes to
    /// be deterministic.
    ///
    /// # Returns
    /// * `Some(AssignedId)` - The heading received an id
    /// * `None` - No marker was found and default ids are disabled
    pub fn apply<N: HeadingNode + ?Sized>(&mut self, node: &mut N) -> Option<AssignedId> {
        if let Some(id) = Self::apply_explicit(node) {
            log::debug!("h{} explicit id '{}'", node.level(), id);
            return Some(AssignedId {
                id,
                source: IdSource::Explicit,
            });
        }

        if !self.options.defaults {
            return None;
        }

        let id = generate_default_id(&node.plain_text(), &mut self.registry, self.options);
        node.set_id(id.clone());
        log::debug!("h{} default id '{}'", node.level(), id);

        Some(AssignedId {
            id,
            source: IdSource::Default,
        })
    }

    /// Extract, apply and strip an explicit marker if the heading has one
    fn apply_explicit<N: HeadingNode + ?Sized>(node: &mut N) -> Option<String> {
        let last_text = node.last_text_mut()?;
        let found = extract_explicit_id(last_text)?;

        *last_text = found.remaining_text;
        node.set_id(found.id.clone());
        Some(found.id)
    }

    /// Registry state of this run
    pub fn registry(&self) -> &IdRegistry {
        &self.registry
    }
}

/// Assign ids to a sequence of headings in one run
///
/// # Parameters
/// * `headings` - Headings in document order
/// * `options` - Options for this run
///
/// # Returns
/// * Number of headings that received an id
pub fn assign_heading_ids<'n, N, I>(headings: I, options: &Options) -> usize
where
    N: HeadingNode + 'n,
    I: IntoIterator<Item = &'n mut N>,
{
    let mut pass = HeadingIdPass::new(options);
    headings
        .into_iter()
        .filter_map(|heading| pass.apply(heading))
        .count()
}
