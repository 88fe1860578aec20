//! Inline content of a heading
//!
//! Inlines form a small tree: text leaves, and containers (emphasis, strong,
//! strike-through, links, images) wrapping further inlines.

/// Inline element inside a heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Plain text
    Text(String),

    /// Inline code span
    Code(String),

    /// Raw inline HTML (kept for output, not part of the plain text)
    Html(String),

    /// Emphasized (italic) content
    Emphasis(Vec<Inline>),

    /// Strong (bold) content
    Strong(Vec<Inline>),

    /// Struck-through content
    Strikethrough(Vec<Inline>),

    /// A hyperlink wrapping its label
    Link {
        /// Link destination
        url: String,
        /// Link label
        children: Vec<Inline>,
    },

    /// An image; its children are the alt text
    Image {
        /// Image source
        url: String,
        /// Alt text
        children: Vec<Inline>,
    },
}

impl Inline {
    /// Append the plain text of this inline to `out`
    pub fn write_plain_text(&self, out: &mut String) {
        match self {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Html(_) => {}
            Inline::Emphasis(children)
            | Inline::Strong(children)
            | Inline::Strikethrough(children)
            | Inline::Link { children, .. }
            | Inline::Image { children, .. } => {
                for child in children {
                    child.write_plain_text(out);
                }
            }
        }
    }
}

/// Append text to an inline list, merging with a trailing text leaf
///
/// The parser may split one run of text into several events; merging keeps
/// a heading's trailing text in a single leaf.
pub(crate) fn push_text(inlines: &mut Vec<Inline>, text: &str) {
    if text.is_empty() {
        return;
    }

    if let Some(Inline::Text(last)) = inlines.last_mut() {
        last.push_str(text);
        return;
    }

    inlines.push(Inline::Text(text.to_string()));
}

/// Plain text of a list of inlines
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        inline.write_plain_text(&mut out);
    }
    out
}
