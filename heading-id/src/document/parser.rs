//! Markdown event stream parser
//!
//! Collects headings from pulldown-cmark's event stream, keeping their inline
//! structure. Everything outside headings is skipped.

use super::heading::Heading;
use super::inline::{push_text, Inline};
use pulldown_cmark::{Event, Tag, TagEnd};
use std::ops::Range;

/// Parser state for collecting headings
pub struct HeadingParser {
    /// Byte offsets at which each source line starts
    line_starts: Vec<usize>,

    /// Heading currently being built
    current: Option<HeadingBuilder>,

    /// Completed headings, in document order
    headings: Vec<Heading>,
}

/// Inline container that is still open
enum Container {
    Emphasis,
    Strong,
    Strikethrough,
    Link(String),
    Image(String),
}

/// Builder for a heading
struct HeadingBuilder {
    /// Heading level
    level: usize,
    /// Line the heading starts on
    line_number: usize,
    /// Top-level inlines of the heading
    content: Vec<Inline>,
    /// Stack of open containers with the inlines collected so far
    open: Vec<(Container, Vec<Inline>)>,
}

impl HeadingBuilder {
    /// Inline list that new content goes into
    fn target(&mut self) -> &mut Vec<Inline> {
        match self.open.last_mut() {
            Some((_, children)) => children,
            None => &mut self.content,
        }
    }

    /// Close the innermost container and attach it to its parent
    fn close(&mut self) {
        let Some((container, children)) = self.open.pop() else {
            return;
        };

        let inline = match container {
            Container::Emphasis => Inline::Emphasis(children),
            Container::Strong => Inline::Strong(children),
            Container::Strikethrough => Inline::Strikethrough(children),
            Container::Link(url) => Inline::Link { url, children },
            Container::Image(url) => Inline::Image { url, children },
        };
        self.target().push(inline);
    }

    /// Finish the heading, closing anything left open
    fn finish(mut self) -> Heading {
        while !self.open.is_empty() {
            self.close();
        }
        Heading::new(self.level, self.line_number, self.content)
    }
}

impl HeadingParser {
    /// Create a parser for the given source text
    fn new(content: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            line_starts,
            current: None,
            headings: Vec::new(),
        }
    }

    /// Parse markdown content and return its headings in document order
    ///
    /// # Parameters
    /// * `content` - Raw markdown content to parse
    ///
    /// # Returns
    /// * `Vec<Heading>` - All headings, without ids
    pub fn parse(content: &str) -> Vec<Heading> {
        let mut parser = Self::new(content);

        // Heading attributes stay disabled so `{#id}` markers reach us as text
        let options = pulldown_cmark::Options::ENABLE_STRIKETHROUGH;
        let md_parser = pulldown_cmark::Parser::new_ext(content, options);

        for (event, range) in md_parser.into_offset_iter() {
            parser.process_event(event, range);
        }

        parser.headings
    }

    /// 1-based line number of a byte offset
    fn line_number(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset)
    }

    /// Process a single markdown event
    fn process_event(&mut self, event: Event<'_>, range: Range<usize>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.start_heading(level as usize, range.start);
            }
            Event::End(TagEnd::Heading(_)) => self.finish_heading(),
            Event::Start(tag) => self.handle_start_tag(tag),
            Event::End(tag_end) => self.handle_end_tag(tag_end),
            Event::Text(text) => self.handle_text(&text),
            Event::Code(code) => self.push_inline(Inline::Code(code.to_string())),
            Event::InlineHtml(html) => self.push_inline(Inline::Html(html.to_string())),
            Event::SoftBreak => self.handle_text(" "),
            Event::HardBreak => self.handle_text("\n"),
            _ => {}
        }
    }

    /// Handle opening inline tags inside a heading
    fn handle_start_tag(&mut self, tag: Tag<'_>) {
        let Some(heading) = self.current.as_mut() else {
            return;
        };

        let container = match tag {
            Tag::Emphasis => Container::Emphasis,
            Tag::Strong => Container::Strong,
            Tag::Strikethrough => Container::Strikethrough,
            Tag::Link { dest_url, .. } => Container::Link(dest_url.to_string()),
            Tag::Image { dest_url, .. } => Container::Image(dest_url.to_string()),
            _ => return,
        };
        heading.open.push((container, Vec::new()));
    }

    /// Handle closing inline tags inside a heading
    fn handle_end_tag(&mut self, tag_end: TagEnd) {
        let Some(heading) = self.current.as_mut() else {
            return;
        };

        match tag_end {
            TagEnd::Emphasis
            | TagEnd::Strong
            | TagEnd::Strikethrough
            | TagEnd::Link
            | TagEnd::Image => heading.close(),
            _ => {}
        }
    }

    /// Handle text content
    fn handle_text(&mut self, text: &str) {
        if let Some(heading) = self.current.as_mut() {
            push_text(heading.target(), text);
        }
    }

    /// Add a leaf inline to the current heading
    fn push_inline(&mut self, inline: Inline) {
        if let Some(heading) = self.current.as_mut() {
            heading.target().push(inline);
        }
    }

    /// Start a new heading
    fn start_heading(&mut self, level: usize, offset: usize) {
        self.current = Some(HeadingBuilder {
            level,
            line_number: self.line_number(offset),
            content: Vec::new(),
            open: Vec::new(),
        });
    }

    /// Finish a heading
    fn finish_heading(&mut self) {
        if let Some(heading) = self.current.take() {
            self.headings.push(heading.finish());
        }
    }
}
