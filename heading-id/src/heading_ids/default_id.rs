//! Default id generation from heading text

use super::registry::IdRegistry;
use crate::options::Options;

/// Slug used when a heading's text contains nothing to slug
pub const FALLBACK_SLUG: &str = "section";

/// Separator between the configured prefix and the slug
const PREFIX_SEPARATOR: char = '-';

/// Convert heading text into a slug
///
/// The text is lower-cased, every character that is not alphanumeric,
/// whitespace or a hyphen is dropped (underscores included), each run of
/// whitespace and hyphens becomes a single hyphen, and leading and trailing
/// hyphens are trimmed.
///
/// # Parameters
/// * `text` - Flattened plain text of a heading
///
/// # Returns
/// * The slug, which is empty when the text has no alphanumeric characters
///
/// # Examples
/// ```
/// use heading_id::format_default_id;
///
/// assert_eq!(format_default_id("Multiple Words With Case"), "multiple-words-with-case");
/// assert_eq!(format_default_id("extra     spaces  "), "extra-spaces");
/// ```
pub fn format_default_id(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.to_lowercase().chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
    }

    slug
}

/// Build the default id for a heading without an explicit marker
///
/// # Parameters
/// * `text` - Flattened plain text of the heading
/// * `registry` - Registry of the current run
/// * `options` - Options of the current run
///
/// # Returns
/// * The prefixed slug, suffixed with `-N` for repeats when `unique_defaults` is set
pub fn generate_default_id(text: &str, registry: &mut IdRegistry, options: &Options) -> String {
    let mut slug = format_default_id(text);
    if slug.is_empty() {
        slug = FALLBACK_SLUG.to_string();
    }

    let candidate = if options.default_prefix.is_empty() {
        slug
    } else {
        format!("{}{}{}", options.default_prefix, PREFIX_SEPARATOR, slug)
    };

    if options.unique_defaults {
        registry.disambiguate(candidate)
    } else {
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(unique_defaults: bool, default_prefix: &str) -> Options {
        Options {
            defaults: true,
            unique_defaults,
            default_prefix: default_prefix.to_string(),
        }
    }

    #[test]
    fn test_format_default_id_samples() {
        let samples = [
            ("title", "title"),
            ("multiple words", "multiple-words"),
            ("Multiple Words With Case", "multiple-words-with-case"),
            ("extra     spaces  ", "extra-spaces"),
            (
                "special (characters) *_-+=[]{}<>,./?&^%$#@!`~ ",
                "special-characters",
            ),
        ];

        for (input, expected) in samples {
            assert_eq!(format_default_id(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_format_default_id_keeps_inner_hyphens() {
        assert_eq!(format_default_id("well-known  --  names"), "well-known-names");
        assert_eq!(format_default_id("--leading and trailing--"), "leading-and-trailing");
    }

    #[test]
    fn test_format_default_id_drops_symbols_without_separating() {
        assert_eq!(format_default_id("v1.2.3 notes"), "v123-notes");
        assert_eq!(format_default_id("snake_case_name"), "snakecasename");
    }

    #[test]
    fn test_format_default_id_unicode() {
        assert_eq!(format_default_id("Überblick Größe"), "überblick-größe");
        assert_eq!(format_default_id("中文 标题"), "中文-标题");
    }

    #[test]
    fn test_format_default_id_collapses_tabs_and_newlines() {
        assert_eq!(format_default_id("a\tb\nc"), "a-b-c");
    }

    #[test]
    fn test_format_default_id_is_idempotent() {
        let inputs = [
            "title",
            "Multiple Words With Case",
            "special (characters) *_-+=[]{}<>,./?&^%$#@!`~ ",
            "--x--y--",
            "Überblick Größe",
            "",
            "!!!",
        ];

        for input in inputs {
            let once = format_default_id(input);
            assert_eq!(format_default_id(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_format_default_id_can_be_empty() {
        assert_eq!(format_default_id(""), "");
        assert_eq!(format_default_id("  ?! -- "), "");
    }

    #[test]
    fn test_generate_uses_fallback_for_empty_slug() {
        let mut registry = IdRegistry::new();

        let id = generate_default_id("???", &mut registry, &options(false, ""));

        assert_eq!(id, FALLBACK_SLUG);
    }

    #[test]
    fn test_generate_fallback_is_prefixed_and_disambiguated() {
        let mut registry = IdRegistry::new();
        let opts = options(true, "doc");

        assert_eq!(generate_default_id("", &mut registry, &opts), "doc-section");
        assert_eq!(generate_default_id("!", &mut registry, &opts), "doc-section-1");
    }

    #[test]
    fn test_generate_with_prefix() {
        let mut registry = IdRegistry::new();

        let id = generate_default_id("heading", &mut registry, &options(false, "somePrefix"));

        assert_eq!(id, "somePrefix-heading");
    }

    #[test]
    fn test_generate_without_uniqueness_repeats_ids() {
        let mut registry = IdRegistry::new();
        let opts = options(false, "");

        assert_eq!(generate_default_id("heading", &mut registry, &opts), "heading");
        assert_eq!(generate_default_id("heading", &mut registry, &opts), "heading");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_generate_with_uniqueness_suffixes_repeats() {
        let mut registry = IdRegistry::new();
        let opts = options(true, "somePrefix");

        assert_eq!(
            generate_default_id("heading", &mut registry, &opts),
            "somePrefix-heading"
        );
        assert_eq!(
            generate_default_id("Heading", &mut registry, &opts),
            "somePrefix-heading-1"
        );
        assert_eq!(registry.occurrences("somePrefix-heading"), 2);
    }
}
