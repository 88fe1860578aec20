//! Per-run registry of generated default ids

use std::collections::HashMap;

/// Occurrence counts of default id candidates seen during one run
///
/// Keys are always the base candidate (prefix + slug). Suffixed ids handed
/// out by [`IdRegistry::disambiguate`] are never inserted as keys.
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    counts: HashMap<String, usize>,
}

impl IdRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a unique id for `candidate` and record the occurrence
    ///
    /// # Parameters
    /// * `candidate` - Base id (already slugged and prefixed)
    ///
    /// # Returns
    /// * The candidate unchanged on its first occurrence
    /// * `candidate-N` on occurrence N (N = 1, 2, ...)
    pub fn disambiguate(&mut self, candidate: String) -> String {
        match self.counts.get_mut(&candidate) {
            Some(count) => {
                let id = format!("{}-{}", candidate, count);
                log::trace!(
                    "Id '{}' already used {} time(s), emitting '{}'",
                    candidate,
                    count,
                    id
                );
                *count += 1;
                id
            }
            None => {
                self.counts.insert(candidate.clone(), 1);
                candidate
            }
        }
    }

    /// Number of times `candidate` has been handed out so far
    pub fn occurrences(&self, candidate: &str) -> usize {
        self.counts.get(candidate).copied().unwrap_or(0)
    }

    /// Number of distinct base candidates recorded
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no candidate has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_is_unchanged() {
        let mut registry = IdRegistry::new();

        assert_eq!(registry.disambiguate("heading".to_string()), "heading");
        assert_eq!(registry.occurrences("heading"), 1);
    }

    #[test]
    fn test_repeated_candidates_are_suffixed_in_order() {
        let mut registry = IdRegistry::new();

        let ids: Vec<String> = (0..4)
            .map(|_| registry.disambiguate("intro".to_string()))
            .collect();

        assert_eq!(ids, vec!["intro", "intro-1", "intro-2", "intro-3"]);
        assert_eq!(registry.occurrences("intro"), 4);
    }

    #[test]
    fn test_suffixed_ids_are_not_registry_keys() {
        let mut registry = IdRegistry::new();

        registry.disambiguate("a".to_string());
        registry.disambiguate("a".to_string());
        registry.disambiguate("a".to_string());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.occurrences("a-1"), 0);
    }

    #[test]
    fn test_literal_suffix_like_candidate_is_tracked_separately() {
        // A heading whose own text slugs to "a-1" is its own base candidate
        let mut registry = IdRegistry::new();

        assert_eq!(registry.disambiguate("a".to_string()), "a");
        assert_eq!(registry.disambiguate("a-1".to_string()), "a-1");
        assert_eq!(registry.disambiguate("a".to_string()), "a-1");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_candidate_is_a_valid_key() {
        let mut registry = IdRegistry::new();

        assert_eq!(registry.disambiguate(String::new()), "");
        assert_eq!(registry.disambiguate(String::new()), "-1");
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = IdRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.occurrences("anything"), 0);
    }
}
