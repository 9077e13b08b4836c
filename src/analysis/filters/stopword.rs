use std::collections::HashSet;
use crate::analysis::filter::TokenFilter;
use crate::analysis::tokenizer::normalize_term;

pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "is", "a", "an", "of", "to", "in", "on", "for", "and",
    "with", "as", "by", "at", "from",
];

#[derive(Debug, Clone)]
pub struct StopWordFilter {
    pub stop_words: HashSet<String>,
}

impl StopWordFilter {
    pub fn new(stop_words: Vec<String>) -> Self {
        StopWordFilter {
            stop_words: stop_words.into_iter().map(|w| normalize_term(&w)).collect(),
        }
    }

    pub fn english() -> Self {
        StopWordFilter::new(DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect())
    }

    pub fn is_stop_word(&self, term: &str) -> bool {
        self.stop_words.contains(term)
    }
}

impl TokenFilter for StopWordFilter {
    fn accepts(&self, term: &str) -> bool {
        !self.is_stop_word(term)
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_set_matches_exactly() {
        let filter = StopWordFilter::english();
        for word in DEFAULT_STOP_WORDS {
            assert!(filter.is_stop_word(word));
        }
        assert!(!filter.is_stop_word("cat"));
        // Exact equality only, no prefix matching
        assert!(!filter.is_stop_word("there"));
        assert!(!filter.is_stop_word("The"));
    }

    #[test]
    fn custom_words_are_normalized() {
        let filter = StopWordFilter::new(vec!["Foo".to_string()]);
        assert!(filter.is_stop_word("foo"));
        assert!(!filter.accepts("foo"));
        assert!(filter.accepts("the"));
    }
}
