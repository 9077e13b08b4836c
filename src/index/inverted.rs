use std::collections::HashMap;
use crate::core::types::DocId;
use crate::index::posting::{Occurrence, PostingList};

/// Inverted index structure: word -> postings, one per containing document
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    pub postings: HashMap<String, PostingList>,
    pub total_occurrences: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: HashMap::new(),
            total_occurrences: 0,
        }
    }

    /// Record `word` at (line, position) in `doc_id`.
    ///
    /// Returns `true` when the word was not yet in the vocabulary, which is
    /// the caller's cue to add it to the prefix trie.
    pub fn insert(&mut self, word: &str, doc_id: DocId, line: u32, position: u32) -> bool {
        let occurrence = Occurrence { line, position };
        self.total_occurrences += 1;

        if let Some(list) = self.postings.get_mut(word) {
            list.add_occurrence(doc_id, occurrence);
            return false;
        }

        let mut list = PostingList::new();
        list.add_occurrence(doc_id, occurrence);
        self.postings.insert(word.to_string(), list);
        true
    }

    pub fn lookup(&self, word: &str) -> Option<&PostingList> {
        self.postings.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.postings.contains_key(word)
    }

    /// Get an iterator over all terms in the index
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Vocabulary size
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn posting_count(&self) -> usize {
        self.postings.values().map(PostingList::len).sum()
    }
}
