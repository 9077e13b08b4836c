use serde::{Serialize, Deserialize};

/// Index statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    // Documents
    pub documents: usize,
    pub skipped_documents: usize,
    pub lines: usize,

    // Tokens
    pub tokens: usize,
    pub stop_words_skipped: usize,

    // Structures
    pub vocabulary_size: usize,
    pub postings: usize,
    pub trie_nodes: usize,
}

impl IndexStats {
    /// Tokens that made it into the index
    pub fn indexed_tokens(&self) -> usize {
        self.tokens - self.stop_words_skipped
    }
}
