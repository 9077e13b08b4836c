use tracing::debug;
use crate::analysis::analyzer::Analyzer;
use crate::core::error::{Error, Result};
use crate::index::inverted::InvertedIndex;
use crate::index::posting::Posting;
use crate::search::prefix::PrefixTrie;
use crate::search::results::{DocumentHits, ExactResult, OccurrenceHit, PrefixResult, WordHits};
use crate::storage::document_store::DocumentStore;

/// Read-only query execution over a built index
pub struct SearchEngine<'a> {
    pub index: &'a InvertedIndex,
    pub trie: &'a PrefixTrie,
    pub documents: &'a DocumentStore,
    pub analyzer: &'a Analyzer,
    pub max_term_length: usize,
}

impl<'a> SearchEngine<'a> {
    pub fn new(
        index: &'a InvertedIndex,
        trie: &'a PrefixTrie,
        documents: &'a DocumentStore,
        analyzer: &'a Analyzer,
        max_term_length: usize,
    ) -> Self {
        SearchEngine {
            index,
            trie,
            documents,
            analyzer,
            max_term_length,
        }
    }

    fn validate(&self, term: &str) -> Result<()> {
        if term.is_empty() {
            return Err(Error::invalid_query("empty search term"));
        }
        if term.len() > self.max_term_length {
            return Err(Error::invalid_query(format!(
                "search term is {} bytes, limit is {}",
                term.len(),
                self.max_term_length
            )));
        }
        Ok(())
    }

    /// Look up an already-normalized word
    pub fn exact_search(&self, term: &str) -> Result<ExactResult> {
        self.validate(term)?;

        if !self.analyzer.accepts(term) {
            debug!(term, "filtered query term");
            return Ok(ExactResult::NotFound);
        }
        Ok(self.lookup_word(term))
    }

    fn lookup_word(&self, word: &str) -> ExactResult {
        match self.index.lookup(word) {
            Some(list) => ExactResult::Found(WordHits {
                word: word.to_string(),
                documents: list.iter().map(|p| self.resolve(p)).collect(),
            }),
            None => ExactResult::NotFound,
        }
    }

    /// Exact search for every indexed word starting with `term`
    pub fn prefix_search(&self, term: &str) -> Result<PrefixResult> {
        self.validate(term)?;

        let Some(words) = self.trie.enumerate(term) else {
            return Ok(PrefixResult::NoMatches);
        };

        let mut all = Vec::new();
        for word in words {
            // Vocabulary words may be longer than the query limit
            if let ExactResult::Found(hits) = self.lookup_word(&word) {
                all.push(hits);
            }
        }
        debug!(term, matches = all.len(), "prefix search");

        if all.is_empty() {
            return Ok(PrefixResult::NoMatches);
        }
        Ok(PrefixResult::Found(all))
    }

    fn resolve(&self, posting: &Posting) -> DocumentHits {
        let occurrences = posting.occurrences.iter()
            .map(|occ| OccurrenceHit {
                line: occ.line,
                position: occ.position,
                text: self.documents
                    .get_line(posting.doc_id, occ.line)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect();

        DocumentHits {
            doc_id: posting.doc_id,
            source: self.documents.source(posting.doc_id).unwrap_or_default().to_string(),
            frequency: posting.frequency,
            occurrences,
        }
    }
}
