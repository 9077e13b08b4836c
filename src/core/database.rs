use std::path::Path;
use tracing::debug;
use crate::analysis::analyzer::Analyzer;
use crate::analysis::tokenizer::normalize_term;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::stats::IndexStats;
use crate::index::inverted::InvertedIndex;
use crate::search::executor::SearchEngine;
use crate::search::prefix::PrefixTrie;
use crate::search::results::{ExactResult, PrefixResult, QueryReport};
use crate::storage::document_store::DocumentStore;
use crate::writer::index_writer::{IndexWriter, IngestReport};

/// Frozen index: inverted index, prefix trie, and document text.
///
/// Only reachable through `IndexWriter::finish`, and only offers `&self`
/// queries, so it can be shared across threads once built.
pub struct Database {
    config: Config,
    analyzer: Analyzer,
    index: InvertedIndex,
    trie: PrefixTrie,
    documents: DocumentStore,
    stats: IndexStats,
}

impl Database {
    pub fn writer(config: Config) -> Result<IndexWriter> {
        IndexWriter::new(config)
    }

    /// Build from files in one go
    pub fn open<P: AsRef<Path>>(config: Config, paths: &[P]) -> Result<(Self, IngestReport)> {
        let mut writer = IndexWriter::new(config)?;
        let report = writer.add_files(paths)?;
        Ok((writer.finish(), report))
    }

    pub(crate) fn from_parts(
        config: Config,
        analyzer: Analyzer,
        index: InvertedIndex,
        trie: PrefixTrie,
        documents: DocumentStore,
        stats: IndexStats,
    ) -> Self {
        Database {
            config,
            analyzer,
            index,
            trie,
            documents,
            stats,
        }
    }

    pub fn search_engine(&self) -> SearchEngine<'_> {
        SearchEngine::new(
            &self.index,
            &self.trie,
            &self.documents,
            &self.analyzer,
            self.config.max_term_length,
        )
    }

    /// `term` must already be normalized
    pub fn exact_search(&self, term: &str) -> Result<ExactResult> {
        self.search_engine().exact_search(term)
    }

    /// `term` must already be normalized
    pub fn prefix_search(&self, term: &str) -> Result<PrefixResult> {
        self.search_engine().prefix_search(term)
    }

    /// Normalize a raw term and run both searches
    pub fn query(&self, raw: &str) -> Result<QueryReport> {
        let term = normalize_term(raw);
        debug!(raw, term = %term, "query");

        let engine = self.search_engine();
        let exact = engine.exact_search(&term)?;
        let prefix = engine.prefix_search(&term)?;
        Ok(QueryReport { term, exact, prefix })
    }

    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }

    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::core::types::DocId;

    fn cat_database() -> Database {
        let mut writer = Database::writer(Config::default()).unwrap();
        writer.add_document("cat.txt", "The cat sat on the mat").unwrap();
        writer.finish()
    }

    #[test]
    fn exact_search_finds_cat() {
        let db = cat_database();
        let result = db.exact_search("cat").unwrap();

        let hits = result.hits().unwrap();
        assert_eq!(hits.documents.len(), 1);
        let doc = &hits.documents[0];
        assert_eq!(doc.doc_id, DocId(0));
        assert_eq!(doc.frequency, 1);
        assert_eq!((doc.occurrences[0].line, doc.occurrences[0].position), (1, 2));
        assert_eq!(doc.occurrences[0].text, "The cat sat on the mat");
    }

    #[test]
    fn absent_and_stop_words_not_found() {
        let db = cat_database();
        assert_eq!(db.exact_search("dog").unwrap(), ExactResult::NotFound);
        assert_eq!(db.exact_search("the").unwrap(), ExactResult::NotFound);
        assert_eq!(db.exact_search("on").unwrap(), ExactResult::NotFound);
    }

    #[test]
    fn prefix_of_cat_matches_exact() {
        let db = cat_database();
        let exact = db.exact_search("cat").unwrap();
        let prefix = db.prefix_search("ca").unwrap();

        assert_eq!(prefix, PrefixResult::Found(vec![exact.hits().unwrap().clone()]));
        assert_eq!(db.prefix_search("do").unwrap(), PrefixResult::NoMatches);
    }

    #[test]
    fn query_normalizes_raw_input() {
        let db = cat_database();
        let report = db.query("CAT").unwrap();
        assert_eq!(report.term, "cat");
        assert!(report.exact.is_found());
        assert_eq!(report.prefix.words(), vec!["cat"]);
    }

    #[test]
    fn invalid_queries_are_errors() {
        let db = cat_database();
        assert_eq!(db.exact_search("").unwrap_err().kind(), ErrorKind::InvalidQuery);

        let long = "x".repeat(101);
        assert_eq!(db.prefix_search(&long).unwrap_err().kind(), ErrorKind::InvalidQuery);
        assert!(db.exact_search(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn database_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Database>();
    }

    #[test]
    fn query_matches_non_ascii_words_as_written() {
        let mut writer = Database::writer(Config::default()).unwrap();
        writer.add_document("greek.txt", "ΟΔΟΣ Straße").unwrap();
        let db = writer.finish();

        let report = db.query("ΟΔΟΣ").unwrap();
        let hits = report.exact.hits().unwrap();
        assert_eq!(hits.documents[0].occurrences[0].position, 1);
        assert_eq!(report.prefix.words(), vec![report.term.as_str()]);

        assert!(db.query("STRASSE").unwrap().exact.hits().is_none());
        assert!(db.query("Straße").unwrap().exact.is_found());
    }
}
