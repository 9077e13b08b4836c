use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use crate::analysis::analyzer::Analyzer;
use crate::core::config::Config;
use crate::core::database::Database;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::stats::IndexStats;
use crate::core::types::DocId;
use crate::index::inverted::InvertedIndex;
use crate::parallel::indexer::{AnalyzedDocument, ParallelIndexer};
use crate::search::prefix::PrefixTrie;
use crate::storage::document_store::DocumentStore;

/// A document the writer could not load
#[derive(Debug)]
pub struct SkippedDocument {
    pub doc_id: DocId,
    pub source: String,
    pub error: Error,
}

/// Outcome of ingesting a batch of files
#[derive(Debug, Default)]
pub struct IngestReport {
    pub indexed: Vec<DocId>,
    pub skipped: Vec<SkippedDocument>,
}

/// Single writer for the ingestion phase. `finish` freezes it into a
/// read-only `Database`.
pub struct IndexWriter {
    pub config: Config,
    pub analyzer: Analyzer,
    index: InvertedIndex,
    trie: PrefixTrie,
    documents: DocumentStore,
    stats: IndexStats,
    next_doc_id: u64,
}

impl IndexWriter {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let analyzer = Analyzer::from_config(&config);

        Ok(IndexWriter {
            config,
            analyzer,
            index: InvertedIndex::new(),
            trie: PrefixTrie::new(),
            documents: DocumentStore::new(),
            stats: IndexStats::default(),
            next_doc_id: 0,
        })
    }

    /// Hand out the next id. Ids past `max_documents` are still consumed so
    /// later ids keep matching input order, but get no store slot.
    fn reserve_id(&mut self) -> Result<DocId> {
        let doc_id = DocId(self.next_doc_id);
        self.next_doc_id += 1;

        if let Some(max) = self.config.max_documents {
            if doc_id.as_index() >= max {
                return Err(Error::new(
                    ErrorKind::CapacityExceeded,
                    format!("document {} exceeds max_documents = {}", doc_id, max),
                ));
            }
        }
        self.documents.reserve(doc_id);
        Ok(doc_id)
    }

    /// Index in-memory text under a caller-chosen source label
    pub fn add_document(&mut self, source: &str, text: &str) -> Result<DocId> {
        self.add_lines(source, text.lines())
    }

    pub fn add_lines<I, S>(&mut self, source: &str, lines: I) -> Result<DocId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let doc_id = self.reserve_id()?;
        let analyzed = AnalyzedDocument::from_lines(doc_id, source.to_string(), lines, &self.analyzer);
        self.merge(analyzed);
        Ok(doc_id)
    }

    /// Index one file. The id is consumed even when the file can't be read.
    pub fn add_file(&mut self, path: &Path) -> Result<DocId> {
        let doc_id = self.reserve_id()?;
        let analyzed = AnalyzedDocument::from_file(doc_id, path, &self.analyzer)?;
        self.merge(analyzed);
        Ok(doc_id)
    }

    /// Index every path in order. A failing document is logged, recorded,
    /// and skipped; it never stops the rest.
    pub fn add_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<IngestReport> {
        let mut report = IngestReport::default();

        if self.config.parallel_ingest {
            let mut jobs: Vec<(DocId, PathBuf)> = Vec::with_capacity(paths.len());
            for path in paths {
                let path = path.as_ref();
                match self.reserve_id() {
                    Ok(doc_id) => jobs.push((doc_id, path.to_path_buf())),
                    Err(error) => self.skip(&mut report, DocId(self.next_doc_id - 1), path, error),
                }
            }

            let indexer = ParallelIndexer::new(self.config.ingest_threads)?;
            let results = indexer.analyze_files(&jobs, &self.analyzer);
            // Merge strictly in id order so the index matches sequential ingestion
            for ((doc_id, path), result) in jobs.iter().zip(results) {
                match result {
                    Ok(analyzed) => {
                        self.merge(analyzed);
                        report.indexed.push(*doc_id);
                    }
                    Err(error) => self.skip(&mut report, *doc_id, path, error),
                }
            }
            report.skipped.sort_by_key(|s| s.doc_id);
        } else {
            for path in paths {
                let path = path.as_ref();
                match self.add_file(path) {
                    Ok(doc_id) => report.indexed.push(doc_id),
                    Err(error) => self.skip(&mut report, DocId(self.next_doc_id - 1), path, error),
                }
            }
        }

        info!(
            indexed = report.indexed.len(),
            skipped = report.skipped.len(),
            vocabulary = self.index.len(),
            "ingestion finished"
        );
        Ok(report)
    }

    fn skip(&mut self, report: &mut IngestReport, doc_id: DocId, path: &Path, error: Error) {
        warn!(doc_id = doc_id.value(), path = %path.display(), %error, "skipping document");
        self.stats.skipped_documents += 1;
        report.skipped.push(SkippedDocument {
            doc_id,
            source: path.display().to_string(),
            error,
        });
    }

    fn merge(&mut self, analyzed: AnalyzedDocument) {
        let doc_id = analyzed.doc_id;
        self.documents.register(doc_id, analyzed.source);
        for line in &analyzed.lines {
            self.documents.add_line(doc_id, line);
        }

        for token in &analyzed.tokens {
            if self.index.insert(&token.text, doc_id, token.line, token.position) {
                // First sighting of this word anywhere
                self.trie.insert(&token.text);
            }
        }

        self.stats.documents += 1;
        self.stats.lines += analyzed.lines.len();
        self.stats.tokens += analyzed.token_count;
        self.stats.stop_words_skipped += analyzed.stop_words_skipped;

        debug!(
            doc_id = doc_id.value(),
            lines = analyzed.lines.len(),
            tokens = analyzed.token_count,
            "document indexed"
        );
    }

    /// Ids handed out so far, loaded or not
    pub fn document_slots(&self) -> usize {
        self.next_doc_id as usize
    }

    pub fn finish(mut self) -> Database {
        self.stats.vocabulary_size = self.index.len();
        self.stats.postings = self.index.posting_count();
        self.stats.trie_nodes = self.trie.node_count();

        Database::from_parts(
            self.config,
            self.analyzer,
            self.index,
            self.trie,
            self.documents,
            self.stats,
        )
    }
}
