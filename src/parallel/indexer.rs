use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use rayon::prelude::*;
use tracing::debug;
use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::Token;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;

/// A document read and tokenized, ready to be merged into the index
#[derive(Debug, Clone)]
pub struct AnalyzedDocument {
    pub doc_id: DocId,
    pub source: String,
    pub lines: Vec<String>,
    pub tokens: Vec<Token>,       // Stop words already removed
    pub token_count: usize,       // Before filtering
    pub stop_words_skipped: usize,
}

impl AnalyzedDocument {
    pub fn from_lines<I, S>(doc_id: DocId, source: String, lines: I, analyzer: &Analyzer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut doc = AnalyzedDocument {
            doc_id,
            source,
            lines: Vec::new(),
            tokens: Vec::new(),
            token_count: 0,
            stop_words_skipped: 0,
        };

        for line in lines {
            let line: String = line.into();
            let line_number = doc.lines.len() as u32 + 1;
            for token in analyzer.tokens(&line, line_number) {
                doc.token_count += 1;
                if analyzer.accepts_token(&token) {
                    doc.tokens.push(token);
                } else {
                    doc.stop_words_skipped += 1;
                }
            }
            doc.lines.push(line);
        }

        doc
    }

    /// Read a file and analyze it. Invalid UTF-8 is replaced, not rejected.
    pub fn from_file(doc_id: DocId, path: &Path, analyzer: &Analyzer) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| Error::new(
            ErrorKind::DocumentUnavailable,
            format!("{}: {}", path.display(), e),
        ))?;
        let text = String::from_utf8_lossy(&bytes);

        Ok(Self::from_lines(doc_id, path.display().to_string(), text.lines(), analyzer))
    }
}

/// Reads and tokenizes files on a rayon pool. Merging into the index stays
/// with the single writer.
pub struct ParallelIndexer {
    pool: Option<rayon::ThreadPool>,
    progress: AtomicUsize,
}

impl ParallelIndexer {
    /// `threads: None` uses the global rayon pool
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| Error::new(ErrorKind::Internal, format!("thread pool: {}", e)))?,
            ),
            None => None,
        };

        Ok(ParallelIndexer {
            pool,
            progress: AtomicUsize::new(0),
        })
    }

    /// Get current progress
    pub fn get_progress(&self) -> usize {
        self.progress.load(Ordering::Relaxed)
    }

    /// Analyze every file; output order matches input order
    pub fn analyze_files(
        &self,
        jobs: &[(DocId, PathBuf)],
        analyzer: &Analyzer,
    ) -> Vec<Result<AnalyzedDocument>> {
        self.progress.store(0, Ordering::Relaxed);

        let run = || {
            jobs.par_iter()
                .map(|(doc_id, path)| {
                    let result = AnalyzedDocument::from_file(*doc_id, path, analyzer);
                    let done = self.progress.fetch_add(1, Ordering::Relaxed) + 1;
                    debug!(doc_id = doc_id.value(), done, total = jobs.len(), "analyzed");
                    result
                })
                .collect::<Vec<_>>()
        };

        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }
}
