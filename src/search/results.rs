use std::fmt;
use serde::{Serialize, Deserialize};
use crate::core::types::DocId;

/// One occurrence resolved to its source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceHit {
    pub line: u32,
    pub position: u32,
    pub text: String,
}

/// Everything one document contributes for a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHits {
    pub doc_id: DocId,
    pub source: String,
    pub frequency: u32,
    pub occurrences: Vec<OccurrenceHit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordHits {
    pub word: String,
    pub documents: Vec<DocumentHits>,  // Ascending doc_id
}

impl WordHits {
    pub fn document(&self, doc_id: DocId) -> Option<&DocumentHits> {
        self.documents.iter().find(|d| d.doc_id == doc_id)
    }
}

/// Outcome of an exact-word search. A miss is a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "hits", rename_all = "snake_case")]
pub enum ExactResult {
    Found(WordHits),
    NotFound,
}

impl ExactResult {
    pub fn is_found(&self) -> bool {
        matches!(self, ExactResult::Found(_))
    }

    pub fn hits(&self) -> Option<&WordHits> {
        match self {
            ExactResult::Found(hits) => Some(hits),
            ExactResult::NotFound => None,
        }
    }
}

/// Outcome of a prefix search, one entry per matching word in trie order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "words", rename_all = "snake_case")]
pub enum PrefixResult {
    Found(Vec<WordHits>),
    NoMatches,
}

impl PrefixResult {
    pub fn words(&self) -> Vec<&str> {
        match self {
            PrefixResult::Found(hits) => hits.iter().map(|h| h.word.as_str()).collect(),
            PrefixResult::NoMatches => Vec::new(),
        }
    }

    pub fn get(&self, word: &str) -> Option<&WordHits> {
        match self {
            PrefixResult::Found(hits) => hits.iter().find(|h| h.word == word),
            PrefixResult::NoMatches => None,
        }
    }
}

/// Both searches for one query term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryReport {
    pub term: String,
    pub exact: ExactResult,
    pub prefix: PrefixResult,
}

/// Renders document ids zero-based, as stored, with the source label
/// alongside: `Document 0 (a.txt) (freq 1)`.
impl fmt::Display for WordHits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Word: {}", self.word)?;
        for doc in &self.documents {
            writeln!(f, "Document {} ({}) (freq {})", doc.doc_id, doc.source, doc.frequency)?;
            for occ in &doc.occurrences {
                writeln!(f, "  Line {}, Word {}: {}", occ.line, occ.position, occ.text)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ExactResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExactResult::Found(hits) => write!(f, "{}", hits),
            ExactResult::NotFound => writeln!(f, "Word not found"),
        }
    }
}

impl fmt::Display for PrefixResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PrefixResult::Found(all) => {
                for (i, hits) in all.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", hits)?;
                }
                Ok(())
            }
            PrefixResult::NoMatches => writeln!(f, "No prefix matches found"),
        }
    }
}

impl fmt::Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "--- Exact Search ---")?;
        write!(f, "{}", self.exact)?;
        writeln!(f)?;
        writeln!(f, "--- Prefix Search ---")?;
        write!(f, "{}", self.prefix)
    }
}
