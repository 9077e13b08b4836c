use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::analysis::filters::stopword::DEFAULT_STOP_WORDS;
use crate::core::error::{Error, ErrorKind, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound on documents accepted by the writer, `None` for unbounded
    pub max_documents: Option<usize>,
    /// Longest query term accepted, in bytes
    pub max_term_length: usize,
    pub stop_words: Vec<String>,

    // Ingestion
    pub parallel_ingest: bool,          // Read + tokenize files on a rayon pool
    pub ingest_threads: Option<usize>,  // None = rayon default
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_documents: None,
            max_term_length: 100,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            parallel_ingest: false,
            ingest_threads: None,
        }
    }
}

impl Config {
    /// Load a JSON config file; missing fields fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_term_length == 0 {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "max_term_length must be at least 1".to_string(),
            ));
        }
        if self.max_documents == Some(0) {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "max_documents must be at least 1 when set".to_string(),
            ));
        }
        if self.ingest_threads == Some(0) {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "ingest_threads must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
