use std::fmt;
use serde::{Serialize, Deserialize};

/// Zero-based document id, assigned in ingestion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub u64);

impl DocId {
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Slot in dense per-document storage
    pub fn as_index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
