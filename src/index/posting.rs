use serde::{Serialize, Deserialize};
use crate::core::types::DocId;

/// Where a word appeared: 1-based line and word position within the line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub line: u32,
    pub position: u32,
}

/// One word's occurrences within one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub frequency: u32,
    pub occurrences: Vec<Occurrence>,  // In ingestion order
}

impl Posting {
    pub fn new(doc_id: DocId, occurrence: Occurrence) -> Self {
        Posting {
            doc_id,
            frequency: 1,
            occurrences: vec![occurrence],
        }
    }

    pub fn record(&mut self, occurrence: Occurrence) {
        self.frequency += 1;
        self.occurrences.push(occurrence);
    }
}

/// Posting list for a term
/// Note: Sorted by doc_id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingList {
    pub postings: Vec<Posting>,
}

impl PostingList {
    pub fn new() -> Self {
        PostingList {
            postings: Vec::new(),
        }
    }

    /// Record one occurrence, creating the document's posting on first sight
    pub fn add_occurrence(&mut self, doc_id: DocId, occurrence: Occurrence) {
        // Ingestion runs in doc_id order, so the common case is the last slot
        if let Some(last) = self.postings.last_mut() {
            if last.doc_id == doc_id {
                last.record(occurrence);
                return;
            }
        }

        match self.postings.binary_search_by_key(&doc_id, |p| p.doc_id) {
            Ok(pos) => self.postings[pos].record(occurrence),
            Err(pos) => self.postings.insert(pos, Posting::new(doc_id, occurrence)),
        }
    }

    pub fn get(&self, doc_id: DocId) -> Option<&Posting> {
        self.postings
            .binary_search_by_key(&doc_id, |p| p.doc_id)
            .ok()
            .map(|pos| &self.postings[pos])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Posting> {
        self.postings.iter()
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn doc_freq(&self) -> u32 {
        self.postings.len() as u32
    }

    pub fn total_freq(&self) -> u64 {
        self.postings.iter().map(|p| p.frequency as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(line: u32, position: u32) -> Occurrence {
        Occurrence { line, position }
    }

    #[test]
    fn first_occurrence_creates_posting() {
        let mut list = PostingList::new();
        list.add_occurrence(DocId(0), occ(1, 2));

        assert_eq!(list.len(), 1);
        let posting = list.get(DocId(0)).unwrap();
        assert_eq!(posting.frequency, 1);
        assert_eq!(posting.occurrences, vec![occ(1, 2)]);
    }

    #[test]
    fn repeat_occurrence_updates_existing() {
        let mut list = PostingList::new();
        list.add_occurrence(DocId(0), occ(1, 2));
        list.add_occurrence(DocId(0), occ(3, 1));

        assert_eq!(list.len(), 1);
        let posting = list.get(DocId(0)).unwrap();
        assert_eq!(posting.frequency, 2);
        assert_eq!(posting.occurrences, vec![occ(1, 2), occ(3, 1)]);
    }

    #[test]
    fn postings_sorted_by_doc_id() {
        let mut list = PostingList::new();
        list.add_occurrence(DocId(2), occ(1, 1));
        list.add_occurrence(DocId(0), occ(1, 1));
        list.add_occurrence(DocId(1), occ(1, 1));
        list.add_occurrence(DocId(0), occ(2, 1));

        let ids: Vec<u64> = list.iter().map(|p| p.doc_id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(list.doc_freq(), 3);
        assert_eq!(list.total_freq(), 4);
    }
}
