use serde::{Serialize, Deserialize};
use crate::core::types::DocId;

/// Original text of one document, kept for rendering matches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredDocument {
    pub source: String,
    pub lines: Vec<String>,
}

impl StoredDocument {
    /// 1-based line lookup
    pub fn line(&self, line_number: u32) -> Option<&str> {
        let index = (line_number as usize).checked_sub(1)?;
        self.lines.get(index).map(String::as_str)
    }
}

/// Documents indexed densely by id. A slot stays `None` when its document
/// was reserved but never loaded.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Option<StoredDocument>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        DocumentStore { documents: Vec::new() }
    }

    fn slot(&mut self, doc_id: DocId) -> &mut StoredDocument {
        let index = doc_id.as_index();
        if index >= self.documents.len() {
            self.documents.resize_with(index + 1, || None);
        }
        self.documents[index].get_or_insert_with(StoredDocument::default)
    }

    /// Reserve an id without loading a document into it
    pub fn reserve(&mut self, doc_id: DocId) {
        let index = doc_id.as_index();
        if index >= self.documents.len() {
            self.documents.resize_with(index + 1, || None);
        }
    }

    pub fn register(&mut self, doc_id: DocId, source: String) {
        self.slot(doc_id).source = source;
    }

    /// Append a line (terminator stripped) and return its 1-based number
    pub fn add_line(&mut self, doc_id: DocId, text: &str) -> u32 {
        let text = text.strip_suffix('\n').unwrap_or(text);
        let text = text.strip_suffix('\r').unwrap_or(text);

        let document = self.slot(doc_id);
        document.lines.push(text.to_string());
        document.lines.len() as u32
    }

    pub fn get_line(&self, doc_id: DocId, line_number: u32) -> Option<&str> {
        self.document(doc_id)?.line(line_number)
    }

    pub fn document(&self, doc_id: DocId) -> Option<&StoredDocument> {
        self.documents.get(doc_id.as_index())?.as_ref()
    }

    pub fn source(&self, doc_id: DocId) -> Option<&str> {
        self.document(doc_id).map(|d| d.source.as_str())
    }

    pub fn line_count(&self, doc_id: DocId) -> usize {
        self.document(doc_id).map_or(0, |d| d.lines.len())
    }

    /// Number of id slots, loaded or not
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn loaded_count(&self) -> usize {
        self.documents.iter().filter(|d| d.is_some()).count()
    }

    pub fn total_lines(&self) -> usize {
        self.documents.iter().flatten().map(|d| d.lines.len()).sum()
    }
}
