pub mod document_store;
