use std::collections::HashMap;

use lsp_types::Uri;

use super::Document;

/// Server-side copy of the client's open documents, fed by text-document
/// sync notifications. Full sync only: every change replaces the text.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<Uri, Document>,
}

impl DocumentStore {
    pub fn new() -> DocumentStore {
        DocumentStore::default()
    }

    pub fn update_document(&mut self, uri: Uri, text: String) {
        self.documents.insert(uri, Document::new(text));
    }

    pub fn remove_document(&mut self, uri: &Uri) {
        self.documents.remove(uri);
    }

    pub fn get_document(&self, uri: &Uri) -> Option<&Document> {
        self.documents.get(uri)
    }
}
