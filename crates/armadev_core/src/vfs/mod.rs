mod document;
mod document_store;
mod file_uri_handler;

pub use document::Document;
pub use document_store::DocumentStore;
pub use file_uri_handler::{file_path_to_uri, uri_to_file_path};
