pub mod flatten_sentence;
pub use flatten_sentence::flatten_sentence;

pub mod list_documents;
pub use list_documents::list_documents;

pub mod read_document;
pub use read_document::read_document;

pub mod select_top_words;
pub use select_top_words::select_top_words;
