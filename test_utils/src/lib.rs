use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod constants;

/// Creates a temporary directory holding one file per `(file_name, contents)` pair.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn create_corpus(documents: &[(&str, &str)]) -> TempDir {
    let corpus_dir = tempfile::tempdir().expect("Failed to create temporary corpus directory");

    for (file_name, contents) in documents {
        write_document(corpus_dir.path(), file_name, contents);
    }

    corpus_dir
}

/// Writes a plain text document and returns its path.
pub fn write_document(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let document_path = dir.join(file_name);
    fs::write(&document_path, contents).expect("Failed to write test document");
    document_path
}

/// Writes a gzip-compressed document and returns its path.
pub fn write_gzip_document(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let document_path = dir.join(file_name);
    let file = File::create(&document_path).expect("Failed to create gzip test document");

    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(contents.as_bytes())
        .expect("Failed to compress test document");
    encoder.finish().expect("Failed to finalize compression");

    document_path
}

/// The identifier the library assigns to `file_name` inside `dir`.
pub fn document_id(dir: &Path, file_name: &str) -> String {
    dir.join(file_name).display().to_string()
}
