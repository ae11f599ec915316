use crate::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists the regular files directly inside `path`.
///
/// Subdirectories are skipped rather than descended into. The result is sorted by path so
/// repeated runs over an unchanged directory see documents in the same order.
///
/// Document identifiers are the path rendered as a string, so every path must be valid
/// UTF-8 for the identifier to lead back to the same file.
///
/// # Errors
/// Returns `Error::DirectoryError` if the directory, or one of its entries, cannot be read,
/// or if a document path is not valid UTF-8.
pub fn list_documents(path: &Path) -> Result<Vec<PathBuf>, Error> {
    let entries = fs::read_dir(path).map_err(|e| {
        Error::DirectoryError(format!("Failed to read directory {}: {}", path.display(), e))
    })?;

    let mut documents = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::DirectoryError(format!(
                "Failed to read entry in {}: {}",
                path.display(),
                e
            ))
        })?;

        let entry_path = entry.path();

        if !entry_path.is_file() {
            continue;
        }

        if entry_path.to_str().is_none() {
            return Err(Error::DirectoryError(format!(
                "Document path {} is not valid UTF-8",
                entry_path.display()
            )));
        }

        documents.push(entry_path);
    }

    documents.sort();

    Ok(documents)
}
