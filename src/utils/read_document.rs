use crate::constants::GZIP_EXTENSION;
use crate::Error;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads an entire document into memory as UTF-8 text.
///
/// The file handle is scoped to this call and closed before it returns. Documents with a
/// `.gz` extension are decompressed on the fly.
///
/// # Errors
/// - `Error::DocumentReadError` if the file cannot be opened or read.
/// - `Error::SegmentationError` if the contents are not valid UTF-8.
pub fn read_document(path: &Path) -> Result<String, Error> {
    let mut bytes = Vec::new();

    {
        let mut file = File::open(path).map_err(|e| {
            Error::DocumentReadError(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let is_gzipped = path
            .extension()
            .map_or(false, |extension| extension == GZIP_EXTENSION);

        let read_result = if is_gzipped {
            GzDecoder::new(file).read_to_end(&mut bytes)
        } else {
            file.read_to_end(&mut bytes)
        };

        read_result.map_err(|e| {
            Error::DocumentReadError(format!("Failed to read {}: {}", path.display(), e))
        })?;
    }

    String::from_utf8(bytes).map_err(|e| {
        Error::SegmentationError(format!(
            "{} is not valid UTF-8 text: {}",
            path.display(),
            e
        ))
    })
}
