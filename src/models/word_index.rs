use crate::types::{LineNumber, Word};
use crate::utils::read_document;
use crate::{Error, OccurrenceRecord, SentenceSegmenter, Tokenizer};

use log::{debug, info};
use std::collections::hash_map::Iter;
use std::collections::HashMap;
use std::path::PathBuf;

/// Maps every observed word to its `OccurrenceRecord`.
///
/// Only word locations are retained, never sentence text, so memory grows with vocabulary
/// and location breadth rather than with the size of the documents.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    entries: HashMap<Word, OccurrenceRecord>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index over `documents`, reading and segmenting each one in turn.
    ///
    /// Any document that cannot be read or segmented aborts the build.
    pub fn build<S: SentenceSegmenter + ?Sized>(
        documents: &[PathBuf],
        segmenter: &S,
    ) -> Result<Self, Error> {
        let mut index = Self::new();
        let tokenizer = Tokenizer::new();

        for (document_idx, document_path) in documents.iter().enumerate() {
            info!(
                "Indexing {} ({} of {})...",
                document_path.display(),
                document_idx + 1,
                documents.len()
            );

            let document_id = document_path.to_str().ok_or_else(|| {
                Error::DocumentReadError(format!(
                    "Document path {} is not valid UTF-8",
                    document_path.display()
                ))
            })?;

            let text = read_document(document_path)?;

            index.index_text(document_id, &text, segmenter, tokenizer)?;
        }

        info!(
            "Indexed {} distinct words across {} documents",
            index.len(),
            documents.len()
        );

        Ok(index)
    }

    /// Adds every word of `text` to the index under `document_id`.
    pub fn index_text<S: SentenceSegmenter + ?Sized>(
        &mut self,
        document_id: &str,
        text: &str,
        segmenter: &S,
        tokenizer: Tokenizer,
    ) -> Result<(), Error> {
        let sentences = segmenter.segment(text)?;

        debug!("{}: {} sentences", document_id, sentences.len());

        for (line_number, sentence) in sentences.iter().enumerate() {
            for word in tokenizer.tokenize(sentence) {
                self.record_occurrence(word, document_id, line_number);
            }
        }

        Ok(())
    }

    /// Records a single token match, creating the word's record on first sight.
    pub fn record_occurrence(&mut self, word: &str, document_id: &str, line_number: LineNumber) {
        self.entries
            .entry(word.to_string())
            .or_insert_with(OccurrenceRecord::new)
            .record_occurrence(document_id, line_number);
    }

    pub fn get(&self, word: &str) -> Option<&OccurrenceRecord> {
        self.entries.get(word)
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the index in arbitrary order.
    pub fn iter(&self) -> Iter<'_, Word, OccurrenceRecord> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a WordIndex {
    type Item = (&'a Word, &'a OccurrenceRecord);
    type IntoIter = Iter<'a, Word, OccurrenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
