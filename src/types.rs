use std::collections::{BTreeMap, BTreeSet};

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a word as an owned `String`. Words are case-sensitive and never normalized.
pub type Word = String;

/// Identifies a document by its path, rendered as a string (e.g. `./docs/doc1.txt`).
pub type DocumentId = String;

/// The zero-based position of a sentence within a single document's segmentation.
///
/// Line numbers are document-local and only meaningful when paired with a `DocumentId`.
pub type LineNumber = usize;

/// Represents the total number of occurrences of a word across all documents.
pub type WordFrequency = usize;

/// The distinct line numbers, within one document, where a word occurs at least once.
pub type LineNumberSet = BTreeSet<LineNumber>;

/// Maps each document a word occurs in to the set of line numbers it occurs on.
///
/// Ordered so that documents iterate by identifier and line numbers ascend.
pub type DocumentLocationMap = BTreeMap<DocumentId, LineNumberSet>;
