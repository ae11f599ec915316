use crate::types::{DocumentId, DocumentLocationMap, LineNumber, LineNumberSet, WordFrequency};

/// Everything known about a single word: how often it occurs, and where.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceRecord {
    /// Every token match counts, including repeats within one sentence.
    pub total_count: WordFrequency,
    /// Document-local line numbers, keyed by document.
    pub locations: DocumentLocationMap,
}

impl OccurrenceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of the word on `line_number` of `document_id`.
    ///
    /// The count always increases; the line number is only stored once per document.
    pub fn record_occurrence(&mut self, document_id: &str, line_number: LineNumber) {
        self.total_count += 1;

        self.locations
            .entry(document_id.to_string())
            .or_insert_with(LineNumberSet::new)
            .insert(line_number);
    }

    /// Documents the word occurs in, ordered by identifier.
    pub fn documents(&self) -> Vec<&DocumentId> {
        self.locations.keys().collect()
    }

    /// Iterates every (document, line number) pair, documents first, then ascending lines.
    pub fn iter_locations(&self) -> impl Iterator<Item = (&DocumentId, LineNumber)> + '_ {
        self.locations.iter().flat_map(|(document_id, line_numbers)| {
            line_numbers
                .iter()
                .map(move |&line_number| (document_id, line_number))
        })
    }

    /// Total number of distinct (document, line number) pairs.
    pub fn location_count(&self) -> usize {
        self.locations.values().map(|line_numbers| line_numbers.len()).sum()
    }
}
