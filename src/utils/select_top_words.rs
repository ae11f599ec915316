use crate::WordIndex;

/// Selects the `number_of_top_words` most frequent words in the index.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by total occurrence count in descending order.
/// - **Secondary:** If two words have the same count, sorts by word in ascending
///   lexicographical order for deterministic ordering.
///
/// The result has `min(number_of_top_words, vocabulary size)` entries; asking for zero
/// words yields an empty `Vec`.
///
/// ### Example:
/// ```rust
/// use word_sniffer::{select_top_words, WordIndex};
///
/// let mut index = WordIndex::new();
/// index.record_occurrence("run", "doc1.txt", 0);
/// index.record_occurrence("run", "doc1.txt", 1);
/// index.record_occurrence("Cats", "doc1.txt", 0);
/// index.record_occurrence("Dogs", "doc1.txt", 1);
///
/// let top_words = select_top_words(&index, 2);
/// assert_eq!(top_words, vec!["run", "Cats"]);
/// ```
pub fn select_top_words(index: &WordIndex, number_of_top_words: usize) -> Vec<&str> {
    if number_of_top_words == 0 {
        return Vec::new();
    }

    let mut ranked_words: Vec<(&str, usize)> = index
        .iter()
        .map(|(word, record)| (word.as_str(), record.total_count))
        .collect();

    ranked_words.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by count (descending)
            .then_with(|| a.0.cmp(b.0)) // Secondary sort by word (ascending)
    });

    ranked_words.truncate(number_of_top_words);

    ranked_words.into_iter().map(|(word, _)| word).collect()
}
