pub mod constants;
pub use constants::{DEFAULT_DOCUMENTS_PATH, DEFAULT_NUMBER_OF_TOP_WORDS};
pub mod models;
pub use models::{
    Error, LocatedSentence, OccurrenceRecord, OutputFormat, ReportRenderer, SentenceSegmenter,
    Tokenizer, UnicodeSentenceSegmenter, WordIndex, WordSnifferConfig,
};
pub mod types;
pub use types::{DocumentId, DocumentLocationMap, LineNumber, LineNumberSet, Word, WordFrequency};
mod utils;
pub use utils::{flatten_sentence, list_documents, read_document, select_top_words};

use log::{info, warn};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Scans `config.documents_path` and renders a report of its most frequent words.
pub fn report_top_words(config: &WordSnifferConfig) -> Result<String, Error> {
    let segmenter = UnicodeSentenceSegmenter::new();

    report_top_words_with_segmenter(config, &segmenter)
}

/// Same as [`report_top_words`], but with a caller-supplied sentence segmenter.
///
/// The segmenter is invoked twice per reported document: once while indexing and once while
/// rendering. Sentence text is never held between the two passes.
pub fn report_top_words_with_segmenter<S: SentenceSegmenter + ?Sized>(
    config: &WordSnifferConfig,
    segmenter: &S,
) -> Result<String, Error> {
    info!("Listing documents in {}...", config.documents_path.display());
    let documents = list_documents(&config.documents_path)?;

    if documents.is_empty() {
        warn!("No documents found in {}", config.documents_path.display());
    }

    info!("Building word index...");
    let word_index = WordIndex::build(&documents, segmenter)?;

    info!("Selecting top {} words...", config.number_of_top_words);
    let top_words = select_top_words(&word_index, config.number_of_top_words);

    info!("Rendering report...");
    let report_renderer =
        ReportRenderer::new(segmenter, config.output_format, config.number_of_top_words);

    report_renderer.render(&top_words, &word_index)
}
