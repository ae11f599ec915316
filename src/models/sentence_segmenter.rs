use crate::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Splits raw document text into an ordered sequence of sentences.
///
/// The position of a sentence in the returned `Vec` is its line number within the document.
/// Both the indexing pass and the rendering pass obtain sentences exclusively through this
/// trait, so implementations must be deterministic for identical input text.
pub trait SentenceSegmenter {
    fn segment<'t>(&self, text: &'t str) -> Result<Vec<&'t str>, Error>;
}

/// Segments text on Unicode sentence boundaries (UAX #29).
///
/// Single line breaks inside a paragraph do not end a sentence, so hard-wrapped prose keeps
/// its sentences intact (the returned slices still contain the embedded line breaks). Blank
/// lines always end a sentence. Sentences are trimmed and whitespace-only segments are dropped.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnicodeSentenceSegmenter;

impl UnicodeSentenceSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Returns a copy of `text` with every line break that does not border a blank line
    /// replaced by spaces.
    ///
    /// Only single-byte characters are substituted, so byte offsets into the returned string
    /// are valid offsets into `text`.
    fn mask_soft_line_breaks(text: &str) -> String {
        let mut masked = String::with_capacity(text.len());
        let mut lines = text.split_inclusive('\n').peekable();

        while let Some(line) = lines.next() {
            let body = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
            let terminator = &line[body.len()..];

            let is_blank = body.trim().is_empty();
            let next_is_blank = lines.peek().map_or(true, |next| next.trim().is_empty());

            masked.push_str(body);

            if is_blank || next_is_blank {
                masked.push_str(terminator);
            } else {
                masked.extend(terminator.chars().map(|_| ' '));
            }
        }

        masked
    }
}

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment<'t>(&self, text: &'t str) -> Result<Vec<&'t str>, Error> {
        let masked = Self::mask_soft_line_breaks(text);

        let sentences = masked
            .split_sentence_bound_indices()
            .filter_map(|(offset, segment)| {
                text.get(offset..offset + segment.len())
                    .map(str::trim)
                    .filter(|sentence| !sentence.is_empty())
            })
            .collect();

        Ok(sentences)
    }
}
