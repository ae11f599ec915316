use crate::constants::{CSV_REPORT_HEADERS, REPORT_SEPARATOR_CHAR, REPORT_SEPARATOR_WIDTH};
use crate::types::{DocumentId, LineNumber};
use crate::utils::{flatten_sentence, read_document};
use crate::{Error, OccurrenceRecord, OutputFormat, SentenceSegmenter, WordIndex};

use log::info;
use std::io::Write;
use std::path::Path;

/// A sentence fetched back from its document during the rendering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedSentence {
    pub document_id: DocumentId,
    pub line_number: LineNumber,
    /// Sentence text with line breaks flattened to spaces.
    pub sentence: String,
}

/// Renders the final report, re-reading documents to recover the sentences each word occurs in.
pub struct ReportRenderer<'a, S: SentenceSegmenter + ?Sized> {
    segmenter: &'a S,
    output_format: OutputFormat,
    number_of_top_words: usize,
}

impl<'a, S: SentenceSegmenter + ?Sized> ReportRenderer<'a, S> {
    /// `number_of_top_words` is the count that was requested, which the text header echoes
    /// even when fewer words exist.
    pub fn new(segmenter: &'a S, output_format: OutputFormat, number_of_top_words: usize) -> Self {
        Self {
            segmenter,
            output_format,
            number_of_top_words,
        }
    }

    /// Renders the whole report into memory; nothing is returned if any document fails.
    pub fn render(&self, top_words: &[&str], index: &WordIndex) -> Result<String, Error> {
        let bytes = match self.output_format {
            OutputFormat::Text => self.render_text(top_words, index)?,
            OutputFormat::Csv => self.render_csv(top_words, index)?,
        };

        String::from_utf8(bytes)
            .map_err(|e| Error::ReportError(format!("Report is not valid UTF-8: {}", e)))
    }

    /// Re-segments every document the record points into and fetches the referenced sentences.
    ///
    /// Each document is read once per call. Sentences come back in the record's location
    /// order: by document, then by ascending line number.
    pub fn locate_sentences(
        &self,
        record: &OccurrenceRecord,
    ) -> Result<Vec<LocatedSentence>, Error> {
        let mut located_sentences = Vec::with_capacity(record.location_count());

        for (document_id, line_numbers) in &record.locations {
            let text = read_document(Path::new(document_id))?;
            let sentences = self.segmenter.segment(&text)?;

            for &line_number in line_numbers {
                let sentence = sentences.get(line_number).ok_or_else(|| {
                    Error::StaleLocationError(format!(
                        "{} line:{} does not exist; the document has {} sentences",
                        document_id,
                        line_number,
                        sentences.len()
                    ))
                })?;

                located_sentences.push(LocatedSentence {
                    document_id: document_id.clone(),
                    line_number,
                    sentence: flatten_sentence(sentence),
                });
            }
        }

        Ok(located_sentences)
    }

    fn get_record<'i>(index: &'i WordIndex, word: &str) -> Result<&'i OccurrenceRecord, Error> {
        index
            .get(word)
            .ok_or_else(|| Error::Other(format!("'{}' is not in the word index", word)))
    }

    fn render_text(&self, top_words: &[&str], index: &WordIndex) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        let separator: String = std::iter::repeat(REPORT_SEPARATOR_CHAR)
            .take(REPORT_SEPARATOR_WIDTH)
            .collect();

        writeln!(
            out,
            "Top {} most common words (and the corresponding sentences) in descending order:",
            self.number_of_top_words
        )?;
        writeln!(out)?;

        for word in top_words {
            info!("Rendering sentences for '{}'...", word);

            let record = Self::get_record(index, word)?;
            let documents: Vec<&str> = record
                .documents()
                .into_iter()
                .map(|document_id| document_id.as_str())
                .collect();

            writeln!(out, "The word '{}' Appears: {} times", word, record.total_count)?;
            writeln!(out, "In the following documents: {}", documents.join(", "))?;
            writeln!(out, "In the following sentences:")?;

            for located in self.locate_sentences(record)? {
                writeln!(
                    out,
                    "{} line:{}: {}",
                    located.document_id, located.line_number, located.sentence
                )?;
            }

            writeln!(out)?;
            writeln!(out, "{}", separator)?;
            writeln!(out)?;
        }

        Ok(out)
    }

    fn render_csv(&self, top_words: &[&str], index: &WordIndex) -> Result<Vec<u8>, Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_REPORT_HEADERS)?;

        for word in top_words {
            info!("Rendering sentences for '{}'...", word);

            let record = Self::get_record(index, word)?;
            let total_count = record.total_count.to_string();

            for located in self.locate_sentences(record)? {
                writer.write_record([
                    *word,
                    total_count.as_str(),
                    located.document_id.as_str(),
                    located.line_number.to_string().as_str(),
                    located.sentence.as_str(),
                ])?;
            }
        }

        writer
            .into_inner()
            .map_err(|e| Error::ReportError(format!("Failed to flush CSV report: {}", e)))
    }
}
