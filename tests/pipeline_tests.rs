use std::cell::Cell;
use std::fs;
use test_utils::constants::SCENARIO_FILES_DIRECTORY;
use test_utils::{create_corpus, document_id, write_document};
use word_sniffer::{
    report_top_words, report_top_words_with_segmenter, Error, OutputFormat, SentenceSegmenter,
    UnicodeSentenceSegmenter, WordSnifferConfig,
};

/// Delegates to the default segmenter while counting how often it is invoked.
struct CountingSegmenter {
    inner: UnicodeSentenceSegmenter,
    calls: Cell<usize>,
}

impl SentenceSegmenter for CountingSegmenter {
    fn segment<'t>(&self, text: &'t str) -> Result<Vec<&'t str>, Error> {
        self.calls.set(self.calls.get() + 1);
        self.inner.segment(text)
    }
}

/// Treats every non-empty line as a sentence.
struct LineSegmenter;

impl SentenceSegmenter for LineSegmenter {
    fn segment<'t>(&self, text: &'t str) -> Result<Vec<&'t str>, Error> {
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_report() {
        let config = WordSnifferConfig::new(SCENARIO_FILES_DIRECTORY.as_path(), 2);

        let report = report_top_words(&config).expect("Failed to report top words");

        let doc1 = document_id(&SCENARIO_FILES_DIRECTORY, "doc1.txt");
        let doc2 = document_id(&SCENARIO_FILES_DIRECTORY, "doc2.txt");

        assert!(report.starts_with(
            "Top 2 most common words (and the corresponding sentences) in descending order:\n"
        ));
        assert_eq!(report.matches("The word '").count(), 2);
        assert!(report.contains("The word 'Cats' Appears: 3 times\n"));
        assert!(report.contains(&format!(
            "The word 'run' Appears: 3 times\n\
             In the following documents: {doc1}, {doc2}\n\
             In the following sentences:\n\
             {doc1} line:0: Cats run.\n\
             {doc1} line:1: Dogs run fast.\n\
             {doc2} line:1: Cats run fast too.\n",
            doc1 = doc1,
            doc2 = doc2
        )));
    }

    #[test]
    fn test_report_is_idempotent() {
        let config = WordSnifferConfig::new(SCENARIO_FILES_DIRECTORY.as_path(), 10);

        let first = report_top_words(&config).expect("Failed to report top words");
        let second = report_top_words(&config).expect("Failed to report top words");

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_directory_yields_empty_report() {
        let corpus = create_corpus(&[]);
        let config = WordSnifferConfig::new(corpus.path(), 3);

        let report = report_top_words(&config).expect("Failed to report top words");

        assert_eq!(
            report,
            "Top 3 most common words (and the corresponding sentences) in descending order:\n\n"
        );
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let corpus = create_corpus(&[]);
        let config = WordSnifferConfig::new(corpus.path().join("nope"), 3);

        let result = report_top_words(&config);

        assert!(matches!(result, Err(Error::DirectoryError(_))));
    }

    #[test]
    fn test_unreadable_document_is_fatal() {
        let corpus = create_corpus(&[("good.txt", "Good words here.")]);
        fs::write(corpus.path().join("bad.txt"), [0xffu8, 0xfe])
            .expect("Failed to write document");
        let config = WordSnifferConfig::new(corpus.path(), 3);

        let result = report_top_words(&config);

        assert!(matches!(result, Err(Error::SegmentationError(_))));
    }

    #[test]
    fn test_request_more_words_than_exist() {
        let corpus = create_corpus(&[("doc.txt", "One two.")]);
        let config = WordSnifferConfig::new(corpus.path(), 10);

        let report = report_top_words(&config).expect("Failed to report top words");

        assert!(report.starts_with("Top 10 most common words"));
        assert_eq!(report.matches("The word '").count(), 2);
        assert!(report.contains("The word 'One' Appears: 1 times\n"));
        assert!(report.contains("The word 'two' Appears: 1 times\n"));
    }

    #[test]
    fn test_zero_top_words() {
        let config = WordSnifferConfig::new(SCENARIO_FILES_DIRECTORY.as_path(), 0);

        let report = report_top_words(&config).expect("Failed to report top words");

        assert_eq!(report.matches("The word '").count(), 0);
    }

    #[test]
    fn test_nested_documents_are_ignored() {
        let corpus = create_corpus(&[("top.txt", "Surface words.")]);
        let nested_dir = corpus.path().join("nested");
        fs::create_dir(&nested_dir).expect("Failed to create nested directory");
        write_document(&nested_dir, "deep.txt", "Hidden Hidden Hidden.");

        let config = WordSnifferConfig::new(corpus.path(), 10);
        let report = report_top_words(&config).expect("Failed to report top words");

        assert!(!report.contains("Hidden"));
        assert!(report.contains("The word 'Surface' Appears: 1 times\n"));
    }

    #[test]
    fn test_csv_report() {
        let config = WordSnifferConfig::new(SCENARIO_FILES_DIRECTORY.as_path(), 2)
            .with_output_format(OutputFormat::Csv);

        let report = report_top_words(&config).expect("Failed to report top words");

        // Header plus three locations each for "Cats" and "run"
        assert_eq!(report.lines().count(), 7);
        assert!(report.starts_with("word,total_count,document,line_number,sentence"));
    }

    #[test]
    fn test_segmenter_runs_in_both_passes() {
        let segmenter = CountingSegmenter {
            inner: UnicodeSentenceSegmenter::new(),
            calls: Cell::new(0),
        };
        let config = WordSnifferConfig::new(SCENARIO_FILES_DIRECTORY.as_path(), 1);

        report_top_words_with_segmenter(&config, &segmenter).expect("Failed to report top words");

        // Two documents indexed, then both re-read to render "Cats"
        assert_eq!(segmenter.calls.get(), 4);
    }

    #[test]
    fn test_custom_segmenter() {
        let corpus = create_corpus(&[("poem.txt", "roses are red\nviolets are blue\n")]);
        let config = WordSnifferConfig::new(corpus.path(), 1);

        let report = report_top_words_with_segmenter(&config, &LineSegmenter)
            .expect("Failed to report top words");

        let poem = document_id(corpus.path(), "poem.txt");

        assert!(report.contains("The word 'are' Appears: 2 times\n"));
        assert!(report.contains(&format!("{} line:0: roses are red\n", poem)));
        assert!(report.contains(&format!("{} line:1: violets are blue\n", poem)));
    }

    #[cfg(unix)]
    #[test]
    fn test_report_fails_on_non_utf8_file_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let corpus = create_corpus(&[("plain.txt", "Plain words.")]);
        fs::write(
            corpus.path().join(OsStr::from_bytes(b"caf\xe9.txt")),
            "Plain words.",
        )
        .expect("Failed to write non-UTF-8 document");

        let config = WordSnifferConfig::new(corpus.path(), 1);
        let result = report_top_words(&config);

        assert!(matches!(result, Err(Error::DirectoryError(_))));
    }
}
