use crate::constants::{DEFAULT_DOCUMENTS_PATH, DEFAULT_NUMBER_OF_TOP_WORDS};
use crate::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How the final report is written out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable blocks, one per word, separated by a line of `*`.
    #[default]
    Text,
    /// One CSV record per (word, document, line number).
    Csv,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(Error::ConfigError(format!(
                "Unknown output format '{}' (expected 'text' or 'csv')",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Everything a single run needs; passed explicitly into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSnifferConfig {
    /// Directory whose top-level files are analysed.
    pub documents_path: PathBuf,
    /// How many of the most frequent words to report.
    pub number_of_top_words: usize,
    pub output_format: OutputFormat,
}

impl WordSnifferConfig {
    pub fn new(documents_path: impl Into<PathBuf>, number_of_top_words: usize) -> Self {
        Self {
            documents_path: documents_path.into(),
            number_of_top_words,
            output_format: OutputFormat::default(),
        }
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }
}

impl Default for WordSnifferConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DOCUMENTS_PATH, DEFAULT_NUMBER_OF_TOP_WORDS)
    }
}
