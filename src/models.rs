pub mod config;
pub use config::{OutputFormat, WordSnifferConfig};

pub mod error;
pub use error::Error;

pub mod occurrence_record;
pub use occurrence_record::OccurrenceRecord;

pub mod report_renderer;
pub use report_renderer::{LocatedSentence, ReportRenderer};

pub mod sentence_segmenter;
pub use sentence_segmenter::{SentenceSegmenter, UnicodeSentenceSegmenter};

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod word_index;
pub use word_index::WordIndex;
