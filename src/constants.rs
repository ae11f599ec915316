pub const DEFAULT_DOCUMENTS_PATH: &str = "./production_docs";

pub const DEFAULT_NUMBER_OF_TOP_WORDS: usize = 3;

/// Number of `*` characters in the line separating word blocks of a text report.
pub const REPORT_SEPARATOR_WIDTH: usize = 80;

pub const REPORT_SEPARATOR_CHAR: char = '*';

/// Documents with this extension are decompressed before being read.
pub const GZIP_EXTENSION: &str = "gz";

pub const CSV_REPORT_HEADERS: [&str; 5] =
    ["word", "total_count", "document", "line_number", "sentence"];
