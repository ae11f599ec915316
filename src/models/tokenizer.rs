#[derive(Copy, Clone, Debug, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Whether `c` can be part of a word: any alphanumeric character, or an apostrophe.
    pub fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '\''
    }

    /// Splits a sentence into its words, in order, keeping repeats.
    ///
    /// A word is a maximal run of alphanumeric characters and apostrophes. Everything else
    /// (whitespace, punctuation, symbols) separates words and is discarded.
    ///
    /// Note: This explicitly does not modify the case of the text.
    pub fn tokenize(self, sentence: &str) -> Vec<&str> {
        sentence
            .split(|c: char| !Self::is_word_char(c))
            .filter(|word| !word.is_empty())
            .collect()
    }
}
