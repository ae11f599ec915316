/// Collapses each line break inside a sentence into a single space, so it prints on one line.
pub fn flatten_sentence(sentence: &str) -> String {
    sentence
        .replace("\r\n", " ") // Windows line endings count as one break
        .replace('\n', " ")
        .replace('\r', " ")
}
