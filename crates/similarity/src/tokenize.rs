/// Split `text` into whitespace-delimited tokens, in order.
///
/// Runs of Unicode whitespace separate tokens and never produce empty tokens.
/// No case folding or punctuation handling is applied.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
