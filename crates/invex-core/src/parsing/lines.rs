/// Split raw document text into non-empty trimmed lines in original order.
///
/// Form feeds (pdftotext page separators) are treated as line breaks. The
/// iterator borrows the input, so callers can restart by calling again on
/// the same text. Empty input yields an empty sequence.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c| c == '\n' || c == '\x0c')
        .map(str::trim)
        .filter(|line| !line.is_empty())
}
