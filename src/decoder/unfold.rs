/// Trims surrounding whitespace and removes the line breaks of folded text.
///
/// The blanks that followed a line break are kept, so `"a\r\n b"` becomes
/// `"a b"`.
pub fn unfold(text: &str) -> String {
    let mut start = None;
    let mut end = 0;

    for (idx, c) in text.char_indices() {
        if !c.is_whitespace() {
            if start.is_none() {
                start = Some(idx);
            }
            end = idx + c.len_utf8();
        }
    }

    let Some(start) = start else {
        return String::new();
    };

    text[start..end]
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect()
}
