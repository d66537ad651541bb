use unicode_segmentation::UnicodeSegmentation;

/// Number of user-perceived characters (extended grapheme clusters) in `text`.
pub(crate) fn char_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Split `text` into user-perceived characters.
pub(crate) fn chars(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Drop the last user-perceived character of `text`.
pub(crate) fn without_last_char(text: &str) -> &str {
    match text.grapheme_indices(true).next_back() {
        Some((start, _)) => &text[..start],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combining_sequences_count_as_one_char() {
        // "e" + COMBINING ACUTE ACCENT
        assert_eq!(char_len("e\u{301}"), 1);
        assert_eq!(char_len("ab"), 2);
        assert_eq!(chars("a\u{301}b"), vec!["a\u{301}", "b"]);
        assert_eq!(without_last_char("12e\u{301}"), "12");
        assert_eq!(without_last_char(""), "");
    }
}
