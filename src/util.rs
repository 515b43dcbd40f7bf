//! Small text-matching helpers shared by the classifier and extractors.
//!
//! All matching is ASCII case-insensitive. Keyword tables are plain ASCII,
//! and ASCII folding never changes byte offsets, so positions found in the
//! folded text are valid char boundaries in the original string. That lets
//! extractors slice the original and keep the user's casing.

/// Strip `prefix` from the start of `text`, ignoring ASCII case.
pub fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    match text.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&text[prefix.len()..]),
        _ => None,
    }
}

/// Byte offset of the first occurrence of `needle` in `haystack`, ignoring
/// ASCII case.
pub fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}

/// Slice of `text` after the first case-insensitive occurrence of `phrase`.
pub fn after_phrase<'a>(text: &'a str, phrase: &str) -> Option<&'a str> {
    find_ci(text, phrase).map(|pos| &text[pos + phrase.len()..])
}

/// True if `word` appears as a whole word in `text`.
///
/// Tokens are runs of alphanumerics plus apostrophes, so "what's" stays one
/// token and "hi!" still matches "hi". Substring hits inside longer words
/// ("this", "notepad") do not count.
pub fn contains_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_ascii_alphanumeric() && c != '\'')
        .any(|token| token.eq_ignore_ascii_case(word))
}

/// True if any of `words` appears as a whole word in `text`.
pub fn contains_any_word(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| contains_word(text, word))
}

/// True if any of `phrases` appears as a substring, ignoring ASCII case.
pub fn contains_any_phrase(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| find_ci(text, phrase).is_some())
}

/// True if `text` starts with any of `prefixes`, ignoring ASCII case.
pub fn starts_with_any(text: &str, prefixes: &[&str]) -> bool {
    prefixes
        .iter()
        .any(|prefix| strip_prefix_ci(text, prefix).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix_ci() {
        assert_eq!(strip_prefix_ci("Hello world", "hello "), Some("world"));
        assert_eq!(strip_prefix_ci("HELLO", "hello"), Some(""));
        assert_eq!(strip_prefix_ci("help", "hello"), None);
        assert_eq!(strip_prefix_ci("hi", "hello"), None);
    }

    #[test]
    fn test_strip_prefix_ci_multibyte_safe() {
        // Prefix length lands mid-char; must not match or panic.
        assert_eq!(strip_prefix_ci("héllo", "he"), None);
    }

    #[test]
    fn test_find_ci() {
        assert_eq!(find_ci("Search For Cats", "search for "), Some(0));
        assert_eq!(find_ci("please Google rust", "google "), Some(7));
        assert_eq!(find_ci("nothing here", "google"), None);
    }

    #[test]
    fn test_after_phrase_keeps_casing() {
        assert_eq!(after_phrase("My Name Is Alex", "my name is "), Some("Alex"));
        assert_eq!(after_phrase("weather", "my name is "), None);
    }

    #[test]
    fn test_contains_word_boundaries() {
        assert!(contains_word("hi there", "hi"));
        assert!(contains_word("Hi!", "hi"));
        assert!(!contains_word("this is fine", "hi"));
        assert!(!contains_word("open the notepad", "note"));
        // Apostrophes keep contractions a single token.
        assert!(!contains_word("what's up", "what"));
        assert!(contains_word("what's up", "what's"));
    }

    #[test]
    fn test_contains_any_phrase() {
        assert!(contains_any_phrase("Good Morning everyone", &["good morning"]));
        assert!(!contains_any_phrase("morning", &["good morning"]));
    }

    #[test]
    fn test_starts_with_any() {
        assert!(starts_with_any("What is Rust?", &["what is ", "who is "]));
        assert!(!starts_with_any("tell me what is rust", &["what is "]));
    }
}
