// File: src/core/normalize.rs

/// Projects a raw token onto the normalized alphabet: ASCII letters
/// (lower-cased) and apostrophes, relative order preserved. Everything
/// else — digits, punctuation, symbols, non-ASCII bytes — is dropped.
/// O(n) in the token length; total, never fails.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for &b in raw.as_bytes() {
        if b.is_ascii_alphabetic() {
            out.push(b.to_ascii_lowercase() as char);
        } else if b == b'\'' {
            out.push('\'');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Hello,"), "hello");
        assert_eq!(normalize("WORLD!?"), "world");
    }

    #[test]
    fn keeps_apostrophes_in_place() {
        assert_eq!(normalize("Don't"), "don't");
        assert_eq!(normalize("'tis"), "'tis");
    }

    #[test]
    fn non_alphabetic_tokens_normalize_to_empty() {
        assert_eq!(normalize("1234"), "");
        assert_eq!(normalize("--"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        // Only ASCII participates; multibyte characters vanish.
        assert_eq!(normalize("naïve"), "nave");
        assert_eq!(normalize("héllo"), "hllo");
    }

    #[test]
    fn digits_inside_words_are_removed() {
        assert_eq!(normalize("c4t"), "ct");
    }
}
