// src/core/tokenizer.rs
use regex::Regex;
use std::sync::OnceLock;

// A word is a maximal run of word characters (letters, digits, underscore),
// ampersands or forward slashes. Everything else separates words.
static WORD_RE: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"[\w/&]+").unwrap())
}

/// Extracts the words of a single line, left to right. Matching never spans
/// lines because input arrives pre-split. Any line, including an empty one,
/// yields zero or more words without failing.
pub fn words(line: &str) -> impl Iterator<Item = &str> + '_ {
    word_pattern().find_iter(line).map(|m| m.as_str())
}

/// Character (not byte) length of a word.
#[must_use]
pub fn word_length(word: &str) -> u64 {
    u64::try_from(word.chars().count()).unwrap_or(u64::MAX)
}
