//! Word lists for the game
//!
//! A [`Dictionary`] is the universe of valid words for one [`Language`]:
//! secrets are drawn from it and every guess must be a member of it.

pub mod loader;

pub use loader::{DictionaryError, load};

use crate::core::Word;
use clap::ValueEnum;
use rustc_hash::FxHashMap;
use std::fmt;

/// Supported dictionary languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    En,
    Es,
}

impl Language {
    /// Tag used in dictionary file names
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered set of unique words for one language
#[derive(Debug, Clone)]
pub struct Dictionary {
    language: Language,
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary from words, keeping the first occurrence of any
    /// duplicate
    ///
    /// Emptiness is not checked here; [`load`] rejects empty files.
    pub fn from_words(language: Language, words: impl IntoIterator<Item = Word>) -> Self {
        let mut unique = Vec::new();
        let mut index = FxHashMap::default();

        for word in words {
            if index.contains_key(word.text()) {
                continue;
            }
            index.insert(word.text().to_string(), unique.len());
            unique.push(word);
        }

        Self {
            language,
            words: unique,
            index,
        }
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// All words in file order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Look up a word by its text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index.get(text).map(|&i| &self.words[i])
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn language_tags() {
        assert_eq!(Language::En.as_str(), "en");
        assert_eq!(Language::Es.to_string(), "es");
    }

    #[test]
    fn from_words_preserves_order() {
        let dict = Dictionary::from_words(Language::En, words(&["crane", "slate", "irate"]));
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.words()[0].text(), "crane");
        assert_eq!(dict.words()[2].text(), "irate");
        assert_eq!(dict.language(), Language::En);
    }

    #[test]
    fn from_words_drops_duplicates() {
        let dict = Dictionary::from_words(
            Language::En,
            words(&["crane", "slate", "crane", "irate", "slate"]),
        );
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.words()[1].text(), "slate");
    }

    #[test]
    fn lookup() {
        let dict = Dictionary::from_words(Language::Es, words(&["perro", "gatos"]));
        assert!(dict.contains("perro"));
        assert!(!dict.contains("PERRO"));
        assert!(!dict.contains("perr"));
        assert_eq!(dict.get("gatos").map(Word::text), Some("gatos"));
        assert_eq!(dict.get("lobos"), None);
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::from_words(Language::En, Vec::new());
        assert!(dict.is_empty());
    }
}
