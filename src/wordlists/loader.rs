//! Dictionary file loading
//!
//! Dictionaries live at `<base>/words_<lang>.txt`, one word per line.

use super::{Dictionary, Language};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Prefix shared by every dictionary file name
pub const BASE_FILENAME: &str = "words";

/// Errors raised while loading a dictionary
///
/// All of these are fatal at startup; there is no partial dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("no dictionary found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read dictionary {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid word {content:?} on line {line} of {}", .path.display())]
    Format {
        path: PathBuf,
        line: usize,
        content: String,
        #[source]
        source: crate::core::WordError,
    },

    #[error("dictionary {} contains no words", .path.display())]
    Empty { path: PathBuf },
}

/// Path of the dictionary file for `language` under `base`
#[must_use]
pub fn dictionary_path(base: &Path, language: Language) -> PathBuf {
    base.join(format!("{BASE_FILENAME}_{}.txt", language.as_str()))
}

/// Load and validate the dictionary for `language` from `base`
///
/// Trailing whitespace is stripped from each line and blank lines are
/// skipped. Every other line must be a valid [`Word`]; the first one that
/// is not aborts the load. Duplicate words are kept once.
///
/// # Errors
///
/// - [`DictionaryError::NotFound`] if the file does not exist
/// - [`DictionaryError::Io`] if it exists but cannot be read
/// - [`DictionaryError::Format`] on a malformed line
/// - [`DictionaryError::Empty`] if no words remain
///
/// # Examples
/// ```no_run
/// use ruchle::wordlists::{Language, load};
///
/// let dictionary = load("data", Language::En).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load(base: impl AsRef<Path>, language: Language) -> Result<Dictionary, DictionaryError> {
    let path = dictionary_path(base.as_ref(), language);

    let content = fs::read_to_string(&path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            DictionaryError::NotFound { path: path.clone() }
        } else {
            DictionaryError::Io {
                path: path.clone(),
                source,
            }
        }
    })?;

    let mut words = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed).map_err(|source| DictionaryError::Format {
            path: path.clone(),
            line: i + 1,
            content: trimmed.to_string(),
            source,
        })?;
        words.push(word);
    }

    let total = words.len();
    let dictionary = Dictionary::from_words(language, words);

    if dictionary.is_empty() {
        return Err(DictionaryError::Empty { path });
    }
    if dictionary.len() < total {
        warn!(
            path = %path.display(),
            duplicates = total - dictionary.len(),
            "dictionary contains duplicate words"
        );
    }

    debug!(path = %path.display(), %language, words = dictionary.len(), "loaded dictionary");
    Ok(dictionary)
}
