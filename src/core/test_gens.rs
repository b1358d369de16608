// Proptest generators for core types.
// Small alphabets are mixed in so repeated letters show up often.

use proptest::prelude::*;

use crate::config::{ALPHABET, NUM_LETTERS};
use crate::core::Word;

fn word_over(letters: &'static [u8]) -> impl Strategy<Value = Word> {
    prop::collection::vec(prop::sample::select(letters), NUM_LETTERS).prop_map(|bytes| {
        let text: String = bytes.into_iter().map(char::from).collect();
        Word::new(text).expect("generated word is valid")
    })
}

/// Generate a random Word, often with repeated letters
pub fn word() -> impl Strategy<Value = Word> {
    prop_oneof![
        word_over(ALPHABET.as_bytes()),
        word_over(b"abcde"),
        word_over(b"ab"),
    ]
}
