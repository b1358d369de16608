//! Secret word selection
//!
//! The random source is injected so games can be replayed from a seed.

use super::GameError;
use crate::core::Word;
use crate::wordlists::Dictionary;
use rand::prelude::*;
use tracing::{debug, trace};

/// Pick one word uniformly at random from `dictionary`
///
/// Calls are independent; the same word may come up in consecutive games.
///
/// # Errors
///
/// Returns [`GameError::EmptyDictionary`] if the dictionary has no words.
pub fn pick<'a, R: Rng + ?Sized>(
    dictionary: &'a Dictionary,
    rng: &mut R,
) -> Result<&'a Word, GameError> {
    let word = dictionary
        .words()
        .choose(rng)
        .ok_or(GameError::EmptyDictionary)?;
    debug!(words = dictionary.len(), "picked secret");
    trace!(secret = %word, "secret word");
    Ok(word)
}

/// Seedable source of secret words
///
/// `Randomizer::new(Some(seed))` replays the same sequence of secrets;
/// `Randomizer::new(None)` draws from OS entropy.
pub struct Randomizer {
    rng: StdRng,
}

impl Randomizer {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self { rng }
    }

    /// Pick a secret from `dictionary`
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyDictionary`] if the dictionary has no words.
    pub fn pick<'a>(&mut self, dictionary: &'a Dictionary) -> Result<&'a Word, GameError> {
        pick(dictionary, &mut self.rng)
    }
}
