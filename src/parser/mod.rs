//! Turns a line of player input into a [`Command`].
//!
//! Tokens are scanned left to right and dropped into the first free slot
//! whose word list they belong to:
//!
//! 1. verb, if still empty and the token is a verb word
//! 2. object, if still empty and the token names an item, a blocked exit or
//!    a direction
//! 3. preposition, if still empty and the token is a preposition
//! 4. target, if a preposition has been seen, the target is still empty and
//!    the token names an item or a blocked exit
//!
//! Anything else is ignored. A slot, once filled, is never overwritten.

mod command;
mod vocabulary;

pub use command::{Command, Verb};
pub use vocabulary::{DIRECTIONS, INSTRUMENT_PREPOSITIONS, PREPOSITIONS, Vocabulary};

use tracing::debug;

#[derive(Debug, Clone)]
pub struct Parser {
    vocabulary: Vocabulary,
}

impl Parser {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Parser { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Never fails: unmatched words are skipped and missing slots stay `None`.
    pub fn parse(&self, input: &str) -> Command {
        let vocab = &self.vocabulary;
        let mut cmd = Command::default();

        for token in tokenize(input) {
            if cmd.verb.is_none() {
                if let Some(verb) = vocab.verb(&token) {
                    cmd.verb = Some(verb);
                    continue;
                }
            }

            if cmd.object.is_none() && vocab.is_object_word(&token) {
                cmd.object = Some(token);
            } else if cmd.preposition.is_none() && vocab.is_preposition(&token) {
                cmd.preposition = Some(token);
            } else if cmd.preposition.is_some()
                && cmd.target.is_none()
                && vocab.is_target_word(&token)
            {
                cmd.target = Some(token);
            }
        }

        debug!(input, command = %cmd, "parsed input");
        cmd
    }
}

/// Lower-cases and splits on whitespace. Punctuation hugging a word
/// ("chest!", "'key'") is trimmed off.
fn tokenize(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| c.is_ascii_punctuation())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
}
