//! Word lists the parser matches tokens against.
//!
//! The standard verbs, directions and prepositions are fixed; item and
//! blocked-exit names are added by whoever builds the world, before the
//! vocabulary is handed to a [`Parser`](super::Parser).

use indexmap::{IndexMap, IndexSet};

use super::command::Verb;

pub const DIRECTIONS: [&str; 8] = ["north", "east", "south", "west", "up", "down", "in", "out"];

pub const PREPOSITIONS: [&str; 8] = ["with", "using", "from", "in", "into", "on", "at", "to"];

/// Prepositions that introduce the tool in "unlock chest with key".
pub const INSTRUMENT_PREPOSITIONS: [&str; 2] = ["with", "using"];

#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    verbs: IndexMap<String, Verb>,
    directions: IndexSet<String>,
    prepositions: IndexSet<String>,
    item_names: IndexSet<String>,
    blocked_exit_names: IndexSet<String>,
}

impl Vocabulary {
    /// Nothing registered at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard verbs (with synonyms), directions and prepositions, and no
    /// world-specific names yet.
    pub fn standard() -> Self {
        let mut vocab = Self::empty();
        for verb in Verb::ALL {
            vocab.add_verb(verb.as_str(), verb);
            for syn in verb.synonyms() {
                vocab.add_verb(syn, verb);
            }
        }
        for dir in DIRECTIONS {
            vocab.add_direction(dir);
        }
        for prep in PREPOSITIONS {
            vocab.add_preposition(prep);
        }
        vocab
    }

    pub fn add_verb(&mut self, word: &str, verb: Verb) {
        self.verbs.insert(word.to_lowercase(), verb);
    }

    pub fn add_direction(&mut self, word: &str) {
        self.directions.insert(word.to_lowercase());
    }

    pub fn add_preposition(&mut self, word: &str) {
        self.prepositions.insert(word.to_lowercase());
    }

    pub fn add_item_name(&mut self, name: &str) {
        self.item_names.insert(name.to_lowercase());
    }

    pub fn add_blocked_exit_name(&mut self, name: &str) {
        self.blocked_exit_names.insert(name.to_lowercase());
    }

    pub fn verb(&self, word: &str) -> Option<Verb> {
        self.verbs.get(word).copied()
    }

    pub fn is_verb(&self, word: &str) -> bool {
        self.verbs.contains_key(word)
    }

    pub fn is_direction(&self, word: &str) -> bool {
        self.directions.contains(word)
    }

    pub fn is_preposition(&self, word: &str) -> bool {
        self.prepositions.contains(word)
    }

    pub fn is_item_name(&self, word: &str) -> bool {
        self.item_names.contains(word)
    }

    pub fn is_blocked_exit_name(&self, word: &str) -> bool {
        self.blocked_exit_names.contains(word)
    }

    /// Words allowed in the object slot.
    pub fn is_object_word(&self, word: &str) -> bool {
        self.is_item_name(word) || self.is_blocked_exit_name(word) || self.is_direction(word)
    }

    /// Words allowed in the target slot.
    pub fn is_target_word(&self, word: &str) -> bool {
        self.is_item_name(word) || self.is_blocked_exit_name(word)
    }
}
