use thiserror::Error;

use crate::parser::Verb;
use crate::world::WorldError;

/// Why an action was turned down. The `Display` text is exactly what the
/// player sees. A refused action never changes the world.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Refusal {
    #[error("What do you want to {0}?")]
    MissingObject(Verb),
    #[error("{} the {} with what?", capitalize(.verb.as_str()), .object)]
    MissingTarget { verb: Verb, object: String },

    #[error("You can't go {0}!")]
    NoExit(String),

    #[error("I don't know what a {0} is.")]
    UnknownItem(String),
    #[error("I don't see a {0} here!")]
    NotHere(String),
    #[error("You can't pick up the {0}.")]
    NotGetable(String),
    #[error("You already have the {0}.")]
    AlreadyCarried(String),
    #[error("You are not carrying the {0}!")]
    NotCarried(String),
    #[error("You don't see a {0} anywhere.")]
    NotVisible(String),

    #[error("You can't {verb} the {object}.")]
    NotContainer { verb: Verb, object: String },
    #[error("The {0} is locked.")]
    Locked(String),
    #[error("The {0} is already open.")]
    AlreadyOpen(String),
    #[error("The {0} is already closed.")]
    AlreadyClosed(String),
    #[error("The {0} doesn't have a lock.")]
    NoLock(String),
    #[error("You'll have to close the {0} first.")]
    MustCloseFirst(String),
    #[error("The {0} is already locked.")]
    AlreadyLocked(String),
    #[error("The {0} isn't locked.")]
    NotLocked(String),
    #[error("You don't have the {0}.")]
    TargetAbsent(String),
    #[error("The {key} doesn't fit the {object}.")]
    WrongKey { object: String, key: String },
    #[error("You can't {verb} anything like that.")]
    WrongPreposition { verb: Verb },

    #[error("There's nothing there to hit.")]
    NothingToHit,
    #[error("You have already dealt with the {0}.")]
    AlreadyCleared(String),
    #[error("That has no effect.")]
    NoEffect,
}

/// Either the player was refused, or the world itself is broken.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Refused(#[from] Refusal),
    #[error(transparent)]
    World(#[from] WorldError),
}

/// What a successful handler returns: the message to show.
pub type ActionResult = Result<String, ActionError>;

/// The result of dispatching one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { verb: Verb, message: String },
    Refused(Refusal),
    /// The input had no verb in it.
    Unrecognized,
    Quit,
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::Success { message, .. } => message.clone(),
            Outcome::Refused(refusal) => refusal.to_string(),
            Outcome::Unrecognized => "I don't understand that.".to_string(),
            Outcome::Quit => "You'll be back!".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
