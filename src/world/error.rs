use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A name that should exist in the registry does not.
///
/// Every name the dispatcher looks up was either validated at load time or
/// taken from the registry itself, so hitting one of these means the world
/// data (or the engine) is broken, not that the player typed something odd.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("no location named '{0}'")]
    UnknownLocation(String),
    #[error("no item named '{0}'")]
    UnknownItem(String),
}

/// One broken rule found while checking a freshly loaded world.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read world file '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("world file is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{}", format_validation_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    let mut msg = format!("world failed validation ({} problem(s))", errors.len());
    for e in errors {
        msg.push_str("\n  - ");
        msg.push_str(&e.message);
    }
    msg
}
