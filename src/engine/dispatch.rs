use tracing::{debug, error};

use crate::engine::containers::{handle_close, handle_lock, handle_open, handle_unlock};
use crate::engine::items::{handle_drop, handle_examine, handle_get, handle_inventory};
use crate::engine::movement::handle_go;
use crate::engine::obstacles::handle_hit;
use crate::engine::outcome::{ActionError, Outcome};
use crate::engine::render::describe_location;
use crate::parser::{Command, Verb, Vocabulary};
use crate::world::{World, WorldError};

/// Runs exactly one command against the world.
///
/// Refusals come back as [`Outcome::Refused`] and leave the world untouched.
/// A [`WorldError`] means the world data is inconsistent and is returned as
/// an error rather than papered over.
pub fn dispatch(
    world: &mut World,
    vocabulary: &Vocabulary,
    current_location: &mut String,
    cmd: &Command,
) -> Result<Outcome, WorldError> {
    let Some(verb) = cmd.verb else {
        return Ok(Outcome::Unrecognized);
    };
    debug!(%verb, command = %cmd, at = %current_location, "dispatching");

    let result = match verb {
        Verb::Go => handle_go(world, current_location, cmd),
        Verb::Get => handle_get(world, current_location, cmd),
        Verb::Drop => handle_drop(world, current_location, cmd),
        Verb::Examine => handle_examine(world, vocabulary, current_location, cmd),
        Verb::Open => handle_open(world, current_location, cmd),
        Verb::Close => handle_close(world, current_location, cmd),
        Verb::Lock => handle_lock(world, current_location, cmd),
        Verb::Unlock => handle_unlock(world, current_location, cmd),
        Verb::Hit => handle_hit(world, current_location, cmd),
        Verb::Inventory => handle_inventory(world),
        Verb::Look => describe_location(world, current_location)
            .map(|view| view.to_string())
            .map_err(ActionError::from),
        Verb::Quit => return Ok(Outcome::Quit),
    };

    match result {
        Ok(message) => Ok(Outcome::Success { verb, message }),
        Err(ActionError::Refused(refusal)) => {
            debug!(%verb, %refusal, "action refused");
            Ok(Outcome::Refused(refusal))
        }
        Err(ActionError::World(err)) => {
            error!(%verb, command = %cmd, error = %err, "world lookup failed");
            Err(err)
        }
    }
}
