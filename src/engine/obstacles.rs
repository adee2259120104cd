use tracing::info;

use crate::engine::helpers::{reachable_tool, require_instrument_preposition, required_object};
use crate::engine::outcome::{ActionResult, Refusal};
use crate::parser::{Command, Verb};
use crate::world::World;

/// hit / break.
///
/// Hitting an ordinary item does nothing. Hitting a blocked exit with the
/// item it calls for clears it for good: its exits are added to the current
/// location and its description switches to the cleared text.
pub fn handle_hit(world: &mut World, current_location: &str, cmd: &Command) -> ActionResult {
    let name = required_object(cmd, Verb::Hit)?;

    if let Ok(item) = world.item(name) {
        return Ok(format!("You hit the {}. Nothing happens.", item.name));
    }

    let here = world.location(current_location)?;
    let Some(blocked) = here.blocked_exit.as_ref().filter(|b| b.name == name) else {
        if world.blocked_exit_owner(name).is_some() {
            return Err(Refusal::NotHere(name.to_string()).into());
        }
        return Err(Refusal::NothingToHit.into());
    };

    if blocked.cleared {
        return Err(Refusal::AlreadyCleared(blocked.name.clone()).into());
    }

    match cmd.target() {
        Some(tool) if tool == blocked.requires => {}
        _ => return Err(Refusal::NoEffect.into()),
    }
    if require_instrument_preposition(cmd, Verb::Hit).is_err() {
        return Err(Refusal::NoEffect.into());
    }
    reachable_tool(world, current_location, &blocked.requires)?;

    let grants = blocked.grants.clone();
    let effect = blocked.effect.clone();

    let here = world.location_mut(current_location)?;
    for (direction, target) in &grants {
        here.add_exit(direction, target.clone());
    }
    if let Some(blocked) = here.blocked_exit.as_mut() {
        blocked.cleared = true;
    }

    info!(
        obstacle = name,
        at = current_location,
        opened = grants.len(),
        "blocked exit cleared"
    );
    Ok(effect)
}
