//! open / close / lock / unlock.
//!
//! Opening a container tips its contents out into the current location.
//! Closing it again does not put them back.

use tracing::info;

use crate::engine::helpers::{
    reachable_item, reachable_tool, require_instrument_preposition, required_object,
    required_target,
};
use crate::engine::outcome::{ActionResult, Refusal};
use crate::parser::{Command, Verb};
use crate::world::{Item, ItemLocation, World};

/// A reachable container named by the object slot.
fn reachable_container<'w>(
    world: &'w World,
    current_location: &str,
    cmd: &Command,
    verb: Verb,
) -> Result<&'w Item, Refusal> {
    let name = required_object(cmd, verb)?;
    if !world.has_item(name) {
        return Err(Refusal::NotContainer {
            verb,
            object: name.to_string(),
        });
    }

    let item = reachable_item(world, current_location, name)?;
    if !item.container {
        return Err(Refusal::NotContainer {
            verb,
            object: item.name.clone(),
        });
    }
    Ok(item)
}

pub fn handle_open(world: &mut World, current_location: &str, cmd: &Command) -> ActionResult {
    let container = reachable_container(world, current_location, cmd, Verb::Open)?;
    if container.locked {
        return Err(Refusal::Locked(container.name.clone()).into());
    }
    if container.open {
        return Err(Refusal::AlreadyOpen(container.name.clone()).into());
    }

    let name = container.name.clone();
    let inside = ItemLocation::Inside(name.clone());
    let contents: Vec<String> = world.items_at(&inside).map(|i| i.name.clone()).collect();

    for item in &contents {
        world.set_item_location(item, ItemLocation::Location(current_location.to_string()))?;
    }
    world.item_mut(&name)?.open = true;

    info!(container = %name, released = contents.len(), "container opened");

    if contents.is_empty() {
        Ok(format!("You open the {name}. It is empty."))
    } else {
        Ok(format!(
            "You open the {name}. Inside you find: {}.",
            contents.join(", ")
        ))
    }
}

pub fn handle_close(world: &mut World, current_location: &str, cmd: &Command) -> ActionResult {
    let container = reachable_container(world, current_location, cmd, Verb::Close)?;
    if !container.open {
        return Err(Refusal::AlreadyClosed(container.name.clone()).into());
    }

    let name = container.name.clone();
    world.item_mut(&name)?.open = false;
    Ok(format!("You close the {name}."))
}

pub fn handle_lock(world: &mut World, current_location: &str, cmd: &Command) -> ActionResult {
    let container = reachable_container(world, current_location, cmd, Verb::Lock)?;
    if !container.is_lockable() {
        return Err(Refusal::NoLock(container.name.clone()).into());
    }
    if container.locked {
        return Err(Refusal::AlreadyLocked(container.name.clone()).into());
    }
    if container.open {
        return Err(Refusal::MustCloseFirst(container.name.clone()).into());
    }

    let key = check_key(world, current_location, cmd, Verb::Lock, container)?;
    let name = container.name.clone();

    world.item_mut(&name)?.locked = true;
    info!(container = %name, %key, "container locked");
    Ok(format!("You lock the {name} with the {key}."))
}

pub fn handle_unlock(world: &mut World, current_location: &str, cmd: &Command) -> ActionResult {
    let container = reachable_container(world, current_location, cmd, Verb::Unlock)?;
    if !container.is_lockable() {
        return Err(Refusal::NoLock(container.name.clone()).into());
    }
    if !container.locked {
        return Err(Refusal::NotLocked(container.name.clone()).into());
    }

    let key = check_key(world, current_location, cmd, Verb::Unlock, container)?;
    let name = container.name.clone();

    world.item_mut(&name)?.locked = false;
    info!(container = %name, %key, "container unlocked");
    Ok(format!("You unlock the {name} with the {key}."))
}

/// The "with <key>" half of lock/unlock. Returns the key's name.
fn check_key(
    world: &World,
    current_location: &str,
    cmd: &Command,
    verb: Verb,
    container: &Item,
) -> Result<String, Refusal> {
    let target = required_target(cmd, verb, &container.name)?;
    require_instrument_preposition(cmd, verb)?;

    let key = reachable_tool(world, current_location, target)?;
    if !container.unlocks_with(&key.name) {
        return Err(Refusal::WrongKey {
            object: container.name.clone(),
            key: key.name.clone(),
        });
    }
    Ok(key.name.clone())
}
