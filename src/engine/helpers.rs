use crate::engine::outcome::Refusal;
use crate::parser::{Command, INSTRUMENT_PREPOSITIONS, Verb};
use crate::world::{Item, World};

/// The object slot, or a "what do you want to ..." refusal.
pub fn required_object(cmd: &Command, verb: Verb) -> Result<&str, Refusal> {
    cmd.object().ok_or(Refusal::MissingObject(verb))
}

/// The target slot, or a "... with what?" refusal.
pub fn required_target<'c>(cmd: &'c Command, verb: Verb, object: &str) -> Result<&'c str, Refusal> {
    cmd.target().ok_or_else(|| Refusal::MissingTarget {
        verb,
        object: object.to_string(),
    })
}

/// "with" or "using"; anything else (or nothing) is refused.
pub fn require_instrument_preposition(cmd: &Command, verb: Verb) -> Result<(), Refusal> {
    match cmd.preposition() {
        Some(prep) if INSTRUMENT_PREPOSITIONS.contains(&prep) => Ok(()),
        _ => Err(Refusal::WrongPreposition { verb }),
    }
}

/// An item the player could touch right now: lying here or carried.
pub fn reachable_item<'w>(world: &'w World, here: &str, name: &str) -> Result<&'w Item, Refusal> {
    match world.item(name) {
        Ok(item) if world.is_reachable(item, here) => Ok(item),
        _ => Err(Refusal::NotHere(name.to_string())),
    }
}

/// Like [`reachable_item`], but for the tool in "... with X".
pub fn reachable_tool<'w>(world: &'w World, here: &str, name: &str) -> Result<&'w Item, Refusal> {
    reachable_item(world, here, name).map_err(|_| Refusal::TargetAbsent(name.to_string()))
}

/// Comma-separated list of item names, in the order given.
pub fn list_names<'a>(items: impl IntoIterator<Item = &'a Item>) -> String {
    items
        .into_iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<&str>>()
        .join(", ")
}
