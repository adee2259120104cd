use tracing::info;

use crate::engine::helpers::{list_names, required_object};
use crate::engine::outcome::{ActionResult, Refusal};
use crate::parser::{Command, Verb, Vocabulary};
use crate::world::{ItemLocation, World};

pub fn handle_get(world: &mut World, current_location: &str, cmd: &Command) -> ActionResult {
    let name = required_object(cmd, Verb::Get)?;

    let Ok(item) = world.item(name) else {
        return Err(Refusal::UnknownItem(name.to_string()).into());
    };

    if item.location == ItemLocation::Carried {
        return Err(Refusal::AlreadyCarried(item.name.clone()).into());
    }
    if !world.is_present(item, current_location) {
        return Err(Refusal::NotHere(item.name.clone()).into());
    }
    if !item.getable {
        return Err(Refusal::NotGetable(item.name.clone()).into());
    }

    let mut msg = format!("You picked up the {}.", item.name);
    if let Some(remark) = item.weight.pickup_remark() {
        msg.push(' ');
        msg.push_str(remark);
    }

    let from = world.set_item_location(name, ItemLocation::Carried)?;
    info!(item = name, ?from, "item picked up");
    Ok(msg)
}

pub fn handle_drop(world: &mut World, current_location: &str, cmd: &Command) -> ActionResult {
    let name = required_object(cmd, Verb::Drop)?;

    match world.item(name) {
        Ok(item) if world.is_carried(item) => {}
        _ => return Err(Refusal::NotCarried(name.to_string()).into()),
    }

    world.set_item_location(name, ItemLocation::Location(current_location.to_string()))?;
    info!(item = name, at = current_location, "item dropped");
    Ok(format!("You dropped the {name} here."))
}

const NOTHING_TO_SEE: &str = "There's nothing more to see.";

pub fn handle_examine(
    world: &World,
    vocabulary: &Vocabulary,
    current_location: &str,
    cmd: &Command,
) -> ActionResult {
    let name = required_object(cmd, Verb::Examine)?;

    if let Ok(item) = world.item(name) {
        if !world.is_reachable(item, current_location) {
            return Err(Refusal::NotVisible(item.name.clone()).into());
        }
        let desc = item.effective_description();
        if !desc.trim().is_empty() {
            return Ok(desc);
        }
    } else if vocabulary.is_direction(name) {
        return Ok(format!(
            "That's odd. You peer {name}, but there's nothing to examine."
        ));
    }

    Ok(NOTHING_TO_SEE.to_string())
}

pub fn handle_inventory(world: &World) -> ActionResult {
    let carried: Vec<_> = world.items_at(&ItemLocation::Carried).collect();

    if carried.is_empty() {
        return Ok("You are not carrying anything!".to_string());
    }

    Ok(format!("You are carrying: {}.", list_names(carried)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::outcome::ActionError;
    use crate::world::{Item, Location, Weight};

    fn world() -> World {
        let mut world = World::new("test", "");
        world.insert_location(Location::new("cabin", "A cabin."));
        world.insert_location(Location::new("well", "A well."));

        world.insert_item(Item::new(
            "bottle",
            "The bottle is full of water.",
            ItemLocation::Location("cabin".into()),
        ));
        let mut anvil = Item::new("anvil", "Solid iron.", ItemLocation::Location("cabin".into()));
        anvil.getable = false;
        world.insert_item(anvil);
        let mut sword = Item::new(
            "sword",
            "A rusty old sword.",
            ItemLocation::Location("well".into()),
        );
        sword.weight = Weight::Heavy;
        world.insert_item(sword);
        world
    }

    fn cmd(verb: Verb, object: &str) -> Command {
        Command {
            verb: Some(verb),
            object: Some(object.to_string()),
            ..Default::default()
        }
    }

    fn refusal(result: ActionResult) -> Refusal {
        match result {
            Err(ActionError::Refused(r)) => r,
            other => panic!("expected a refusal, got {other:?}"),
        }
    }

    #[test]
    fn get_then_drop_lands_where_dropped() {
        let mut world = world();

        let msg = handle_get(&mut world, "cabin", &cmd(Verb::Get, "bottle")).unwrap();
        assert_eq!(msg, "You picked up the bottle.");
        assert_eq!(world.item("bottle").unwrap().location, ItemLocation::Carried);

        let msg = handle_drop(&mut world, "well", &cmd(Verb::Drop, "bottle")).unwrap();
        assert_eq!(msg, "You dropped the bottle here.");
        assert_eq!(
            world.item("bottle").unwrap().location,
            ItemLocation::Location("well".into())
        );
    }

    #[test]
    fn get_failures_are_distinct() {
        let mut world = world();

        assert_eq!(
            refusal(handle_get(&mut world, "cabin", &cmd(Verb::Get, "north"))),
            Refusal::UnknownItem("north".into())
        );
        assert_eq!(
            refusal(handle_get(&mut world, "cabin", &cmd(Verb::Get, "sword"))),
            Refusal::NotHere("sword".into())
        );
        assert_eq!(
            refusal(handle_get(&mut world, "cabin", &cmd(Verb::Get, "anvil"))),
            Refusal::NotGetable("anvil".into())
        );
        assert_eq!(
            world.item("anvil").unwrap().location,
            ItemLocation::Location("cabin".into())
        );
    }

    #[test]
    fn heavy_items_get_a_remark() {
        let mut world = world();
        let msg = handle_get(&mut world, "well", &cmd(Verb::Get, "sword")).unwrap();
        assert_eq!(msg, "You picked up the sword. It's heavy.");
    }

    #[test]
    fn cannot_get_twice() {
        let mut world = world();
        handle_get(&mut world, "cabin", &cmd(Verb::Get, "bottle")).unwrap();
        assert_eq!(
            refusal(handle_get(&mut world, "cabin", &cmd(Verb::Get, "bottle"))),
            Refusal::AlreadyCarried("bottle".into())
        );
    }

    #[test]
    fn drop_requires_carrying() {
        let mut world = world();
        assert_eq!(
            refusal(handle_drop(&mut world, "cabin", &cmd(Verb::Drop, "bottle"))),
            Refusal::NotCarried("bottle".into())
        );
    }

    #[test]
    fn examine_item_here_or_carried() {
        let mut world = world();
        let vocab = Vocabulary::standard();

        let msg = handle_examine(&world, &vocab, "cabin", &cmd(Verb::Examine, "bottle")).unwrap();
        assert_eq!(msg, "The bottle is full of water.");

        handle_get(&mut world, "cabin", &cmd(Verb::Get, "bottle")).unwrap();
        let msg = handle_examine(&world, &vocab, "well", &cmd(Verb::Examine, "bottle")).unwrap();
        assert_eq!(msg, "The bottle is full of water.");
    }

    #[test]
    fn examine_absent_item_is_refused() {
        let world = world();
        let vocab = Vocabulary::standard();
        assert_eq!(
            refusal(handle_examine(&world, &vocab, "cabin", &cmd(Verb::Examine, "sword"))),
            Refusal::NotVisible("sword".into())
        );
        assert_eq!(
            Refusal::NotVisible("sword".into()).to_string(),
            "You don't see a sword anywhere."
        );
    }

    #[test]
    fn examine_plain_item_without_description() {
        let mut world = world();
        world.insert_item(Item::new("pebble", "", ItemLocation::Location("cabin".into())));
        let vocab = Vocabulary::standard();

        let msg = handle_examine(&world, &vocab, "cabin", &cmd(Verb::Examine, "pebble")).unwrap();
        assert_eq!(msg, "There's nothing more to see.");
    }

    #[test]
    fn contents_of_open_carried_bag_are_not_carried() {
        let mut world = world();
        let mut bag = Item::new("bag", "", ItemLocation::Carried);
        bag.container = true;
        bag.open = true;
        world.insert_item(bag);
        world.insert_item(Item::new("coin", "", ItemLocation::Inside("bag".into())));

        assert_eq!(handle_inventory(&world).unwrap(), "You are carrying: bag.");
        assert_eq!(
            refusal(handle_get(&mut world, "cabin", &cmd(Verb::Get, "coin"))),
            Refusal::NotHere("coin".into())
        );
        assert_eq!(
            refusal(handle_drop(&mut world, "cabin", &cmd(Verb::Drop, "coin"))),
            Refusal::NotCarried("coin".into())
        );
        assert_eq!(
            world.item("coin").unwrap().location,
            ItemLocation::Inside("bag".into())
        );
    }

    #[test]
    fn examine_direction_is_odd() {
        let world = world();
        let vocab = Vocabulary::standard();
        let msg = handle_examine(&world, &vocab, "cabin", &cmd(Verb::Examine, "north")).unwrap();
        assert!(msg.starts_with("That's odd."));
    }

    #[test]
    fn inventory_lists_carried_items_in_world_order() {
        let mut world = world();
        assert_eq!(
            handle_inventory(&world).unwrap(),
            "You are not carrying anything!"
        );

        handle_get(&mut world, "well", &cmd(Verb::Get, "sword")).unwrap();
        handle_get(&mut world, "cabin", &cmd(Verb::Get, "bottle")).unwrap();
        assert_eq!(
            handle_inventory(&world).unwrap(),
            "You are carrying: bottle, sword."
        );
    }
}
