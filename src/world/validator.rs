use std::collections::HashMap;

use super::error::ValidationError;
use super::model::ItemLocation;
use super::registry::World;

/// Checks cross references in a built world. Returns every problem found,
/// empty when the world is safe to play.
pub fn validate_world(world: &World, start: &str) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if !world.has_location(start) {
        errors.push(ValidationError::new(format!(
            "start location '{start}' not found"
        )));
    }

    // Exits and blocked exits
    let mut obstacle_owner: HashMap<&str, &str> = HashMap::new();
    for location in world.locations() {
        for (direction, target) in &location.exits {
            if !world.has_location(target) {
                errors.push(ValidationError::new(format!(
                    "location '{}' exit '{direction}' leads to missing location '{target}'",
                    location.id
                )));
            }
        }

        let Some(blocked) = &location.blocked_exit else {
            continue;
        };
        check_single_word(&mut errors, "blocked exit", &blocked.name);

        if let Some(other) = obstacle_owner.insert(&blocked.name, &location.id) {
            errors.push(ValidationError::new(format!(
                "blocked exit '{}' appears in both '{other}' and '{}'",
                blocked.name, location.id
            )));
        }
        if world.has_item(&blocked.name) {
            errors.push(ValidationError::new(format!(
                "blocked exit '{}' in '{}' shares its name with an item",
                blocked.name, location.id
            )));
        }
        if !world.has_item(&blocked.requires) {
            errors.push(ValidationError::new(format!(
                "blocked exit '{}' requires missing item '{}'",
                blocked.name, blocked.requires
            )));
        }
        if blocked.grants.is_empty() {
            errors.push(ValidationError::new(format!(
                "blocked exit '{}' grants no exits",
                blocked.name
            )));
        }
        for (direction, target) in &blocked.grants {
            if !world.has_location(target) {
                errors.push(ValidationError::new(format!(
                    "blocked exit '{}' grant '{direction}' leads to missing location '{target}'",
                    blocked.name
                )));
            }
        }
    }

    // Items
    for item in world.items() {
        check_single_word(&mut errors, "item", &item.name);

        match &item.location {
            ItemLocation::Location(id) if !world.has_location(id) => {
                errors.push(ValidationError::new(format!(
                    "item '{}' starts in missing location '{id}'",
                    item.name
                )));
            }
            ItemLocation::Inside(holder) => match world.item(holder) {
                Err(_) => errors.push(ValidationError::new(format!(
                    "item '{}' starts inside missing item '{holder}'",
                    item.name
                ))),
                Ok(h) if h.name == item.name => errors.push(ValidationError::new(format!(
                    "item '{}' starts inside itself",
                    item.name
                ))),
                Ok(h) if !h.container => errors.push(ValidationError::new(format!(
                    "item '{}' starts inside '{holder}', which is not a container",
                    item.name
                ))),
                Ok(h) if matches!(h.location, ItemLocation::Inside(_)) => {
                    errors.push(ValidationError::new(format!(
                        "item '{}' starts inside '{holder}', which is itself inside another item",
                        item.name
                    )))
                }
                Ok(_) => {}
            },
            _ => {}
        }

        if let Some(key) = &item.key {
            if !item.container {
                errors.push(ValidationError::new(format!(
                    "item '{}' has a key but is not a container",
                    item.name
                )));
            }
            if !world.has_item(key) {
                errors.push(ValidationError::new(format!(
                    "item '{}' is unlocked by missing item '{key}'",
                    item.name
                )));
            }
        }

        if item.locked && item.key.is_none() {
            errors.push(ValidationError::new(format!(
                "item '{}' is locked but has no key",
                item.name
            )));
        }
        if item.open && item.locked {
            errors.push(ValidationError::new(format!(
                "item '{}' cannot start both open and locked",
                item.name
            )));
        }
        if item.open && !item.container {
            errors.push(ValidationError::new(format!(
                "item '{}' is marked open but is not a container",
                item.name
            )));
        }
    }

    errors
}

/// The parser matches names token by token, so a name must be one word.
fn check_single_word(errors: &mut Vec<ValidationError>, kind: &str, name: &str) {
    if name.is_empty() {
        errors.push(ValidationError::new(format!("{kind} has an empty name")));
    } else if name.split_whitespace().count() != 1 {
        errors.push(ValidationError::new(format!(
            "{kind} name '{name}' must be a single word"
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{BlockedExit, Item, Location};

    fn messages(world: &World, start: &str) -> Vec<String> {
        validate_world(world, start)
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    fn base() -> World {
        let mut world = World::new("test", "");
        let mut cabin = Location::new("cabin", "A cabin.");
        cabin.add_exit("out", "yard");
        world.insert_location(cabin);
        let mut yard = Location::new("yard", "A yard.");
        yard.add_exit("in", "cabin");
        world.insert_location(yard);
        world
    }

    fn chest() -> Item {
        let mut chest = Item::new("chest", "", ItemLocation::Location("cabin".into()));
        chest.container = true;
        chest.getable = false;
        chest
    }

    #[test]
    fn clean_world_passes() {
        let mut world = base();
        let mut chest = chest();
        chest.locked = true;
        chest.key = Some("key".into());
        world.insert_item(chest);
        world.insert_item(Item::new("key", "", ItemLocation::Carried));
        world.insert_item(Item::new("coin", "", ItemLocation::Inside("chest".into())));

        assert!(messages(&world, "cabin").is_empty());
    }

    #[test]
    fn missing_start_and_exit_target() {
        let mut world = base();
        world
            .location_mut("yard")
            .unwrap()
            .add_exit("north", "forest");

        let msgs = messages(&world, "attic");
        assert_eq!(msgs.len(), 2, "{msgs:#?}");
        assert!(msgs[0].contains("start location 'attic'"));
        assert!(msgs[1].contains("missing location 'forest'"));
    }

    #[test]
    fn containment_rules() {
        let mut world = base();
        world.insert_item(chest());
        let mut bag = Item::new("bag", "", ItemLocation::Inside("chest".into()));
        bag.container = true;
        world.insert_item(bag);
        world.insert_item(Item::new("coin", "", ItemLocation::Inside("bag".into())));
        world.insert_item(Item::new("rock", "", ItemLocation::Location("cabin".into())));
        world.insert_item(Item::new("pebble", "", ItemLocation::Inside("rock".into())));
        world.insert_item(Item::new("ghost", "", ItemLocation::Inside("nothing".into())));

        let msgs = messages(&world, "cabin");
        assert_eq!(msgs.len(), 3, "{msgs:#?}");
        assert!(msgs.iter().any(|m| m.contains("'coin'") && m.contains("itself inside")));
        assert!(msgs.iter().any(|m| m.contains("'pebble'") && m.contains("not a container")));
        assert!(msgs.iter().any(|m| m.contains("missing item 'nothing'")));
    }

    #[test]
    fn lock_rules() {
        let mut world = base();
        let mut safe = chest();
        safe.name = "safe".into();
        safe.locked = true;
        safe.open = true;
        world.insert_item(safe);
        let mut rock = Item::new("rock", "", ItemLocation::Carried);
        rock.key = Some("pin".into());
        world.insert_item(rock);

        let msgs = messages(&world, "cabin");
        assert!(msgs.iter().any(|m| m.contains("'safe' is locked but has no key")));
        assert!(msgs.iter().any(|m| m.contains("'safe' cannot start both open and locked")));
        assert!(msgs.iter().any(|m| m.contains("'rock' has a key but is not a container")));
        assert!(msgs.iter().any(|m| m.contains("missing item 'pin'")));
    }

    #[test]
    fn blocked_exit_rules() {
        let mut world = base();
        world.insert_item(Item::new("vines", "", ItemLocation::Carried));
        let mut grants = indexmap::IndexMap::new();
        grants.insert("east".to_string(), "well".to_string());
        world.location_mut("yard").unwrap().blocked_exit = Some(BlockedExit {
            name: "vines".into(),
            desc: String::new(),
            requires: "sword".into(),
            grants,
            effect: String::new(),
            cleared_desc: String::new(),
            cleared: false,
        });

        let msgs = messages(&world, "cabin");
        assert_eq!(msgs.len(), 3, "{msgs:#?}");
        assert!(msgs[0].contains("shares its name with an item"));
        assert!(msgs[1].contains("requires missing item 'sword'"));
        assert!(msgs[2].contains("missing location 'well'"));
    }

    #[test]
    fn names_are_single_words() {
        let mut world = base();
        world.insert_item(Item::new("rusty key", "", ItemLocation::Carried));
        let msgs = messages(&world, "cabin");
        assert_eq!(msgs, vec!["item name 'rusty key' must be a single word"]);
    }
}
