use tracing::info;

use crate::engine::outcome::{ActionResult, Refusal};
use crate::parser::{Command, Verb};
use crate::world::World;

pub fn handle_go(world: &World, current_location: &mut String, cmd: &Command) -> ActionResult {
    let direction = cmd.object().ok_or(Refusal::MissingObject(Verb::Go))?;

    let here = world.location(current_location)?;
    let target = here
        .move_towards(direction)
        .ok_or_else(|| Refusal::NoExit(direction.to_string()))?;

    // Exits are checked at load time; a dangling one is a world bug.
    let target = world.location(target)?;

    info!(from = %here.id, to = %target.id, direction, "player moved");
    *current_location = target.id.clone();
    Ok(format!("You go {direction}."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::outcome::ActionError;
    use crate::world::{Location, WorldError};

    fn world() -> World {
        let mut world = World::new("test", "");
        let mut cabin = Location::new("cabin", "A cabin.");
        cabin.add_exit("out", "clearing");
        world.insert_location(cabin);
        world.insert_location(Location::new("clearing", "A clearing."));
        world
    }

    fn go(dir: Option<&str>) -> Command {
        Command {
            verb: Some(Verb::Go),
            object: dir.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn moves_along_an_exit() {
        let world = world();
        let mut here = "cabin".to_string();

        let msg = handle_go(&world, &mut here, &go(Some("out"))).unwrap();
        assert_eq!(msg, "You go out.");
        assert_eq!(here, "clearing");
    }

    #[test]
    fn missing_exit_leaves_player_in_place() {
        let world = world();
        let mut here = "clearing".to_string();

        let err = handle_go(&world, &mut here, &go(Some("out"))).unwrap_err();
        assert!(matches!(err, ActionError::Refused(Refusal::NoExit(d)) if d == "out"));
        assert_eq!(here, "clearing");
    }

    #[test]
    fn go_without_direction_asks_where() {
        let world = world();
        let mut here = "cabin".to_string();
        let err = handle_go(&world, &mut here, &go(None)).unwrap_err();
        assert!(matches!(err, ActionError::Refused(Refusal::MissingObject(Verb::Go))));
    }

    #[test]
    fn dangling_exit_is_a_world_error() {
        let mut world = world();
        world
            .location_mut("cabin")
            .unwrap()
            .add_exit("down", "cellar");
        let mut here = "cabin".to_string();

        let err = handle_go(&world, &mut here, &go(Some("down"))).unwrap_err();
        assert!(matches!(
            err,
            ActionError::World(WorldError::UnknownLocation(ref id)) if id == "cellar"
        ));
        assert_eq!(here, "cabin");
    }
}
