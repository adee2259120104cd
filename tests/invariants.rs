use std::path::Path;

use cabin_quest::world::ItemLocation;
use cabin_quest::{GameState, load_world_from_file};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "go", "get", "take", "drop", "examine", "open", "close", "lock", "unlock", "hit", "break",
    "inventory", "look", "in", "out", "north", "south", "east", "west", "up", "down", "with",
    "using", "the", "bottle", "key", "sword", "chest", "coin", "map", "boulder", "brambles",
];

const MOVES: &[&str] = &["go out", "go in", "go south", "go north", "go down", "go up"];

fn cabin() -> GameState {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("worlds/cabin.toml");
    GameState::new(load_world_from_file(&path).unwrap())
}

fn command_line() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..5).prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn world_stays_consistent(lines in prop::collection::vec(command_line(), 1..40)) {
        let mut game = cabin();

        for line in &lines {
            let (_, quit) = game.step(line);
            prop_assert!(!quit, "'{}' ended the session", line);

            prop_assert!(game.world.location(&game.current_location).is_ok());
            for item in game.world.items() {
                prop_assert!(
                    game.world.resolves(&item.location),
                    "after '{}', {} is at {:?}", line, item.name, item.location
                );
            }
            for container in game.world.items().filter(|i| i.container) {
                prop_assert!(!(container.open && container.locked));
            }
        }
    }

    #[test]
    fn get_then_drop_lands_where_dropped(steps in prop::collection::vec(prop::sample::select(MOVES), 0..8)) {
        let mut game = cabin();
        game.step("get bottle");
        for step in &steps {
            game.step(step);
        }
        let here = game.current_location.clone();
        game.step("drop bottle");

        prop_assert_eq!(
            &game.world.item("bottle").unwrap().location,
            &ItemLocation::Location(here)
        );
    }
}
