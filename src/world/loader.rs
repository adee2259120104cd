use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use super::error::{LoadError, ValidationError};
use super::model::{BlockedExit, Item, ItemLocation, Location, Weight};
use super::registry::World;
use super::validator::validate_world;
use crate::parser::Vocabulary;

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    location: Vec<LocationConfig>, // [[location]] blocks
    #[serde(default)]
    item: Vec<ItemConfig>, // [[item]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    name: String,
    #[serde(default)]
    desc: String,
}

#[derive(Deserialize)]
struct LocationConfig {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    start: bool,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[location.exit]]
    #[serde(default)]
    blocked_exit: Option<BlockedExitConfig>, // [location.blocked_exit]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct BlockedExitConfig {
    name: String,
    #[serde(default)]
    desc: String,
    requires: String,
    #[serde(default)]
    effect: String,
    #[serde(default)]
    cleared_desc: String,
    #[serde(default)]
    grant: Vec<ExitConfig>, // [[location.blocked_exit.grant]]
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,

    /// Where the item starts: "room:cabin", "inventory", "item:chest".
    start_location: String,

    #[serde(default)]
    desc: String,

    #[serde(default)]
    weight: Weight,

    #[serde(default = "default_true")]
    getable: bool,

    #[serde(default)]
    container: bool,

    #[serde(default)]
    open: bool,

    #[serde(default)]
    locked: bool,

    /// Item that locks/unlocks this container.
    #[serde(default)]
    key: Option<String>,
}

fn default_true() -> bool {
    true
}

/// A world ready to play: the registry, the finished parser vocabulary, and
/// the id of the starting location.
#[derive(Debug, Clone)]
pub struct LoadedWorld {
    pub world: World,
    pub vocabulary: Vocabulary,
    pub start: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

pub fn load_world_from_file(path: &Path) -> Result<LoadedWorld, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = load_world_from_str(&contents)?;
    info!(path = %path.display(), "world file loaded");
    Ok(loaded)
}

pub fn load_world_from_str(contents: &str) -> Result<LoadedWorld, LoadError> {
    let file: WorldFile = toml::from_str(contents)?;
    let mut errors: Vec<ValidationError> = Vec::new();

    let mut world = World::new(file.world.name, normalize_text(&file.world.desc));
    let mut starts: Vec<String> = Vec::new();

    for lc in file.location {
        if world.has_location(&lc.id) {
            errors.push(ValidationError::new(format!(
                "duplicate location id '{}'",
                lc.id
            )));
            continue;
        }
        if lc.start {
            starts.push(lc.id.clone());
        }
        world.insert_location(build_location(lc));
    }

    for ic in file.item {
        let name = ic.name.trim().to_lowercase();
        if world.has_item(&name) {
            errors.push(ValidationError::new(format!("duplicate item name '{name}'")));
            continue;
        }
        match parse_item_location(&ic.start_location) {
            Ok(location) => {
                world.insert_item(build_item(name, location, ic));
            }
            Err(msg) => errors.push(ValidationError::new(format!("item '{name}': {msg}"))),
        }
    }

    let start = match starts.as_slice() {
        [only] => only.clone(),
        [] => {
            errors.push(ValidationError::new("no location is marked start = true"));
            String::new()
        }
        many => {
            errors.push(ValidationError::new(format!(
                "more than one start location: {}",
                many.join(", ")
            )));
            String::new()
        }
    };

    if !start.is_empty() {
        errors.extend(validate_world(&world, &start));
    }
    if !errors.is_empty() {
        return Err(LoadError::Invalid(errors));
    }

    let vocabulary = build_vocabulary(&world);

    info!(
        world = %world.name,
        locations = world.locations().count(),
        items = world.items().count(),
        %start,
        "world ready"
    );

    Ok(LoadedWorld {
        world,
        vocabulary,
        start,
    })
}

fn build_location(lc: LocationConfig) -> Location {
    let mut location = Location::new(lc.id, normalize_text(&lc.desc));
    if let Some(name) = lc.name.filter(|n| !n.trim().is_empty()) {
        location.name = name;
    }
    for exit in lc.exit {
        location.add_exit(&exit.direction, exit.target);
    }

    location.blocked_exit = lc.blocked_exit.map(|bc| {
        let mut blocked = BlockedExit {
            name: bc.name.trim().to_lowercase(),
            desc: normalize_text(&bc.desc),
            requires: bc.requires.trim().to_lowercase(),
            grants: Default::default(),
            effect: normalize_text(&bc.effect),
            cleared_desc: normalize_text(&bc.cleared_desc),
            cleared: false,
        };
        for grant in bc.grant {
            blocked
                .grants
                .insert(grant.direction.to_lowercase(), grant.target);
        }
        blocked
    });

    location
}

fn build_item(name: String, location: ItemLocation, ic: ItemConfig) -> Item {
    Item {
        name,
        desc: normalize_text(&ic.desc),
        weight: ic.weight,
        location,
        getable: ic.getable,
        container: ic.container,
        open: ic.open,
        locked: ic.locked,
        key: ic
            .key
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty()),
    }
}

/// Standard words plus every name and direction this world uses.
fn build_vocabulary(world: &World) -> Vocabulary {
    let mut vocab = Vocabulary::standard();

    for item in world.items() {
        if vocab.is_verb(&item.name) {
            warn!(item = %item.name, "item name is also a verb; the verb reading wins");
        }
        vocab.add_item_name(&item.name);
    }

    for location in world.locations() {
        for direction in location.exits.keys() {
            vocab.add_direction(direction);
        }
        if let Some(blocked) = &location.blocked_exit {
            if vocab.is_verb(&blocked.name) {
                warn!(obstacle = %blocked.name, "blocked exit name is also a verb");
            }
            vocab.add_blocked_exit_name(&blocked.name);
            for direction in blocked.grants.keys() {
                vocab.add_direction(direction);
            }
        }
    }

    vocab
}

/// Collapses the line wrapping of TOML multi-line strings: a single newline
/// becomes a space, one blank line a newline, two or more a paragraph break.
/// Indentation is dropped.
fn normalize_text(raw: &str) -> String {
    let mut out = String::new();
    let mut blanks = 0usize;

    for line in raw.lines().map(str::trim) {
        if line.is_empty() {
            blanks += 1;
            continue;
        }
        if !out.is_empty() {
            out.push_str(match blanks {
                0 => " ",
                1 => "\n",
                _ => "\n\n",
            });
        }
        out.push_str(line);
        blanks = 0;
    }

    out
}

////////////////////////////
/// ITEM PARSE HELPERS   ///
////////////////////////////

fn parse_item_location(s: &str) -> Result<ItemLocation, String> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("inventory") || s.eq_ignore_ascii_case("carried") {
        return Ok(ItemLocation::Carried);
    }

    let Some((kind, id)) = s.split_once(':') else {
        return Err(format!(
            "invalid start_location '{s}': expected 'room:<id>', 'item:<name>', or 'inventory'"
        ));
    };
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("invalid start_location '{s}': nothing after '{kind}:'"));
    }

    match kind.trim() {
        "room" | "location" => Ok(ItemLocation::Location(id.to_string())),
        "item" | "inside" => Ok(ItemLocation::Inside(id.to_lowercase())),
        other => Err(format!(
            "invalid start_location '{s}': unknown kind '{other}'"
        )),
    }
}
