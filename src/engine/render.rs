use std::fmt;

use crate::engine::output::Output;
use crate::world::{World, WorldError};

/// What the player can see of a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationView {
    pub name: String,
    pub description: String,
    pub exits: Vec<String>,
    pub items: Vec<String>,
}

pub fn describe_location(world: &World, location_id: &str) -> Result<LocationView, WorldError> {
    let location = world.location(location_id)?;

    Ok(LocationView {
        name: location.name.clone(),
        description: location.description(),
        exits: location.exits.keys().cloned().collect(),
        items: world
            .present_items(location_id)
            .map(|i| i.name.clone())
            .collect(),
    })
}

impl LocationView {
    fn items_line(&self) -> Option<String> {
        if self.items.is_empty() {
            None
        } else {
            Some(format!(
                "You can see the following items here: {}.",
                self.items.join(", ")
            ))
        }
    }

    fn exits_line(&self) -> String {
        if self.exits.is_empty() {
            "Uh oh. There doesn't seem to be any way out of here!".to_string()
        } else {
            format!("Possible exits are: {}.", self.exits.join(", "))
        }
    }
}

impl fmt::Display for LocationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)?;
        if let Some(items) = self.items_line() {
            write!(f, "\n{items}")?;
        }
        write!(f, "\n{}", self.exits_line())
    }
}

pub fn render_location(out: &mut Output, view: &LocationView) {
    out.title(view.name.clone());
    out.say(view.description.clone());
    if let Some(items) = view.items_line() {
        out.say(items);
    }
    out.set_exits(view.exits_line());
}
