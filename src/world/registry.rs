use indexmap::IndexMap;

use super::error::WorldError;
use super::model::{Item, ItemLocation, Location};

/// Owns every location and item in the running game.
///
/// Both maps keep insertion order, so anything enumerated from here ("what's
/// here", the inventory, the contents reported when a container opens) comes
/// out in the order the world file declared it.
#[derive(Debug, Default, Clone)]
pub struct World {
    pub name: String,
    pub desc: String,
    locations: IndexMap<String, Location>,
    items: IndexMap<String, Item>,
}

impl World {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        World {
            name: name.into(),
            desc: desc.into(),
            ..Default::default()
        }
    }

    /// Adds a location, handing back any previous one with the same id.
    pub fn insert_location(&mut self, location: Location) -> Option<Location> {
        self.locations.insert(location.id.clone(), location)
    }

    /// Adds an item, handing back any previous one with the same name.
    pub fn insert_item(&mut self, item: Item) -> Option<Item> {
        self.items.insert(item.name.clone(), item)
    }

    pub fn location(&self, id: &str) -> Result<&Location, WorldError> {
        self.locations
            .get(id)
            .ok_or_else(|| WorldError::UnknownLocation(id.to_string()))
    }

    pub fn location_mut(&mut self, id: &str) -> Result<&mut Location, WorldError> {
        self.locations
            .get_mut(id)
            .ok_or_else(|| WorldError::UnknownLocation(id.to_string()))
    }

    pub fn item(&self, name: &str) -> Result<&Item, WorldError> {
        self.items
            .get(name)
            .ok_or_else(|| WorldError::UnknownItem(name.to_string()))
    }

    pub fn item_mut(&mut self, name: &str) -> Result<&mut Item, WorldError> {
        self.items
            .get_mut(name)
            .ok_or_else(|| WorldError::UnknownItem(name.to_string()))
    }

    pub fn has_location(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Items whose location field is exactly `place`.
    pub fn items_at<'a>(&'a self, place: &'a ItemLocation) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.values().filter(move |item| &item.location == place)
    }

    /// Moves an item, returning where it was before.
    pub fn set_item_location(
        &mut self,
        name: &str,
        to: ItemLocation,
    ) -> Result<ItemLocation, WorldError> {
        let item = self.item_mut(name)?;
        Ok(std::mem::replace(&mut item.location, to))
    }

    /// True when the item is lying at `here`, or sits in an open container
    /// that is lying at `here`. Only one level of nesting is looked through.
    pub fn is_present(&self, item: &Item, here: &str) -> bool {
        match &item.location {
            ItemLocation::Location(id) => id == here,
            ItemLocation::Carried => false,
            ItemLocation::Inside(container) => self.items.get(container).is_some_and(|c| {
                c.open && matches!(&c.location, ItemLocation::Location(id) if id == here)
            }),
        }
    }

    /// Only items held directly count; contents of a carried container do
    /// not, matching what inventory lists.
    pub fn is_carried(&self, item: &Item) -> bool {
        item.location == ItemLocation::Carried
    }

    /// Present at `here` or in the player's hands.
    pub fn is_reachable(&self, item: &Item, here: &str) -> bool {
        self.is_present(item, here) || self.is_carried(item)
    }

    /// Everything the player can see lying around at `here`.
    pub fn present_items<'a>(&'a self, here: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .values()
            .filter(move |item| self.is_present(item, here))
    }

    /// The location whose blocked exit goes by `name`.
    pub fn blocked_exit_owner(&self, name: &str) -> Option<&Location> {
        self.locations.values().find(|loc| {
            loc.blocked_exit
                .as_ref()
                .is_some_and(|b| b.name == name)
        })
    }

    /// Whether `place` points at something that actually exists: a known
    /// location, the carried sentinel, or a known container.
    pub fn resolves(&self, place: &ItemLocation) -> bool {
        match place {
            ItemLocation::Location(id) => self.locations.contains_key(id),
            ItemLocation::Carried => true,
            ItemLocation::Inside(container) => {
                self.items.get(container).is_some_and(|c| c.container)
            }
        }
    }
}
