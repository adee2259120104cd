use indexmap::IndexMap;
use serde::Deserialize;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Where an item currently sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemLocation {
    Location(String),
    Carried,
    /// Inside the container item with this name.
    Inside(String),
}

/// How heavy an item feels. Flavor only; nothing caps what the player carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Weight {
    #[default]
    Light,
    Heavy,
    VeryHeavy,
}

impl Weight {
    /// Remark appended when the player picks something up.
    pub fn pickup_remark(self) -> Option<&'static str> {
        match self {
            Weight::Light => None,
            Weight::Heavy => Some("It's heavy."),
            Weight::VeryHeavy => Some("You strain under the weight of it."),
        }
    }
}

/// An obstacle that hides extra exits until it is hit with the right item.
#[derive(Debug, Clone)]
pub struct BlockedExit {
    pub name: String,
    pub desc: String,
    /// Name of the item that clears it.
    pub requires: String,
    /// Exits added to the owning location once cleared.
    pub grants: IndexMap<String, String>,
    pub effect: String,
    pub cleared_desc: String,
    pub cleared: bool,
}

impl BlockedExit {
    pub fn description(&self) -> &str {
        if self.cleared {
            &self.cleared_desc
        } else {
            &self.desc
        }
    }
}

#[derive(Debug, Clone)]
pub struct Location {
    pub id: String,
    /// Heading shown above the description.
    pub name: String,
    pub desc: String,
    /// direction (lower-case) -> target location id, in declaration order.
    pub exits: IndexMap<String, String>,
    pub blocked_exit: Option<BlockedExit>,
}

impl Location {
    pub fn new(id: impl Into<String>, desc: impl Into<String>) -> Self {
        let id = id.into();
        Location {
            name: id.clone(),
            id,
            desc: desc.into(),
            exits: IndexMap::new(),
            blocked_exit: None,
        }
    }

    /// Target of the exit in `direction`, if there is one.
    pub fn move_towards(&self, direction: &str) -> Option<&str> {
        self.exits
            .get(&direction.to_lowercase())
            .map(String::as_str)
    }

    /// Inserts or overwrites one exit.
    pub fn add_exit(&mut self, direction: impl AsRef<str>, target: impl Into<String>) {
        self.exits
            .insert(direction.as_ref().to_lowercase(), target.into());
    }

    /// Base description followed by whatever the blocked exit currently says.
    pub fn description(&self) -> String {
        let mut desc = self.desc.trim().to_string();
        if let Some(blocked) = &self.blocked_exit {
            let extra = blocked.description().trim();
            if !extra.is_empty() {
                if !desc.is_empty() {
                    desc.push(' ');
                }
                desc.push_str(extra);
            }
        }
        desc
    }
}

#[derive(Debug, Clone)]
pub struct Item {
    pub name: String,
    pub desc: String,
    pub weight: Weight,
    pub location: ItemLocation,
    pub getable: bool,
    pub container: bool,
    pub open: bool,
    pub locked: bool,
    /// Item that locks and unlocks this container.
    pub key: Option<String>,
}

impl Item {
    /// A plain, getable, light item at `location`.
    pub fn new(name: impl Into<String>, desc: impl Into<String>, location: ItemLocation) -> Self {
        Item {
            name: name.into(),
            desc: desc.into(),
            weight: Weight::Light,
            location,
            getable: true,
            container: false,
            open: false,
            locked: false,
            key: None,
        }
    }

    pub fn effective_description(&self) -> String {
        if !self.container {
            return self.desc.clone();
        }
        let state = if self.open { "open" } else { "closed" };
        if self.desc.trim().is_empty() {
            format!("It is {state}.")
        } else {
            format!("{} It is {state}.", self.desc.trim())
        }
    }

    pub fn is_lockable(&self) -> bool {
        self.container && self.key.is_some()
    }

    pub fn unlocks_with(&self, candidate: &str) -> bool {
        self.key.as_deref() == Some(candidate)
    }
}
