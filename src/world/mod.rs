mod error;
mod loader;
mod model;
mod registry;
mod validator;

pub use error::{LoadError, ValidationError, WorldError};
pub use loader::{LoadedWorld, load_world_from_file, load_world_from_str};
pub use model::{BlockedExit, Item, ItemLocation, Location, Weight};
pub use registry::World;
pub use validator::validate_world;
