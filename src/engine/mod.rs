mod containers;
mod dispatch;
mod helpers;
mod items;
mod movement;
mod obstacles;
mod outcome;
mod output;
mod render;

pub use containers::{handle_close, handle_lock, handle_open, handle_unlock};
pub use dispatch::dispatch;
pub use items::{handle_drop, handle_examine, handle_get, handle_inventory};
pub use movement::handle_go;
pub use obstacles::handle_hit;
pub use outcome::{ActionError, ActionResult, Outcome, Refusal};
pub use output::{Output, OutputBlock};
pub use render::{LocationView, describe_location, render_location};
