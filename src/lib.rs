pub mod engine;
pub mod parser;
pub mod world;

use tracing::{debug, error};

use engine::{LocationView, Outcome, Output, describe_location, dispatch, render_location};
use parser::{Parser, Verb};
use world::{LoadedWorld, World, WorldError};

pub use world::{load_world_from_file, load_world_from_str};

pub struct GameState {
    pub world: World,
    pub parser: Parser,
    pub current_location: String,
    pub turn: u64,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmTurn {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
    }

    impl WasmTurn {
        fn into_js(self) -> JsValue {
            to_value(&self).unwrap_or(JsValue::NULL)
        }
    }

    /// Browser handle on a [`GameState`].
    #[wasm_bindgen]
    pub struct WasmGame {
        state: GameState,
        started: bool,
    }

    #[wasm_bindgen]
    impl WasmGame {
        #[wasm_bindgen(constructor)]
        pub fn new(world_toml: &str) -> Result<WasmGame, JsValue> {
            let loaded =
                load_world_from_str(world_toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                state: GameState::new(loaded),
                started: false,
            })
        }

        /// The starting location. Calling it is optional; the first `step`
        /// includes it otherwise.
        #[wasm_bindgen]
        pub fn init(&mut self) -> JsValue {
            self.opening().into_js()
        }

        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (out, quit) = if self.started {
                self.state.step(input)
            } else {
                self.started = true;
                self.state.first_step(input)
            };
            WasmTurn {
                blocks: out.blocks,
                quit,
            }
            .into_js()
        }
    }

    impl WasmGame {
        fn opening(&mut self) -> WasmTurn {
            self.started = true;
            let (blocks, quit) = match self.state.initialize() {
                Ok(out) => (out.blocks, false),
                Err(err) => (GameState::broken_world(err).blocks, true),
            };
            WasmTurn { blocks, quit }
        }
    }
}

impl GameState {
    pub fn new(loaded: LoadedWorld) -> Self {
        GameState {
            world: loaded.world,
            parser: Parser::new(loaded.vocabulary),
            current_location: loaded.start,
            turn: 0,
        }
    }

    /// Renders the starting location.
    pub fn initialize(&self) -> Result<Output, WorldError> {
        let mut out = Output::new();
        render_location(&mut out, &self.describe_current_location()?);
        Ok(out)
    }

    pub fn describe_current_location(&self) -> Result<LocationView, WorldError> {
        describe_location(&self.world, &self.current_location)
    }

    /// Process a single player input; returns (output, quit?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let mut out = Output::new();
        if input.trim().is_empty() {
            return (out, false);
        }

        self.turn = self.turn.wrapping_add(1);
        let cmd = self.parser.parse(input);
        debug!(turn = self.turn, %cmd, "turn");

        let outcome = match dispatch(
            &mut self.world,
            self.parser.vocabulary(),
            &mut self.current_location,
            &cmd,
        ) {
            Ok(outcome) => outcome,
            Err(err) => return (Self::broken_world(err), true),
        };

        match &outcome {
            Outcome::Success {
                verb: Verb::Go,
                message,
            } => {
                out.say(message.clone());
                if let Err(err) = self.render_here(&mut out) {
                    return (Self::broken_world(err), true);
                }
            }
            Outcome::Success {
                verb: Verb::Look, ..
            } => {
                if let Err(err) = self.render_here(&mut out) {
                    return (Self::broken_world(err), true);
                }
            }
            _ => out.say(outcome.message()),
        }

        (out, outcome == Outcome::Quit)
    }

    /// The starting location followed by the first turn, for front ends
    /// that never called [`GameState::initialize`].
    pub fn first_step(&mut self, input: &str) -> (Output, bool) {
        let mut out = match self.initialize() {
            Ok(out) => out,
            Err(err) => return (Self::broken_world(err), true),
        };
        let (turn, quit) = self.step(input);
        out.blocks.extend(turn.blocks);
        (out, quit)
    }

    fn render_here(&self, out: &mut Output) -> Result<(), WorldError> {
        render_location(out, &self.describe_current_location()?);
        Ok(())
    }

    /// A lookup failure means the world data is broken; the session cannot go on.
    fn broken_world(err: WorldError) -> Output {
        error!(error = %err, "ending session on broken world data");
        let mut out = Output::new();
        out.say(format!("Something is wrong with this world ({err}). The game cannot continue."));
        out
    }
}
