pub mod engine;
pub mod world;

use engine::{
    Command, Outcome, Output, Player, outcome, process_command, render_outcome, render_status,
};
use world::{World, WorldResult};

pub use world::{load_world_from_file, load_world_from_str};

/// The Space Odyssey map, compiled into the binary.
pub const BUILTIN_WORLD: &str = include_str!("../worlds/space_odyssey.toml");

pub fn builtin_world() -> WorldResult<World> {
    load_world_from_str(BUILTIN_WORLD)
}

/// One play session: the static world plus the single player walking it.
pub struct GameState {
    pub world: World,
    pub player: Player,
}

impl GameState {
    pub fn new(world: World) -> Self {
        let player = Player::new(world.start_room.clone());
        GameState { world, player }
    }

    /// Instruction banner shown once before the first turn.
    pub fn intro(&self) -> Output {
        let mut out = Output::new();
        for line in &self.world.intro {
            out.say(line.clone());
        }
        out
    }

    pub fn outcome(&self) -> Option<Outcome> {
        outcome(&self.world, &self.player)
    }

    /// What to show before prompting: the outcome once the game is over,
    /// the location and inventory otherwise.
    pub fn status(&self) -> Output {
        let mut out = Output::new();
        match self.outcome() {
            Some(result) => render_outcome(&mut out, &self.world, result),
            None => render_status(&mut out, &self.player),
        }
        out
    }

    /// Process a single player input; returns (output, outcome if the game is over).
    pub fn step(&mut self, input: &str) -> (Output, Option<Outcome>) {
        let command = Command::parse(input);
        let turn = process_command(&self.world, self.player.clone(), &command);
        self.player = turn.state;
        (turn.output, turn.outcome)
    }
}
