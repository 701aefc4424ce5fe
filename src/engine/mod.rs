mod command;
mod items;
mod movement;
mod outcome;
mod output;
mod render;
mod state;

use log::debug;

use crate::world::World;

pub use command::Command;
pub use items::handle_items;
pub use movement::handle_move;
pub use outcome::{Outcome, outcome, render_outcome};
pub use output::{Output, OutputBlock};
pub use render::{DIVIDER, render_status};
pub use state::Player;

/// Result of one engine step.
#[derive(Debug)]
pub struct Turn {
    pub state: Player,
    pub output: Output,
    /// Set when the step found the player already in the goal room.
    pub outcome: Option<Outcome>,
}

/// Advance `state` by one command.
///
/// A player already standing in the goal room gets the outcome and nothing
/// else. Otherwise a move is attempted first, then the (possibly new) room
/// is checked for an item. Invalid input only ever produces messages.
pub fn process_command(world: &World, state: Player, command: &Command) -> Turn {
    let mut out = Output::new();

    if let Some(result) = outcome(world, &state) {
        render_outcome(&mut out, world, result);
        return Turn {
            state,
            output: out,
            outcome: Some(result),
        };
    }

    let mut player = state;
    debug!("command {:?} in '{}'", command, player.current_room);

    if let Command::Move(direction) = command {
        handle_move(&mut out, &mut player, world, *direction);
    }

    handle_items(&mut out, &mut player, world, command);

    Turn {
        state: player,
        output: out,
        outcome: None,
    }
}
