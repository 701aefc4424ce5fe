use log::{info, warn};

use crate::engine::output::Output;
use crate::engine::state::Player;
use crate::world::{Direction, World};

/// Follow the current room's exit in `direction`, or report `Invalid Move!`.
/// The player never ends up in a room the world does not define.
pub fn handle_move(out: &mut Output, player: &mut Player, world: &World, direction: Direction) {
    let exit = world
        .room(&player.current_room)
        .and_then(|room| room.exit(direction))
        .filter(|exit| world.rooms.contains_key(&exit.target));

    match exit {
        Some(exit) => {
            info!(
                "moving {} from '{}' to '{}'",
                direction, player.current_room, exit.target
            );
            player.current_room = exit.target.clone();
            out.title(exit.target.clone());
        }
        None => {
            warn!("no {} exit from '{}'", direction, player.current_room);
            out.say("Invalid Move!");
        }
    }
}
