use log::info;

use crate::engine::command::Command;
use crate::engine::output::Output;
use crate::engine::state::Player;
use crate::world::World;

/// Report what lies in the current room and pick it up on a matching `get`.
///
/// Runs after every command, movement included. A room without an item
/// answers `Invalid input` whatever the command was.
pub fn handle_items(out: &mut Output, player: &mut Player, world: &World, command: &Command) {
    let item = match world
        .room(&player.current_room)
        .and_then(|room| room.item.as_deref())
    {
        Some(item) => item,
        None => {
            out.say("Invalid input");
            return;
        }
    };

    out.say(format!("You see a {}", item));

    let wants_item = matches!(command, Command::GetItem(name) if name == item);
    if !wants_item {
        return;
    }

    if player.collect(item) {
        info!(
            "picked up '{}' in '{}' ({} held)",
            item,
            player.current_room,
            player.inventory.len()
        );
    } else {
        out.say("You already have this item, move along!");
    }
}
