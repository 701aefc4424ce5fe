use crate::engine::output::Output;
use crate::engine::state::Player;

pub const DIVIDER: &str = "------------------------------";

/// Where the player is and what they carry, shown before every prompt.
pub fn render_status(out: &mut Output, player: &Player) {
    out.status(format!("You are in the {}.", player.current_room));
    out.status(format!("Inventory: [{}]", player.inventory.join(", ")));
    out.status(DIVIDER);
}
