use log::info;

use crate::engine::output::Output;
use crate::engine::state::Player;
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

/// `Some` once the player stands in the goal room. Winning needs every
/// distinct item in the graph; the count comes from the world itself.
pub fn outcome(world: &World, player: &Player) -> Option<Outcome> {
    if player.current_room != world.goal_room {
        return None;
    }

    if player.inventory.len() == world.total_items() {
        Some(Outcome::Win)
    } else {
        Some(Outcome::Lose)
    }
}

pub fn render_outcome(out: &mut Output, world: &World, outcome: Outcome) {
    info!("game over: {:?}", outcome);
    let lines = match outcome {
        Outcome::Win => &world.win_text,
        Outcome::Lose => &world.lose_text,
    };
    for line in lines {
        out.event(line.clone());
    }
}
