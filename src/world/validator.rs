use std::collections::{HashMap, HashSet};
use std::fmt;

use super::model::World;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collects every structural defect in `world`. An empty result means the
/// graph is safe to play: no dangling exits, and start and goal both exist.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    if !world.rooms.contains_key(&world.start_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    if !world.rooms.contains_key(&world.goal_room) {
        errors.push(ValidationError::new(format!(
            "goal_room '{}' not found among rooms",
            world.goal_room
        )));
    }

    // Sorted so reports are stable across runs
    let mut room_names: Vec<&String> = world.rooms.keys().collect();
    room_names.sort();

    let mut item_homes: HashMap<&str, &str> = HashMap::new();

    for room_name in room_names {
        let room = &world.rooms[room_name];

        if room_name.trim().is_empty() {
            errors.push(ValidationError::new(format!(
                "room '{}' has an empty name",
                room_name
            )));
        }

        let mut seen = HashSet::new();
        for exit in &room.exits {
            if !seen.insert(exit.direction) {
                errors.push(ValidationError::new(format!(
                    "room '{}' has more than one {} exit",
                    room_name, exit.direction
                )));
            }
            if !world.rooms.contains_key(&exit.target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_name, exit.direction, exit.target
                )));
            }
        }

        if let Some(item) = room.item.as_deref() {
            if item.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has an empty item label",
                    room_name
                )));
            } else if let Some(other) = item_homes.insert(item, room_name.as_str()) {
                errors.push(ValidationError::new(format!(
                    "item '{}' appears in both '{}' and '{}'",
                    item, other, room_name
                )));
            }
        }
    }

    errors
}
