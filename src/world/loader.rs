use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::error::{WorldError, WorldResult};
use super::model::{Direction, Exit, Room, World};
use super::validator::validate_world;

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    name: String,
    start_room: String,
    goal_room: String,
    #[serde(default)]
    intro: String,
    #[serde(default = "default_win_text")]
    win_text: String,
    #[serde(default = "default_lose_text")]
    lose_text: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    name: String,
    #[serde(default)]
    item: Option<String>,
    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: Direction,
    target: String,
}

fn default_win_text() -> String {
    "You have collected every item. You win!".to_string()
}

fn default_lose_text() -> String {
    "You arrived without every item. You lose!".to_string()
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> WorldResult<World> {
    let contents = fs::read_to_string(path).map_err(|source| WorldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_world_from_str(&contents)
}

/// Parse and validate a world. A world that comes back `Ok` has no dangling
/// exits and both its start and goal rooms exist.
pub fn load_world_from_str(contents: &str) -> WorldResult<World> {
    let world_file: WorldFile = toml::from_str(contents)?;

    let mut rooms_map: HashMap<String, Room> = HashMap::new();
    for room_cfg in world_file.room {
        if rooms_map.contains_key(&room_cfg.name) {
            return Err(WorldError::Duplicate {
                kind: "room",
                name: room_cfg.name,
            });
        }

        let exits = room_cfg
            .exit
            .into_iter()
            .map(|e| Exit {
                direction: e.direction,
                target: e.target,
            })
            .collect();

        rooms_map.insert(
            room_cfg.name.clone(),
            Room {
                name: room_cfg.name,
                exits,
                item: room_cfg.item,
            },
        );
    }

    let header = world_file.world;
    let world = World {
        name: header.name,
        intro: message_lines(&header.intro),
        start_room: header.start_room,
        goal_room: header.goal_room,
        rooms: rooms_map,
        win_text: message_lines(&header.win_text),
        lose_text: message_lines(&header.lose_text),
    };

    let errors = validate_world(&world);
    if !errors.is_empty() {
        return Err(WorldError::Invalid(errors));
    }

    Ok(world)
}

/// Split a TOML multi-line string into display lines. Indentation is
/// stripped and blank lines are dropped, so each line is one message.
fn message_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
