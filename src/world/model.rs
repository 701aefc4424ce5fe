use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::Deserialize;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type used by the game loop. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct World {
    pub name: String,
    pub intro: Vec<String>,
    pub start_room: String,
    pub goal_room: String,
    pub rooms: HashMap<String, Room>,
    pub win_text: Vec<String>,
    pub lose_text: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub exits: Vec<Exit>,
    pub item: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Exit {
    pub direction: Direction,
    pub target: String,
}

/// The only four ways out of a room. Labels are matched case-exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        }
    }

    pub fn from_label(s: &str) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.label() == s)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Room {
    pub fn exit(&self, direction: Direction) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction == direction)
    }
}

impl World {
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    /// Every distinct item label defined anywhere in the graph.
    pub fn item_names(&self) -> BTreeSet<&str> {
        self.rooms
            .values()
            .filter_map(|r| r.item.as_deref())
            .collect()
    }

    /// Number of items a player must hold at the goal room to win.
    pub fn total_items(&self) -> usize {
        self.item_names().len()
    }
}
