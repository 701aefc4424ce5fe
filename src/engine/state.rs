/// The only mutable state in a session: where the player stands and what
/// they carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub current_room: String,
    /// Collected items in pickup order. Never holds duplicates.
    pub inventory: Vec<String>,
}

impl Player {
    pub fn new(start_room: impl Into<String>) -> Self {
        Player {
            current_room: start_room.into(),
            inventory: Vec::new(),
        }
    }

    pub fn has(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Adds `item` unless it is already held. Returns whether it was added.
    pub fn collect(&mut self, item: &str) -> bool {
        if self.has(item) {
            return false;
        }
        self.inventory.push(item.to_string());
        true
    }
}
