use crate::world::Direction;

/// One line of player input, classified before it reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `go <Direction>`
    Move(Direction),
    /// `get <item name>`; the name is kept verbatim.
    GetItem(String),
    Unknown(String),
}

impl Command {
    /// Classify a raw input line. Matching is case and whitespace exact:
    /// `go north` and `go  North` are both `Unknown`.
    pub fn parse(raw: &str) -> Command {
        if let Some(label) = raw.strip_prefix("go ") {
            if let Some(direction) = Direction::from_label(label) {
                return Command::Move(direction);
            }
        }

        if let Some(name) = raw.strip_prefix("get ") {
            if !name.is_empty() {
                return Command::GetItem(name.to_string());
            }
        }

        Command::Unknown(raw.to_string())
    }
}
