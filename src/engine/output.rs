#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    /// Name of a room just entered.
    Title(String),
    Text(String),
    /// Win or lose announcement.
    Event(String),
    /// Location and inventory summary shown before each prompt.
    Status(String),
}

impl OutputBlock {
    pub fn text(&self) -> &str {
        match self {
            OutputBlock::Title(s)
            | OutputBlock::Text(s)
            | OutputBlock::Event(s)
            | OutputBlock::Status(s) => s,
        }
    }
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn status(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Status(s));
        }
    }

    /// Message text in emission order, regardless of block kind.
    pub fn lines(&self) -> Vec<&str> {
        self.blocks.iter().map(OutputBlock::text).collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.blocks.iter().any(|b| b.text() == needle)
    }
}
