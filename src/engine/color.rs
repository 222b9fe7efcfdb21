use serde::{Deserialize, Serialize};

/// The four group colors, in conventional difficulty order (yellow easiest,
/// purple hardest). Used as a stable key into [`crate::engine::Puzzle`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Color {
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Yellow, Color::Green, Color::Blue, Color::Purple];

    pub const fn index(self) -> usize {
        match self {
            Color::Yellow => 0,
            Color::Green => 1,
            Color::Blue => 2,
            Color::Purple => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
        }
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
