use serde::Serialize;

/// One of the two sides of a game.
///
/// Light is always played by the human and moves first, Dark is always
/// played by the scripted opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Light,
    Dark,
}

/// The side controlled by the person at the keyboard.
pub const HUMAN_PLAYER: Player = Player::Light;

/// The side controlled by [`Greedy`](crate::Greedy).
pub const OPPONENT_PLAYER: Player = Player::Dark;

impl Player {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Player::Light => Player::Dark,
            Player::Dark => Player::Light,
        }
    }

    /// The character used for this side's pieces in text boards.
    pub fn symbol(self) -> char {
        match self {
            Player::Light => 'O',
            Player::Dark => 'X',
        }
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Light => write!(f, "Light"),
            Player::Dark => write!(f, "Dark"),
        }
    }
}
