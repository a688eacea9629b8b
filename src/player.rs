//! Players and game results.

use std::fmt;

/// One of the two sides in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first, shown as `R`
    Red,
    /// Moves second, shown as `B`
    Blue,
}

impl Player {
    /// Both players in turn order
    pub const ALL: [Player; 2] = [Player::Red, Player::Blue];

    /// Returns the other player
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Returns the player to move on the given turn (0-based)
    pub fn for_turn(turn: usize) -> Player {
        Self::ALL[turn % 2]
    }

    /// Single-character symbol used in grids and summaries
    pub fn symbol(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Blue => 'B',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The given player completed a chain
    Player(Player),
    /// Move limit reached or no column left to play
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player(player) => write!(f, "{}", player),
            Winner::Tie => write!(f, "Tie"),
        }
    }
}
