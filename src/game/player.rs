use super::board::Cell;

/// Red always moves first. Threat parity (odd rows favor the first
/// player) leans on this, so the ordering is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    /// The player owning a non-empty cell.
    pub fn from_cell(cell: Cell) -> Option<Player> {
        match cell {
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
            Cell::Empty => None,
        }
    }

    /// Whether this player makes the first move of a game.
    pub fn is_first(self) -> bool {
        self == Player::Red
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}
