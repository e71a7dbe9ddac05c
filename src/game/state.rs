use super::{board, Board, Cell, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// Turn-taking state machine over [`Board`]. The search does not use
/// this; it works on `Board` directly. The interactive session and the
/// benchmark live here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            outcome: None,
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Apply a move and return the new state (immutable).
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board
            .drop_piece(column, self.current_player.to_cell())
            .map_err(|e| match e {
                board::MoveError::ColumnFull => MoveError::ColumnFull,
                board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        // outcome is always rederived from a full board scan
        self.outcome = match self.board.winner() {
            Cell::Empty if self.board.is_full() => Some(GameOutcome::Draw),
            Cell::Empty => None,
            cell => Player::from_cell(cell).map(GameOutcome::Winner),
        };

        self.current_player = self.current_player.other();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.board().valid_moves().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        assert_eq!(new_state.board().get(5, 3), Cell::Red);
        // the original is untouched
        assert_eq!(state.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red builds the bottom row, Yellow stacks on top
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut state = GameState::initial();
        for col in 0..4 {
            state = state.apply_move(col).unwrap();
            if col < 3 {
                state = state.apply_move(col).unwrap();
            }
        }
        assert!(state.is_terminal());
        assert_eq!(state.apply_move(6), Err(MoveError::GameOver));
    }

    #[test]
    fn test_invalid_moves_mapped() {
        let mut state = GameState::initial();
        assert_eq!(state.apply_move(9), Err(MoveError::InvalidColumn));
        for _ in 0..3 {
            state = state.apply_move(0).unwrap();
            state = state.apply_move(0).unwrap();
        }
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull));
    }
}
