use crate::game::Board;

/// Universal interface for move-selecting agents.
///
/// Callers must only invoke [`choose_move`](Agent::choose_move) on a
/// board with at least one valid column (check terminal state first);
/// under that contract it always returns a valid column.
pub trait Agent {
    /// Select a column to drop a piece into, given a board where it is
    /// this agent's turn.
    fn choose_move(&mut self, board: &Board) -> usize;

    /// Display name for reports and the UI.
    fn name(&self) -> &str;
}
