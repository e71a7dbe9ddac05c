//! Static evaluation of non-terminal positions.

use crate::game::{windows, Board, Player, COLS, ROWS};

use super::threats;

const CENTER_WEIGHT: i32 = 6;
const OFF_CENTER_WEIGHT: i32 = 3;

/// Heuristic scorer for one player's perspective. Combines center
/// occupancy, 4-cell line windows, threat structure and zugzwang
/// pressure with fixed weights.
pub struct Evaluator {
    player: Player,
    opponent: Player,
}

impl Evaluator {
    pub fn new(player: Player) -> Self {
        Evaluator {
            player,
            opponent: player.other(),
        }
    }

    /// Static score of a position from this evaluator's perspective.
    /// Higher is better for `player`. Only meaningful for non-terminal
    /// boards; the window term saturates at +-1000 if a completed four
    /// slips through.
    pub fn score(&self, board: &Board) -> i32 {
        self.center_score(board)
            + self.line_score(board)
            + threats::threat_score(board, self.player)
            + threats::zugzwang_score(board, self.player)
    }

    /// Own pieces in the center column and its neighbors.
    fn center_score(&self, board: &Board) -> i32 {
        let own = self.player.to_cell();
        let mut score = 0;
        for row in 0..ROWS {
            if board.get(row, COLS / 2) == own {
                score += CENTER_WEIGHT;
            }
        }
        for col in [COLS / 2 - 1, COLS / 2 + 1] {
            for row in 0..ROWS {
                if board.get(row, col) == own {
                    score += OFF_CENTER_WEIGHT;
                }
            }
        }
        score
    }

    fn line_score(&self, board: &Board) -> i32 {
        let own = self.player.to_cell();
        let opp = self.opponent.to_cell();
        let mut score = 0;
        for window in windows() {
            let mut own_n = 0;
            let mut opp_n = 0;
            let mut empty_n = 0;
            for &(row, col) in window {
                match board.get(row, col) {
                    c if c == own => own_n += 1,
                    c if c == opp => opp_n += 1,
                    _ => empty_n += 1,
                }
            }
            score += Self::window_score(own_n, opp_n, empty_n);
        }
        score
    }

    // Blocking outweighs building: an opponent open three costs more
    // (-80) than an own open three earns (+50).
    fn window_score(own: u32, opp: u32, empty: u32) -> i32 {
        let mut score = 0;
        if own == 4 {
            score += 1000;
        } else if own == 3 && empty == 1 {
            score += 50;
        } else if own == 2 && empty == 2 {
            score += 10;
        }
        if opp == 4 {
            score -= 1000;
        } else if opp == 3 && empty == 1 {
            score -= 80;
        } else if opp == 2 && empty == 2 {
            score -= 8;
        }
        score
    }
}
