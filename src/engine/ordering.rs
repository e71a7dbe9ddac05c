//! Heuristic move ordering for alpha-beta cutoffs.

use crate::game::{Board, Player, COLS};

/// Static column priorities: the center first, falling off toward the
/// edges.
const POSITION_BIAS: [i32; COLS] = [0, 2, 5, 10, 5, 2, 0];

/// Order candidate columns best-first for the given mover: immediate
/// wins, then forced blocks, then center proximity. The sort is
/// stable, so equal-scoring candidates keep their ascending column
/// order.
pub fn order_moves(board: &Board, moves: &[usize], mover: Player) -> Vec<usize> {
    let opponent = mover.other();
    let mut scored: Vec<(usize, i32)> = moves
        .iter()
        .map(|&col| {
            let mut score = POSITION_BIAS[col];

            let mut own = *board;
            if own.drop_piece(col, mover.to_cell()).is_ok() && own.winner() == mover.to_cell() {
                score += 1000;
            }

            let mut theirs = *board;
            if theirs.drop_piece(col, opponent.to_cell()).is_ok()
                && theirs.winner() == opponent.to_cell()
            {
                score += 500;
            }

            (col, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(col, _)| col).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn empty_board_orders_center_out() {
        let board = Board::new();
        let ordered = order_moves(&board, &board.valid_moves(), Player::Red);
        assert_eq!(ordered, vec![3, 2, 4, 1, 5, 0, 6]);
    }

    #[test]
    fn winning_move_first() {
        let mut board = Board::new();
        // Red three in a row at cols 4..=6
        for col in 4..7 {
            board.drop_piece(col, Cell::Red).unwrap();
            board.drop_piece(col, Cell::Yellow).unwrap();
        }
        let ordered = order_moves(&board, &board.valid_moves(), Player::Red);
        assert_eq!(ordered[0], 3, "winning column should be ordered first");
    }

    #[test]
    fn block_ranks_above_positional_moves() {
        let mut board = Board::new();
        // Yellow threatens col 3; Red has nothing
        board.drop_piece(0, Cell::Yellow).unwrap();
        board.drop_piece(1, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        let ordered = order_moves(&board, &board.valid_moves(), Player::Red);
        assert_eq!(ordered[0], 3, "blocking column should outrank center bias");
    }

    #[test]
    fn win_outranks_block() {
        let mut board = Board::new();
        // Red can win at col 3, Yellow has a vertical threat at col 6
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        for _ in 0..3 {
            board.drop_piece(6, Cell::Yellow).unwrap();
        }
        let ordered = order_moves(&board, &board.valid_moves(), Player::Red);
        assert_eq!(ordered[0], 3, "own win first");
        assert_eq!(ordered[1], 6, "forced block second");
    }

    #[test]
    fn ties_keep_ascending_order() {
        let board = Board::new();
        let ordered = order_moves(&board, &board.valid_moves(), Player::Red);
        // cols 2 and 4 tie at bias 5: 2 must come first
        let pos2 = ordered.iter().position(|&c| c == 2).unwrap();
        let pos4 = ordered.iter().position(|&c| c == 4).unwrap();
        assert!(pos2 < pos4);
        // cols 0 and 6 tie at bias 0
        let pos0 = ordered.iter().position(|&c| c == 0).unwrap();
        let pos6 = ordered.iter().position(|&c| c == 6).unwrap();
        assert!(pos0 < pos6);
    }
}
