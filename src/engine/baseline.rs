//! Fixed-depth minimax baseline used as the benchmark opponent.
//!
//! Deliberately simpler than the main engine: no transposition table,
//! no move ordering, no threat or parity terms, and a flat window
//! evaluator. Root ties are broken at random so repeated benchmark
//! games do not replay one line.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{windows, Board, Player, COLS, ROWS};

use super::Agent;

const BASELINE_DEPTH: u32 = 6;
const WIN_SCORE: i32 = 10_000;

pub struct BaselineAgent {
    player: Player,
    opponent: Player,
    depth: u32,
    rng: StdRng,
}

impl BaselineAgent {
    pub fn new(player: Player) -> Self {
        Self::with_depth(player, BASELINE_DEPTH)
    }

    pub fn with_depth(player: Player, depth: u32) -> Self {
        BaselineAgent {
            player,
            opponent: player.other(),
            depth: depth.max(1),
            rng: StdRng::from_os_rng(),
        }
    }

    #[cfg(test)]
    fn with_seed(player: Player, depth: u32, seed: u64) -> Self {
        BaselineAgent {
            player,
            opponent: player.other(),
            depth: depth.max(1),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn best_move(&mut self, board: &Board) -> usize {
        let valid = board.valid_moves();
        if valid.len() == 1 {
            return valid[0];
        }

        let mut best_score = i32::MIN;
        let mut best_moves: Vec<usize> = Vec::new();
        for &col in &valid {
            let mut next = *board;
            if next.drop_piece(col, self.player.to_cell()).is_err() {
                continue;
            }
            let score = self.minimax(&next, self.depth - 1, i32::MIN, i32::MAX, false);
            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(col);
            } else if score == best_score {
                best_moves.push(col);
            }
        }

        best_moves[self.rng.random_range(0..best_moves.len())]
    }

    fn minimax(&self, board: &Board, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        let winner = board.winner();
        if winner == self.player.to_cell() {
            return WIN_SCORE + depth as i32;
        }
        if winner == self.opponent.to_cell() {
            return -WIN_SCORE - depth as i32;
        }
        if board.is_full() || depth == 0 {
            return self.evaluate(board);
        }

        let mover = if maximizing { self.player } else { self.opponent };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for col in board.valid_moves() {
            let mut next = *board;
            if next.drop_piece(col, mover.to_cell()).is_err() {
                continue;
            }
            let score = self.minimax(&next, depth - 1, alpha, beta, !maximizing);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }

    fn evaluate(&self, board: &Board) -> i32 {
        let own = self.player.to_cell();
        let opp = self.opponent.to_cell();
        let mut score = 0;

        for row in 0..ROWS {
            if board.get(row, COLS / 2) == own {
                score += 3;
            }
        }

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
            if own_n == 4 {
                score += 100;
            } else if own_n == 3 && empty_n == 1 {
                score += 5;
            } else if own_n == 2 && empty_n == 2 {
                score += 2;
            }
            if opp_n == 3 && empty_n == 1 {
                score -= 4;
            }
        }

        score
    }
}

impl Agent for BaselineAgent {
    fn choose_move(&mut self, board: &Board) -> usize {
        self.best_move(board)
    }

    fn name(&self) -> &str {
        "Baseline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn board_from_moves(moves: &[usize]) -> Board {
        let mut board = Board::new();
        let mut cell = Cell::Red;
        for &col in moves {
            board.drop_piece(col, cell).unwrap();
            cell = if cell == Cell::Red { Cell::Yellow } else { Cell::Red };
        }
        board
    }

    #[test]
    fn always_returns_a_valid_move() {
        let board = board_from_moves(&[3, 3, 2, 4]);
        let mut agent = BaselineAgent::with_seed(Player::Red, 2, 1);
        let col = agent.choose_move(&board);
        assert!(board.is_valid_move(col));
    }

    #[test]
    fn takes_an_immediate_win() {
        // Red three in a column: completing it dominates the search
        let mut board = Board::new();
        for _ in 0..3 {
            board.drop_piece(5, Cell::Red).unwrap();
        }
        board.drop_piece(0, Cell::Yellow).unwrap();
        board.drop_piece(1, Cell::Yellow).unwrap();
        let mut agent = BaselineAgent::with_seed(Player::Red, 2, 3);
        assert_eq!(agent.choose_move(&board), 5);
    }

    #[test]
    fn blocks_an_immediate_loss() {
        // Yellow threatens the vertical four at col 0
        let mut board = Board::new();
        for _ in 0..3 {
            board.drop_piece(0, Cell::Yellow).unwrap();
        }
        board.drop_piece(3, Cell::Red).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();
        let mut agent = BaselineAgent::with_seed(Player::Red, 2, 5);
        assert_eq!(agent.choose_move(&board), 0);
    }

    #[test]
    fn never_loses_to_a_random_mover() {
        use crate::game::{GameOutcome, GameState};
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(42);
        let mut agent = BaselineAgent::with_seed(Player::Red, 4, 17);
        let mut state = GameState::initial();
        while !state.is_terminal() {
            let col = if state.current_player() == Player::Red {
                agent.choose_move(state.board())
            } else {
                let valid = state.board().valid_moves();
                valid[rng.random_range(0..valid.len())]
            };
            state.apply_move_mut(col).unwrap();
        }
        assert_ne!(
            state.outcome(),
            Some(GameOutcome::Winner(Player::Yellow)),
            "a depth-4 search must not lose to random play"
        );
    }

    #[test]
    fn two_baselines_finish_a_game() {
        use crate::game::{GameOutcome, GameState};

        let mut red = BaselineAgent::with_seed(Player::Red, 3, 11);
        let mut yellow = BaselineAgent::with_seed(Player::Yellow, 3, 13);
        let mut state = GameState::initial();
        let mut plies = 0;
        while !state.is_terminal() {
            let col = if state.current_player() == Player::Red {
                red.choose_move(state.board())
            } else {
                yellow.choose_move(state.board())
            };
            state.apply_move_mut(col).unwrap();
            plies += 1;
            assert!(plies <= ROWS * COLS, "game must terminate");
        }
        assert!(matches!(
            state.outcome(),
            Some(GameOutcome::Winner(_)) | Some(GameOutcome::Draw)
        ));
    }
}
