//! Depth-limited minimax with alpha-beta pruning, transposition
//! caching and heuristic move ordering.

use crate::game::{Board, Player, COLS};

use super::{
    ordering::order_moves,
    table::{position_key, Bound, TranspositionTable, TtEntry},
    Agent, Evaluator,
};

const MIN_DEPTH: u32 = 6;
const MAX_DEPTH: u32 = 12;
const WIN_SCORE: i32 = 100_000;

/// Search depth by piece count: the branching factor shrinks toward
/// the endgame, so the search deepens as the board fills.
fn depth_for(pieces: usize) -> u32 {
    match pieces {
        0..=8 => MIN_DEPTH,
        9..=20 => MIN_DEPTH + 2,
        21..=30 => MAX_DEPTH - 2,
        _ => MAX_DEPTH,
    }
}

/// The main engine: one instance per player per game. Owns its
/// evaluator and transposition table; the table grows monotonically
/// over the instance's lifetime and is never shared.
pub struct SearchEngine {
    player: Player,
    opponent: Player,
    evaluator: Evaluator,
    table: TranspositionTable,
}

impl SearchEngine {
    pub fn new(player: Player) -> Self {
        SearchEngine {
            player,
            opponent: player.other(),
            evaluator: Evaluator::new(player),
            table: TranspositionTable::new(),
        }
    }

    /// Cached positions accumulated so far (diagnostics only).
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Select a column for the engine's player. Must be called with at
    /// least one valid move on the board.
    pub fn choose_move(&mut self, board: &Board) -> usize {
        let valid = board.valid_moves();
        if valid.len() == 1 {
            return valid[0];
        }

        // immediate win, lowest column first
        for &col in &valid {
            let mut next = *board;
            if next.drop_piece(col, self.player.to_cell()).is_ok()
                && next.winner() == self.player.to_cell()
            {
                return col;
            }
        }

        // immediate block, lowest column first
        for &col in &valid {
            let mut next = *board;
            if next.drop_piece(col, self.opponent.to_cell()).is_ok()
                && next.winner() == self.opponent.to_cell()
            {
                return col;
            }
        }

        let depth = depth_for(board.piece_count());
        let mut best_score = i32::MIN;
        let mut best_moves: Vec<usize> = Vec::new();

        for col in order_moves(board, &valid, self.player) {
            let mut next = *board;
            if next.drop_piece(col, self.player.to_cell()).is_err() {
                continue;
            }
            let score = self.minimax(&next, depth - 1, i32::MIN, i32::MAX, false);
            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(col);
            } else if score == best_score {
                best_moves.push(col);
            }
        }

        // deterministic tie-break: the center if it is among the best,
        // otherwise the lowest best column
        let center = COLS / 2;
        if best_moves.contains(&center) {
            return center;
        }
        best_moves.sort_unstable();
        best_moves.first().copied().unwrap_or(valid[0])
    }

    fn minimax(&mut self, board: &Board, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        let key = position_key(board);

        // probe before the terminal checks; a sufficiently deep entry
        // can answer or tighten the window outright
        if let Some(&entry) = self.table.get(key) {
            if entry.depth >= depth {
                match entry.bound {
                    Bound::Exact => return entry.score,
                    Bound::Lower => alpha = alpha.max(entry.score),
                    Bound::Upper => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    return entry.score;
                }
            }
        }

        let winner = board.winner();
        if winner == self.player.to_cell() {
            // higher remaining depth = fewer moves spent = faster win
            return WIN_SCORE + depth as i32;
        }
        if winner == self.opponent.to_cell() {
            return -WIN_SCORE - depth as i32;
        }
        if board.is_full() || depth == 0 {
            return self.evaluator.score(board);
        }

        // the window this node actually searches with, for bound
        // classification on store
        let (alpha0, beta0) = (alpha, beta);
        let mover = if maximizing { self.player } else { self.opponent };

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for col in order_moves(board, &board.valid_moves(), mover) {
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

        let bound = if best <= alpha0 {
            Bound::Upper
        } else if best >= beta0 {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.table.insert(key, TtEntry { score: best, depth, bound });

        best
    }
}

impl Agent for SearchEngine {
    fn choose_move(&mut self, board: &Board) -> usize {
        SearchEngine::choose_move(self, board)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
