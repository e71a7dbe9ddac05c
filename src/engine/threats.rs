//! Threat discovery and Connect Four parity theory.
//!
//! A threat is an empty cell that would complete four in a row for one
//! player. Classic theory classifies threats by row parity: under
//! forced column-filling, threats an odd number of plies above the
//! bottom fall to the first player, even ones to the second. The
//! evaluator leans on this to score latent threats and zugzwang
//! pressure.

use crate::game::{windows, Board, Cell, Player, COLS, ROWS};

/// An empty cell completing a four-in-a-row for some player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threat {
    pub row: usize,
    pub col: usize,
    /// True if the cell sits an odd number of plies above the bottom
    /// of its column.
    pub odd: bool,
}

/// Every window holding exactly three of `cell` and one empty square.
pub fn find_threats(board: &Board, cell: Cell) -> Vec<Threat> {
    let mut threats = Vec::new();
    for window in windows() {
        let mut own = 0;
        let mut empties = 0;
        let mut empty_at = None;
        for &(row, col) in window {
            match board.get(row, col) {
                c if c == cell => own += 1,
                Cell::Empty => {
                    empties += 1;
                    empty_at = Some((row, col));
                }
                _ => {}
            }
        }
        if own == 3 && empties == 1 {
            if let Some((row, col)) = empty_at {
                threats.push(Threat {
                    row,
                    col,
                    odd: (ROWS - 1 - row) % 2 == 1,
                });
            }
        }
    }
    threats
}

/// Odd threats pay off for the first player, even threats for the
/// second.
fn parity_favors(player: Player, odd: bool) -> bool {
    if player.is_first() {
        odd
    } else {
        !odd
    }
}

/// Score `player`'s threat picture: immediately playable threats
/// dominate, latent ones decay with the number of cells still to be
/// filled below them, scaled by parity favorability. Opposing threats
/// apply distinct (heavier for playable) penalties.
pub fn threat_score(board: &Board, player: Player) -> i32 {
    let opponent = player.other();
    let mine = find_threats(board, player.to_cell());
    let theirs = find_threats(board, opponent.to_cell());
    let mut score = 0;

    for t in &mine {
        match board.playable_row(t.col) {
            Some(row) if row == t.row => score += 200,
            Some(row) if row > t.row => {
                let distance = (row - t.row) as i32;
                score += if parity_favors(player, t.odd) {
                    (60 - distance * 8).max(10)
                } else {
                    (30 - distance * 5).max(5)
                };
            }
            _ => {}
        }
    }

    for t in &theirs {
        match board.playable_row(t.col) {
            Some(row) if row == t.row => score -= 180,
            Some(row) if row > t.row => {
                let distance = (row - t.row) as i32;
                score -= if parity_favors(opponent, t.odd) {
                    (55 - distance * 8).max(8)
                } else {
                    (25 - distance * 5).max(3)
                };
            }
            _ => {}
        }
    }

    // Stacked pair: filling the lower threat concedes the upper one,
    // so two own threats on adjacent rows of one column are near-decisive.
    let mut rows_per_column: [Vec<usize>; COLS] = Default::default();
    for t in &mine {
        rows_per_column[t.col].push(t.row);
    }
    for rows in &mut rows_per_column {
        rows.sort_unstable();
        for pair in rows.windows(2) {
            if pair[1] - pair[0] == 1 {
                score += 150;
            }
        }
    }

    score
}

/// Column-filling pressure. A threat sitting directly above a column's
/// playable cell will be handed to its owner by whoever is forced to
/// fill that column; an own parity-favorable threat an even number of
/// cells above the playable row, with no opposing threat between, is a
/// controlled-zugzwang win of the filling race.
pub fn zugzwang_score(board: &Board, player: Player) -> i32 {
    let opponent = player.other();
    let mine = find_threats(board, player.to_cell());
    let theirs = find_threats(board, opponent.to_cell());
    let mut score = 0;

    for col in 0..COLS {
        let Some(playable) = board.playable_row(col) else {
            continue;
        };
        if playable == 0 {
            continue;
        }
        let above = playable - 1;
        if theirs.iter().any(|t| t.col == col && t.row == above) {
            score -= 100;
        }
        if mine.iter().any(|t| t.col == col && t.row == above) {
            score += 90;
        }
    }

    for t in &mine {
        let Some(playable) = board.playable_row(t.col) else {
            continue;
        };
        if playable <= t.row {
            continue;
        }
        let cells_between = playable - t.row;
        if cells_between % 2 != 0 || !parity_favors(player, t.odd) {
            continue;
        }
        let blocked = theirs
            .iter()
            .any(|o| o.col == t.col && o.row > t.row && o.row <= playable);
        if !blocked {
            score += 120;
        }
    }

    score
}
