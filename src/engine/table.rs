//! Position-keyed cache of search results with alpha-beta bound
//! semantics.

use std::collections::HashMap;

use crate::game::{Board, Cell, COLS, ROWS};

/// How a cached score relates to the window that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// The true score is at least this (fail-high).
    Lower,
    /// The true score is at most this (fail-low).
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    pub score: i32,
    pub depth: u32,
    pub bound: Bound,
}

/// Position key: the grid read row-major as a base-3 numeral (Empty=0,
/// Red=1, Yellow=2). 3^42 overflows u64, hence u128. The side to move
/// is deliberately not encoded: the table never leaves the engine
/// instance that fills it, and that engine always searches from a
/// single root perspective, so equal grids within its tree are
/// interchangeable.
pub fn position_key(board: &Board) -> u128 {
    let mut key: u128 = 0;
    for row in 0..ROWS {
        for col in 0..COLS {
            let digit = match board.get(row, col) {
                Cell::Empty => 0,
                Cell::Red => 1,
                Cell::Yellow => 2,
            };
            key = key * 3 + digit;
        }
    }
    key
}

/// Unbounded per-engine transposition table. Last write wins; entries
/// live until the engine is dropped at the end of the game.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<u128, TtEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        TranspositionTable {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: u128) -> Option<&TtEntry> {
        self.entries.get(&key)
    }

    pub fn insert(&mut self, key: u128, entry: TtEntry) {
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
