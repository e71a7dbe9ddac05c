use std::sync::OnceLock;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// A contiguous run of four cells, the atomic unit of win detection,
/// line scoring and threat discovery.
pub type Window = [(usize, usize); 4];

/// All 69 four-cell windows of the board, in a fixed scan order:
/// horizontal (row-major), vertical, diagonal down-right, diagonal
/// up-right. Win detection reports the owner of the first completed
/// window in this order.
pub fn windows() -> &'static [Window] {
    static WINDOWS: OnceLock<Vec<Window>> = OnceLock::new();
    WINDOWS.get_or_init(|| {
        let mut out = Vec::with_capacity(69);
        for row in 0..ROWS {
            for col in 0..=COLS - 4 {
                out.push(std::array::from_fn(|i| (row, col + i)));
            }
        }
        for row in 0..=ROWS - 4 {
            for col in 0..COLS {
                out.push(std::array::from_fn(|i| (row + i, col)));
            }
        }
        for row in 0..=ROWS - 4 {
            for col in 0..=COLS - 4 {
                out.push(std::array::from_fn(|i| (row + i, col + i)));
            }
        }
        for row in 3..ROWS {
            for col in 0..=COLS - 4 {
                out.push(std::array::from_fn(|i| (row - i, col + i)));
            }
        }
        out
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// The 6x7 grid. Row 0 is the top, row 5 the bottom; within a column,
/// pieces are contiguous from the bottom up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    last_move: Option<usize>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            last_move: None,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// The most recently played column, if any. Advisory only.
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Drop a piece in a column, returning the row it landed in.
    /// Fails closed: an out-of-range or full column leaves the board
    /// untouched.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }
        match self.playable_row(col) {
            Some(row) => {
                self.cells[row][col] = cell;
                self.last_move = Some(col);
                Ok(row)
            }
            None => Err(MoveError::ColumnFull),
        }
    }

    pub fn is_valid_move(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col] == Cell::Empty
    }

    /// Valid columns in ascending order.
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid_move(col)).collect()
    }

    /// The row a piece dropped in `col` would land in, or `None` if the
    /// column is full.
    pub fn playable_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.cells[0][col] != Cell::Empty)
    }

    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Scan every window for four equal non-empty cells. Returns the
    /// owner of the first completed window in scan order, or
    /// `Cell::Empty` if there is none.
    pub fn winner(&self) -> Cell {
        for window in windows() {
            let (r0, c0) = window[0];
            let first = self.cells[r0][c0];
            if first != Cell::Empty && window.iter().all(|&(r, c)| self.cells[r][c] == first) {
                return first;
            }
        }
        Cell::Empty
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
