//! Core Connect Four game logic: board representation, player types,
//! and the game state machine.

mod board;
mod player;
mod state;

pub use board::{windows, Board, Cell, Window, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
