//! One interactive game at the terminal, human vs. human or human vs.
//! the search engine.

use std::io;

use crate::engine::SearchEngine;
use crate::game::{GameOutcome, GameState, Player};

use super::display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached a win or draw.
    Finished,
    /// The human quit mid-game.
    Quit,
}

pub struct GameSession {
    state: GameState,
    engine: Option<SearchEngine>,
    last_engine_move: Option<usize>,
}

impl GameSession {
    pub fn vs_human() -> Self {
        GameSession {
            state: GameState::initial(),
            engine: None,
            last_engine_move: None,
        }
    }

    /// The human sits Red and moves first; the engine plays Yellow.
    pub fn vs_computer() -> Self {
        GameSession {
            state: GameState::initial(),
            engine: Some(SearchEngine::new(Player::Yellow)),
            last_engine_move: None,
        }
    }

    pub fn run(&mut self) -> io::Result<SessionEnd> {
        while !self.state.is_terminal() {
            display::render_board(self.state.board(), self.last_engine_move)?;

            let engine_turn =
                self.engine.is_some() && self.state.current_player() == Player::Yellow;
            display::print_turn(self.state.current_player(), engine_turn);

            if engine_turn {
                self.engine_move();
                continue;
            }

            if let Some(col) = self.last_engine_move.take() {
                display::print_computer_move(col);
            }

            let input = display::read_move()?;
            if input == "q" {
                return Ok(SessionEnd::Quit);
            }
            match input.parse::<usize>() {
                Ok(n) if (1..=crate::game::COLS).contains(&n) => {
                    if self.state.apply_move_mut(n - 1).is_err() {
                        display::print_invalid_move();
                        display::pause()?;
                    }
                }
                _ => {
                    display::print_invalid_move();
                    display::pause()?;
                }
            }
        }

        display::render_board(self.state.board(), self.last_engine_move)?;
        match self.state.outcome() {
            Some(GameOutcome::Winner(player)) => {
                let computer_won = self.engine.is_some() && player == Player::Yellow;
                display::print_winner(player, computer_won);
            }
            _ => display::print_draw(),
        }
        Ok(SessionEnd::Finished)
    }

    fn engine_move(&mut self) {
        if let Some(engine) = &mut self.engine {
            let col = engine.choose_move(self.state.board());
            // the engine only proposes legal columns
            if self.state.apply_move_mut(col).is_ok() {
                self.last_engine_move = Some(col);
            }
        }
    }
}
