//! Head-to-head benchmark of the engine against the baseline.
//!
//! A run plays `num_games` games in two equal phases: the engine moves
//! first in phase one, the baseline in phase two, so first-move
//! advantage cancels out of the aggregate. Fresh agents are built per
//! game; the engine's transposition table never carries over between
//! games.

use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::engine::Agent;
use crate::error::BenchmarkError;
use crate::game::{GameOutcome, GameState, Player};

use super::results::{BenchmarkResults, GameRecord, MoveRecord, Phase};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Total games across both phases; kept even so the phases match.
    pub num_games: u32,
    pub output_dir: PathBuf,
    pub verbose: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            num_games: 100,
            output_dir: PathBuf::from("results"),
            verbose: true,
        }
    }
}

/// Builds an agent for a seat. The runner calls this once per game so
/// every game starts from clean agent state.
pub type AgentFactory<'a> = &'a dyn Fn(Player) -> Box<dyn Agent>;

pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Self {
        BenchmarkRunner { config }
    }

    /// Play all games and collect the records. Artifact writing is left
    /// to the caller via [`BenchmarkResults::save`].
    pub fn run(
        &self,
        make_engine: AgentFactory<'_>,
        make_baseline: AgentFactory<'_>,
    ) -> Result<BenchmarkResults, BenchmarkError> {
        let mut results = BenchmarkResults::new();
        let per_phase = self.config.num_games / 2;

        for game_id in 0..self.config.num_games {
            let (phase, engine_first) = if game_id < per_phase {
                (Phase::EngineFirst, true)
            } else {
                (Phase::BaselineFirst, false)
            };
            let record = self.play_game(game_id, phase, engine_first, make_engine, make_baseline, &mut results.moves)?;
            if self.config.verbose {
                println!(
                    "game {:>3} [{}]: winner {:<6} in {} moves ({:.0} ms)",
                    record.game_id, record.phase, record.winner, record.total_moves, record.game_time_ms
                );
            }
            results.games.push(record);
        }

        Ok(results)
    }

    fn play_game(
        &self,
        game_id: u32,
        phase: Phase,
        engine_first: bool,
        make_engine: AgentFactory<'_>,
        make_baseline: AgentFactory<'_>,
        moves: &mut Vec<MoveRecord>,
    ) -> Result<GameRecord, BenchmarkError> {
        // Red always moves first; the phase decides who sits Red
        let engine_seat = if engine_first { Player::Red } else { Player::Yellow };
        let mut engine = make_engine(engine_seat);
        let mut baseline = make_baseline(engine_seat.other());

        let mut state = GameState::initial();
        let game_start = Instant::now();
        let mut move_num = 0u32;
        let mut engine_time_ms = 0.0;
        let mut baseline_time_ms = 0.0;
        let mut engine_moves = 0u32;
        let mut baseline_moves = 0u32;

        while !state.is_terminal() {
            let mover = state.current_player();
            let engine_turn = mover == engine_seat;
            let agent: &mut Box<dyn Agent> = if engine_turn { &mut engine } else { &mut baseline };

            let move_start = Instant::now();
            let column = agent.choose_move(state.board());
            let elapsed_ms = move_start.elapsed().as_secs_f64() * 1000.0;

            if state.apply_move_mut(column).is_err() {
                return Err(BenchmarkError::InvalidMove {
                    agent: agent.name().to_string(),
                    column,
                });
            }

            move_num += 1;
            if engine_turn {
                engine_time_ms += elapsed_ms;
                engine_moves += 1;
            } else {
                baseline_time_ms += elapsed_ms;
                baseline_moves += 1;
            }
            moves.push(MoveRecord {
                game_id,
                phase,
                move_num,
                player: mover.name().to_string(),
                agent: agent.name().to_string(),
                column,
                move_time_ms: elapsed_ms,
            });
        }

        let (winner, engine_won) = match state.outcome() {
            Some(GameOutcome::Winner(player)) => (player.name().to_string(), player == engine_seat),
            _ => ("Draw".to_string(), false),
        };

        let avg = |total: f64, n: u32| if n == 0 { 0.0 } else { total / f64::from(n) };
        Ok(GameRecord {
            game_id,
            phase,
            engine_first,
            winner,
            engine_won,
            total_moves: move_num,
            game_time_ms: game_start.elapsed().as_secs_f64() * 1000.0,
            engine_avg_move_ms: avg(engine_time_ms, engine_moves),
            baseline_avg_move_ms: avg(baseline_time_ms, baseline_moves),
            engine_moves,
            baseline_moves,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BaselineAgent;

    #[test]
    fn runs_the_configured_number_of_games() {
        let dir = tempfile::tempdir().unwrap();
        let config = BenchmarkConfig {
            num_games: 2,
            output_dir: dir.path().to_path_buf(),
            verbose: false,
        };
        let runner = BenchmarkRunner::new(config);
        // shallow agents keep the test fast
        let make_engine: AgentFactory =
            &|player| Box::new(BaselineAgent::with_depth(player, 2)) as Box<dyn Agent>;
        let make_baseline: AgentFactory =
            &|player| Box::new(BaselineAgent::with_depth(player, 1)) as Box<dyn Agent>;

        let results = runner.run(make_engine, make_baseline).unwrap();
        assert_eq!(results.games.len(), 2);
        assert_eq!(results.games[0].phase, Phase::EngineFirst);
        assert_eq!(results.games[1].phase, Phase::BaselineFirst);
        let recorded: u32 = results.games.iter().map(|g| g.total_moves).sum();
        assert_eq!(recorded as usize, results.moves.len());
        for game in &results.games {
            assert!(game.total_moves >= 7, "a real game takes at least 7 plies");
        }
    }
}
