//! Benchmark records and artifact output.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;

use crate::error::BenchmarkError;

/// Which agent holds the first-move seat for a block of games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    EngineFirst,
    BaselineFirst,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::EngineFirst => write!(f, "engine_first"),
            Phase::BaselineFirst => write!(f, "baseline_first"),
        }
    }
}

/// One move of one benchmark game.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    pub game_id: u32,
    pub phase: Phase,
    pub move_num: u32,
    pub player: String,
    pub agent: String,
    pub column: usize,
    pub move_time_ms: f64,
}

/// One completed benchmark game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_id: u32,
    pub phase: Phase,
    pub engine_first: bool,
    /// "Red", "Yellow" or "Draw".
    pub winner: String,
    pub engine_won: bool,
    pub total_moves: u32,
    pub game_time_ms: f64,
    pub engine_avg_move_ms: f64,
    pub baseline_avg_move_ms: f64,
    pub engine_moves: u32,
    pub baseline_moves: u32,
}

/// Aggregated outcome of a benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_games: u32,
    pub engine_wins: u32,
    pub baseline_wins: u32,
    pub draws: u32,
    pub engine_win_rate: f64,
    pub engine_wins_moving_first: u32,
    pub engine_wins_moving_second: u32,
    pub avg_moves_per_game: f64,
    pub engine_avg_move_ms: f64,
    pub baseline_avg_move_ms: f64,
}

#[derive(Debug, Default)]
pub struct BenchmarkResults {
    pub games: Vec<GameRecord>,
    pub moves: Vec<MoveRecord>,
}

impl BenchmarkResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> Summary {
        let total_games = self.games.len() as u32;
        let engine_wins = self.games.iter().filter(|g| g.engine_won).count() as u32;
        let draws = self.games.iter().filter(|g| g.winner == "Draw").count() as u32;
        let baseline_wins = total_games - engine_wins - draws;
        let engine_wins_moving_first = self
            .games
            .iter()
            .filter(|g| g.engine_won && g.engine_first)
            .count() as u32;
        let engine_wins_moving_second = engine_wins - engine_wins_moving_first;

        let avg = |values: Vec<f64>| {
            if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            }
        };
        let avg_moves_per_game = avg(self.games.iter().map(|g| g.total_moves as f64).collect());
        let engine_avg_move_ms = avg(self.games.iter().map(|g| g.engine_avg_move_ms).collect());
        let baseline_avg_move_ms = avg(self.games.iter().map(|g| g.baseline_avg_move_ms).collect());

        Summary {
            total_games,
            engine_wins,
            baseline_wins,
            draws,
            engine_win_rate: if total_games == 0 {
                0.0
            } else {
                f64::from(engine_wins) / f64::from(total_games)
            },
            engine_wins_moving_first,
            engine_wins_moving_second,
            avg_moves_per_game,
            engine_avg_move_ms,
            baseline_avg_move_ms,
        }
    }

    /// Human-readable summary for the terminal.
    pub fn report(&self) -> String {
        let s = self.summary();
        let mut out = String::new();
        out.push_str("==================================================\n");
        out.push_str("Benchmark results\n");
        out.push_str("==================================================\n");
        out.push_str(&format!("Games played:        {}\n", s.total_games));
        out.push_str(&format!(
            "Engine wins:         {} ({:.1}%)\n",
            s.engine_wins,
            s.engine_win_rate * 100.0
        ));
        out.push_str(&format!("Baseline wins:       {}\n", s.baseline_wins));
        out.push_str(&format!("Draws:               {}\n", s.draws));
        out.push_str(&format!(
            "Engine wins (first/second seat): {}/{}\n",
            s.engine_wins_moving_first, s.engine_wins_moving_second
        ));
        out.push_str(&format!("Avg moves per game:  {:.1}\n", s.avg_moves_per_game));
        out.push_str(&format!(
            "Avg move time:       engine {:.1} ms, baseline {:.1} ms\n",
            s.engine_avg_move_ms, s.baseline_avg_move_ms
        ));
        out.push_str("==================================================");
        out
    }

    /// Write per-game and per-move JSON artifacts into `dir`, returning
    /// the two file paths.
    pub fn save(&self, dir: &Path) -> Result<(PathBuf, PathBuf), BenchmarkError> {
        std::fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d_%H%M%S");

        let games_path = dir.join(format!("games_{stamp}.json"));
        std::fs::write(&games_path, serde_json::to_string_pretty(&self.games)?)?;

        let moves_path = dir.join(format!("moves_{stamp}.json"));
        std::fs::write(&moves_path, serde_json::to_string_pretty(&self.moves)?)?;

        Ok((games_path, moves_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: u32, phase: Phase, winner: &str, engine_won: bool) -> GameRecord {
        GameRecord {
            game_id: id,
            phase,
            engine_first: phase == Phase::EngineFirst,
            winner: winner.to_string(),
            engine_won,
            total_moves: 20,
            game_time_ms: 100.0,
            engine_avg_move_ms: 8.0,
            baseline_avg_move_ms: 2.0,
            engine_moves: 10,
            baseline_moves: 10,
        }
    }

    #[test]
    fn summary_math() {
        let mut results = BenchmarkResults::new();
        results.games.push(game(0, Phase::EngineFirst, "Red", true));
        results.games.push(game(1, Phase::EngineFirst, "Yellow", false));
        results.games.push(game(2, Phase::BaselineFirst, "Yellow", true));
        results.games.push(game(3, Phase::BaselineFirst, "Draw", false));

        let s = results.summary();
        assert_eq!(s.total_games, 4);
        assert_eq!(s.engine_wins, 2);
        assert_eq!(s.baseline_wins, 1);
        assert_eq!(s.draws, 1);
        assert_eq!(s.engine_wins_moving_first, 1);
        assert_eq!(s.engine_wins_moving_second, 1);
        assert!((s.engine_win_rate - 0.5).abs() < 1e-9);
        assert!((s.avg_moves_per_game - 20.0).abs() < 1e-9);
    }

    #[test]
    fn empty_results_summarize_to_zero() {
        let s = BenchmarkResults::new().summary();
        assert_eq!(s.total_games, 0);
        assert_eq!(s.engine_win_rate, 0.0);
        assert_eq!(s.avg_moves_per_game, 0.0);
    }

    #[test]
    fn save_writes_parseable_json() {
        let mut results = BenchmarkResults::new();
        results.games.push(game(0, Phase::EngineFirst, "Red", true));
        results.moves.push(MoveRecord {
            game_id: 0,
            phase: Phase::EngineFirst,
            move_num: 1,
            player: "Red".to_string(),
            agent: "Minimax".to_string(),
            column: 3,
            move_time_ms: 5.5,
        });

        let dir = tempfile::tempdir().unwrap();
        let (games_path, moves_path) = results.save(dir.path()).unwrap();

        let games: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&games_path).unwrap()).unwrap();
        assert_eq!(games[0]["winner"], "Red");
        assert_eq!(games[0]["phase"], "engine_first");

        let moves: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&moves_path).unwrap()).unwrap();
        assert_eq!(moves[0]["column"], 3);
        assert_eq!(moves[0]["agent"], "Minimax");
    }

    #[test]
    fn report_mentions_the_headline_numbers() {
        let mut results = BenchmarkResults::new();
        results.games.push(game(0, Phase::EngineFirst, "Red", true));
        let report = results.report();
        assert!(report.contains("Games played"));
        assert!(report.contains("100.0%"));
    }
}
