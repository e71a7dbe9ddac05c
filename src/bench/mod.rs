//! Benchmark harness: engine vs. baseline over many games, with JSON
//! artifacts for offline analysis.

mod results;
mod runner;

pub use results::{BenchmarkResults, GameRecord, MoveRecord, Phase, Summary};
pub use runner::{AgentFactory, BenchmarkConfig, BenchmarkRunner};
