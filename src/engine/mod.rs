//! Game-playing agents: the minimax search engine, its evaluation and
//! caching machinery, and the benchmark baseline.

pub mod agent;
pub mod baseline;
pub mod eval;
pub mod ordering;
pub mod table;
pub mod threats;

mod search;

pub use agent::Agent;
pub use baseline::BaselineAgent;
pub use eval::Evaluator;
pub use ordering::order_moves;
pub use search::SearchEngine;
pub use table::{position_key, Bound, TranspositionTable, TtEntry};
pub use threats::{find_threats, threat_score, zugzwang_score, Threat};
