//! Connect Four with a minimax engine.
//!
//! - [`game`]: board, players and turn-taking rules
//! - [`engine`]: alpha-beta search, evaluation, threat analysis and
//!   the benchmark baseline
//! - [`bench`]: engine-vs-baseline benchmark harness
//! - [`ui`]: interactive terminal front end
//! - [`config`]: TOML application configuration
//! - [`error`]: crate-level error types

pub mod bench;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod ui;
