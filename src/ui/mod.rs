//! Interactive terminal front end.

pub mod display;
mod session;

pub use session::{GameSession, SessionEnd};
