//! Deterministic snake simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick cadence set by difficulty
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Difficulty, Direction, EndCause, GameEvent, GamePhase, GameState, Mode};
pub use tick::{TickInput, tick};
