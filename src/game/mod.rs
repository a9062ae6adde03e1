//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Time and randomness come in from the caller, so every rule can be driven
//! deterministically in tests.

pub mod clock;
pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod state;
pub mod timing;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{FrameResult, GameEngine, StepInfo};
pub use food::FoodSpawner;
pub use grid::Grid;
pub use state::{CollisionType, GameState, Phase, Position, Snake};
pub use timing::TemporalGate;
