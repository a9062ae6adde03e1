//! Retro Snake - the classic grid snake game in the terminal
//!
//! This library provides:
//! - Core game logic with injectable time and randomness (game module)
//! - Key mapping (input module)
//! - Draw list and ratatui rendering (render module)
//! - Sound cues (audio module)
//! - Session statistics (metrics module)
//! - The interactive terminal loop (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
