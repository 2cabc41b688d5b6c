//! Turn Snake - a terminal snake that only remembers where it turned
//!
//! This library provides:
//! - Core game logic and the segment reconstruction (game module)
//! - Keyboard mapping from terminal keys to game commands (input module)
//! - Scene rasterisation and TUI rendering (render module)
//! - The tokio-driven play session (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
