//! Core game logic for the turn-tracking snake
//!
//! Nothing in here does I/O. The controller paints through the [`Surface`]
//! trait and exposes its single repeat timer as plain state, so the terminal
//! front end and the tests drive it the same way.

pub mod config;
pub mod controller;
pub mod direction;
pub mod state;
pub mod surface;

// Re-export commonly used types
pub use config::{Rgb, Size, SnakeConfig};
pub use controller::{KeyDown, MoveOutcome, Segment, SnakeController};
pub use direction::{Command, Direction, SpeedOperation, is_horizontal, is_vertical};
pub use state::{Position, RepeatTimer, SnakeState, TurnPoint};
pub use surface::{Scene, SegmentRect, Surface};
