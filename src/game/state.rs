use std::time::Duration;

use super::direction::Direction;

/// A point on the drawing surface, in pixels, aligned to the block grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Where the snake changed direction, and which way it went from there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPoint {
    pub coordinates: Position,
    pub direction: Direction,
}

impl TurnPoint {
    pub fn new(coordinates: Position, direction: Direction) -> Self {
        Self {
            coordinates,
            direction,
        }
    }
}

/// Handle for the one scheduled repeating move.
///
/// Each install gets a fresh `id`, so whoever drives the clock can tell a
/// reinstalled timer from the one it is already running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatTimer {
    pub id: u64,
    pub direction: Direction,
    pub delay: Duration,
}

/// Complete mutable state of one game session
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeState {
    pub head: Position,
    pub last_direction: Option<Direction>,
    /// Append-only, oldest first
    pub turn_history: Vec<TurnPoint>,
    pub move_delay_ms: u64,
    repeat: Option<RepeatTimer>,
    next_timer_id: u64,
}

impl SnakeState {
    /// Head at the origin, no direction yet, nothing scheduled
    pub fn new(move_delay_ms: u64) -> Self {
        Self {
            head: Position::default(),
            last_direction: None,
            turn_history: Vec::new(),
            move_delay_ms,
            repeat: None,
            next_timer_id: 0,
        }
    }

    pub fn repeat_timer(&self) -> Option<&RepeatTimer> {
        self.repeat.as_ref()
    }

    pub fn is_moving(&self) -> bool {
        self.repeat.is_some()
    }

    /// Replace whatever timer is running with a new one for `direction`
    pub fn schedule_repeat(&mut self, direction: Direction) -> RepeatTimer {
        self.cancel_repeat();
        self.next_timer_id += 1;

        let timer = RepeatTimer {
            id: self.next_timer_id,
            direction,
            delay: Duration::from_millis(self.move_delay_ms),
        };
        self.repeat = Some(timer);
        timer
    }

    /// Drop the running timer, returning it if there was one
    pub fn cancel_repeat(&mut self) -> Option<RepeatTimer> {
        self.repeat.take()
    }
}
