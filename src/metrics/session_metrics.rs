use std::time::{Duration, Instant};

use crate::game::MoveOutcome;

/// Counters shown in the status line while a session runs
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub moves: u32,
    pub turns: u32,
    pub wall_stops: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            moves: 0,
            turns: 0,
            wall_stops: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn record(&mut self, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Moved { turned } => {
                self.moves += 1;
                if turned {
                    self.turns += 1;
                }
            }
            MoveOutcome::Blocked => self.wall_stops += 1,
            MoveOutcome::Ignored | MoveOutcome::Reversal => {}
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
