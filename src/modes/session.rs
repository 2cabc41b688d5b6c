//! Couples a [`SnakeController`] to a tokio clock.
//!
//! The controller only records which repeat timer should be running. The
//! [`RepeatClock`] here mirrors that record onto a real `tokio::time::Interval`,
//! dropping the old interval whenever the timer id changes so two timers never
//! run at once.

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::game::{KeyDown, MoveOutcome, RepeatTimer, Surface, SnakeController};
use crate::metrics::SessionMetrics;

/// The one live interval, tagged with the timer id it was armed for
#[derive(Default)]
pub struct RepeatClock {
    armed: Option<(u64, Interval)>,
}

impl RepeatClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn armed_id(&self) -> Option<u64> {
        self.armed.as_ref().map(|(id, _)| *id)
    }

    /// Re-arm or disarm to match the controller's timer
    pub fn sync(&mut self, timer: Option<&RepeatTimer>) {
        match timer {
            Some(timer) if self.armed_id() == Some(timer.id) => {}
            Some(timer) => {
                let mut ticker = interval_at(Instant::now() + timer.delay, timer.delay);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                self.armed = Some((timer.id, ticker));
            }
            None => self.armed = None,
        }
    }

    /// Resolves on the next tick; never resolves while disarmed
    pub async fn tick(&mut self) {
        match &mut self.armed {
            Some((_, ticker)) => {
                ticker.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

pub struct Session<S: Surface> {
    controller: SnakeController<S>,
    clock: RepeatClock,
    metrics: SessionMetrics,
}

impl<S: Surface> Session<S> {
    pub fn new(controller: SnakeController<S>) -> Self {
        Self {
            controller,
            clock: RepeatClock::new(),
            metrics: SessionMetrics::new(),
        }
    }

    pub fn controller(&self) -> &SnakeController<S> {
        &self.controller
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut SessionMetrics {
        &mut self.metrics
    }

    pub fn clock(&self) -> &RepeatClock {
        &self.clock
    }

    /// Hand a raw key code to the controller and bring the clock in line
    pub fn key_down(&mut self, key_code: u32) -> Option<KeyDown> {
        let key = self.controller.on_key_down(key_code)?;
        if let Some(outcome) = key.outcome {
            self.metrics.record(outcome);
        }
        self.clock.sync(self.controller.state().repeat_timer());
        Some(key)
    }

    /// Wait for the repeat timer to fire
    pub async fn next_tick(&mut self) {
        self.clock.tick().await;
    }

    /// Run the move the repeat timer stands for
    pub fn fire(&mut self) -> Option<MoveOutcome> {
        let outcome = self.controller.tick();
        if let Some(outcome) = outcome {
            self.metrics.record(outcome);
        }
        self.clock.sync(self.controller.state().repeat_timer());
        outcome
    }
}
