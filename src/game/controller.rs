use tracing::{debug, info, warn};

use super::{
    config::SnakeConfig,
    direction::{Command, Direction, SpeedOperation, is_horizontal, is_vertical, same_axis},
    state::{Position, SnakeState, TurnPoint},
    surface::{SegmentRect, Surface},
};

/// What a call to [`SnakeController::move_snake`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No direction was given
    Ignored,
    /// Same-axis request without the override; nothing changed
    Reversal,
    /// The step would leave the board; the repeat timer was cancelled
    Blocked,
    /// The head advanced one block
    Moved { turned: bool },
}

/// A key press the controller acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDown {
    pub command: Command,
    /// Set for direction keys; speed keys never move the head
    pub outcome: Option<MoveOutcome>,
}

/// One rectangle of the rendered snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub direction: Option<Direction>,
    pub position: Position,
    pub is_head: bool,
}

impl Segment {
    fn body(direction: Direction, position: Position) -> Self {
        Self {
            direction: Some(direction),
            position,
            is_head: false,
        }
    }
}

/// Moves the snake, records its turns and paints it on a surface.
///
/// Only the head and the turn points are stored. Every body segment is
/// recomputed on each draw by walking backwards from the head through the
/// turn history.
pub struct SnakeController<S: Surface> {
    config: SnakeConfig,
    state: SnakeState,
    surface: S,
}

impl<S: Surface> SnakeController<S> {
    /// Create the controller and draw the initial head
    pub fn new(config: SnakeConfig, surface: S) -> Self {
        let state = SnakeState::new(config.move_delay_ms);
        let mut controller = Self {
            config,
            state,
            surface,
        };
        controller.draw_snake();
        controller
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn state(&self) -> &SnakeState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Entry point for raw key codes; unmapped codes are ignored
    pub fn on_key_down(&mut self, key_code: u32) -> Option<KeyDown> {
        let command = Command::from_key_code(key_code)?;
        debug!(key_code, ?command, "key down");
        let outcome = self.apply(command);
        Some(KeyDown { command, outcome })
    }

    /// Run a command coming from a key press
    pub fn apply(&mut self, command: Command) -> Option<MoveOutcome> {
        match command {
            Command::Move(direction) => Some(self.move_snake(Some(direction), false)),
            Command::ChangeSpeed(operation) => {
                self.change_interval_speed(operation);
                None
            }
        }
    }

    /// Fire the repeat timer, if one is installed
    pub fn tick(&mut self) -> Option<MoveOutcome> {
        let timer = *self.state.repeat_timer()?;
        Some(self.move_snake(Some(timer.direction), true))
    }

    pub fn move_snake(
        &mut self,
        direction: Option<Direction>,
        ignore_opposite_check: bool,
    ) -> MoveOutcome {
        let Some(direction) = direction else {
            return MoveOutcome::Ignored;
        };

        let Some(candidate) = self.new_coordinates(direction, ignore_opposite_check, None) else {
            debug!(direction = direction.label(), "same-axis move ignored");
            return MoveOutcome::Reversal;
        };

        if !self.in_bounds(candidate) {
            if let Some(timer) = self.state.cancel_repeat() {
                info!(
                    x = self.state.head.x,
                    y = self.state.head.y,
                    direction = direction.label(),
                    timer = timer.id,
                    "snake stopped at the wall"
                );
            }
            return MoveOutcome::Blocked;
        }

        let turned = self.state.last_direction != Some(direction);
        if turned {
            // The corner is where the head was before this step.
            let turn = TurnPoint::new(self.state.head, direction);
            self.state.turn_history.push(turn);
            self.state.last_direction = Some(direction);
            debug!(
                x = turn.coordinates.x,
                y = turn.coordinates.y,
                direction = direction.label(),
                turns = self.state.turn_history.len(),
                "turn recorded"
            );
        }

        self.state.head = candidate;
        self.draw_snake();
        self.state.schedule_repeat(direction);

        MoveOutcome::Moved { turned }
    }

    /// Position one block away from `from` (the head by default).
    ///
    /// Returns `None` when `direction` shares an axis with the current
    /// direction and the check is not overridden.
    pub fn new_coordinates(
        &self,
        direction: Direction,
        ignore_opposite_check: bool,
        from: Option<Position>,
    ) -> Option<Position> {
        if !ignore_opposite_check && same_axis(Some(direction), self.state.last_direction) {
            return None;
        }

        Some(self.step(direction, from.unwrap_or(self.state.head)))
    }

    fn step(&self, direction: Direction, from: Position) -> Position {
        let (dx, dy) = direction.delta();
        from.moved_by(
            dx * self.config.block_size.width,
            dy * self.config.block_size.height,
        )
    }

    /// Whether a whole block fits on the surface at `position`
    pub fn in_bounds(&self, position: Position) -> bool {
        let max_x = self.config.bounds.width - self.config.block_size.width;
        let max_y = self.config.bounds.height - self.config.block_size.height;

        (0..=max_x).contains(&position.x) && (0..=max_y).contains(&position.y)
    }

    /// Head first, then the body from the neck back to the tail
    pub fn segments(&self) -> Vec<Segment> {
        let history = &self.state.turn_history;
        let mut segments = Vec::with_capacity(history.len() * 2 + 1);
        segments.push(Segment {
            direction: self.state.last_direction,
            position: self.state.head,
            is_head: true,
        });

        let mut cursor = self.state.head;
        let mut remaining = history.len();

        while remaining > 0 {
            let turn = history[remaining - 1];
            cursor = self.step(turn.direction.opposite(), cursor);

            if !self.in_bounds(cursor) {
                warn!(
                    remaining,
                    x = cursor.x,
                    y = cursor.y,
                    "body walk left the board before reaching its turn point"
                );
                break;
            }

            segments.push(Segment::body(turn.direction, cursor));

            if cursor == turn.coordinates {
                remaining -= 1;
                // Fill the corner with the older leg's orientation too.
                if let Some(older) = remaining.checked_sub(1).map(|index| history[index]) {
                    segments.push(Segment::body(older.direction, cursor));
                }
            }
        }

        segments
    }

    /// Clear the surface and paint every segment
    pub fn draw_snake(&mut self) {
        let segments = self.segments();

        self.surface.clear();
        for segment in segments {
            let rect = self.segment_rect(segment.direction, segment.position);
            let color = if segment.is_head {
                self.config.head_color
            } else {
                self.config.body_color
            };
            self.surface.fill_rect(rect, color);
        }
    }

    /// Rectangle for a segment: full length along the travel axis, inset across it
    pub fn segment_rect(&self, direction: Option<Direction>, at: Position) -> SegmentRect {
        let block = self.config.block_size;
        let snake = self.config.snake_size;
        let x_offset = block.width - snake.width;
        let y_offset = block.height - snake.height;
        let horizontal = is_horizontal(direction);
        let vertical = is_vertical(direction);

        SegmentRect::new(
            at.x + if horizontal { 0 } else { x_offset },
            at.y + if vertical { 0 } else { y_offset },
            snake.width + if horizontal { x_offset } else { -x_offset },
            snake.height + if vertical { y_offset } else { -y_offset },
        )
    }

    /// Step the move delay and restart the timer so it applies on the next tick
    pub fn change_interval_speed(&mut self, operation: SpeedOperation) {
        let current = self.state.move_delay_ms;
        let proposed = match operation {
            SpeedOperation::Increase => current.checked_add(SnakeConfig::SPEED_STEP_MS),
            SpeedOperation::Decrease => current.checked_sub(SnakeConfig::SPEED_STEP_MS),
        };

        match proposed {
            Some(delay) if delay >= SnakeConfig::MIN_MOVE_DELAY_MS => {
                self.state.move_delay_ms = delay;
                debug!(delay_ms = delay, "move delay changed");
            }
            _ => debug!(delay_ms = current, ?operation, "move delay at its limit"),
        }

        if let Some(direction) = self.state.last_direction {
            self.state.schedule_repeat(direction);
        }
    }
}
