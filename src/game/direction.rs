/// Direction the snake can travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// The direction pointing the other way along the same axis
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns the unit delta (dx, dy) for this direction; y grows downwards
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

pub fn is_horizontal(direction: Option<Direction>) -> bool {
    matches!(direction, Some(Direction::Left | Direction::Right))
}

pub fn is_vertical(direction: Option<Direction>) -> bool {
    matches!(direction, Some(Direction::Up | Direction::Down))
}

/// True when both directions are set and lie on the same axis
pub fn same_axis(a: Option<Direction>, b: Option<Direction>) -> bool {
    (is_horizontal(a) && is_horizontal(b)) || (is_vertical(a) && is_vertical(b))
}

/// Adjustment applied to the move delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedOperation {
    /// Shorter delay, faster snake
    Decrease,
    /// Longer delay, slower snake
    Increase,
}

/// Something a key press asks the controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    ChangeSpeed(SpeedOperation),
}

// Letter codes (upper and lower case) followed by the arrow code.
const LEFT_CODES: [u32; 3] = [65, 97, 37];
const UP_CODES: [u32; 3] = [87, 119, 38];
const RIGHT_CODES: [u32; 3] = [68, 100, 39];
const DOWN_CODES: [u32; 3] = [83, 115, 40];

pub const DECREASE_CODE: u32 = 43;
pub const INCREASE_CODE: u32 = 45;

/// Resolve a raw key code into a direction, if it is one of the movement keys
pub fn direction_for_key_code(code: u32) -> Option<Direction> {
    let table = [
        (Direction::Left, LEFT_CODES),
        (Direction::Up, UP_CODES),
        (Direction::Right, RIGHT_CODES),
        (Direction::Down, DOWN_CODES),
    ];

    table
        .iter()
        .find(|(_, codes)| codes.contains(&code))
        .map(|(direction, _)| *direction)
}

pub fn speed_operation_for_key_code(code: u32) -> Option<SpeedOperation> {
    match code {
        DECREASE_CODE => Some(SpeedOperation::Decrease),
        INCREASE_CODE => Some(SpeedOperation::Increase),
        _ => None,
    }
}

impl Command {
    /// Resolve a raw key code; unmapped codes yield `None`
    pub fn from_key_code(code: u32) -> Option<Command> {
        direction_for_key_code(code)
            .map(Command::Move)
            .or_else(|| speed_operation_for_key_code(code).map(Command::ChangeSpeed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_helpers() {
        assert!(is_horizontal(Some(Direction::Left)));
        assert!(is_horizontal(Some(Direction::Right)));
        assert!(!is_horizontal(Some(Direction::Up)));
        assert!(!is_horizontal(None));

        assert!(is_vertical(Some(Direction::Up)));
        assert!(is_vertical(Some(Direction::Down)));
        assert!(!is_vertical(Some(Direction::Right)));
        assert!(!is_vertical(None));
    }

    #[test]
    fn test_same_axis() {
        assert!(same_axis(Some(Direction::Left), Some(Direction::Right)));
        assert!(same_axis(Some(Direction::Right), Some(Direction::Right)));
        assert!(same_axis(Some(Direction::Up), Some(Direction::Down)));
        assert!(!same_axis(Some(Direction::Up), Some(Direction::Left)));
        assert!(!same_axis(None, Some(Direction::Left)));
        assert!(!same_axis(None, None));
    }

    #[test]
    fn test_opposite_directions() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
            let (dx, dy) = direction.delta();
            assert_eq!(direction.opposite().delta(), (-dx, -dy));
        }
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_letter_and_arrow_codes_agree() {
        assert_eq!(direction_for_key_code(65), Some(Direction::Left));
        assert_eq!(direction_for_key_code(97), Some(Direction::Left));
        assert_eq!(direction_for_key_code(37), Some(Direction::Left));

        assert_eq!(direction_for_key_code(87), Some(Direction::Up));
        assert_eq!(direction_for_key_code(119), Some(Direction::Up));
        assert_eq!(direction_for_key_code(38), Some(Direction::Up));

        assert_eq!(direction_for_key_code(68), Some(Direction::Right));
        assert_eq!(direction_for_key_code(100), Some(Direction::Right));
        assert_eq!(direction_for_key_code(39), Some(Direction::Right));

        assert_eq!(direction_for_key_code(83), Some(Direction::Down));
        assert_eq!(direction_for_key_code(115), Some(Direction::Down));
        assert_eq!(direction_for_key_code(40), Some(Direction::Down));
    }

    #[test]
    fn test_speed_codes() {
        assert_eq!(
            Command::from_key_code(43),
            Some(Command::ChangeSpeed(SpeedOperation::Decrease))
        );
        assert_eq!(
            Command::from_key_code(45),
            Some(Command::ChangeSpeed(SpeedOperation::Increase))
        );
    }

    #[test]
    fn test_unmapped_codes() {
        assert_eq!(Command::from_key_code(0), None);
        assert_eq!(Command::from_key_code(120), None); // x
        assert_eq!(Command::from_key_code(13), None); // enter
    }
}
