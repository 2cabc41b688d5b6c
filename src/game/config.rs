use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Width/height pair in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn square(side: i32) -> Self {
        Self::new(side, side)
    }
}

/// An sRGB color, written as `#rgb` or `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix('#')
            .with_context(|| format!("color {s:?} must start with '#'"))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("color {s:?} contains non-hex digits");
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16);
        let rgb = match hex.len() {
            // #3bf is shorthand for #33bbff
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Rgb::new(expand(0)?, expand(1)?, expand(2)?)
            }
            6 => Rgb::new(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?),
            _ => bail!("color {s:?} must have 3 or 6 hex digits"),
        };

        Ok(rgb)
    }
}

impl TryFrom<String> for Rgb {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Configuration for the game, fixed once the controller is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Size of the drawing surface
    pub bounds: Size,
    /// Grid cell size; also the distance covered by one move
    pub block_size: Size,
    /// Visual size of a segment inside its block
    pub snake_size: Size,
    /// Initial delay between automatic moves, in milliseconds
    pub move_delay_ms: u64,
    /// Color of the head segment
    pub head_color: Rgb,
    /// Color of every body segment
    pub body_color: Rgb,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            bounds: Size::new(800, 600),
            block_size: Size::square(40),
            snake_size: Size::square(25),
            move_delay_ms: 500,
            head_color: Rgb::new(0xff, 0x33, 0xbb),
            body_color: Rgb::new(0x33, 0xbb, 0xff),
        }
    }
}

impl SnakeConfig {
    /// Lowest move delay the speed controls will accept
    pub const MIN_MOVE_DELAY_MS: u64 = 100;
    /// Amount one speed key press adds to or removes from the delay
    pub const SPEED_STEP_MS: u64 = 125;

    /// Create a configuration with a custom surface size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: Size::new(width, height),
            ..Default::default()
        }
    }

    /// A board exactly `columns` by `rows` blocks
    pub fn with_blocks(columns: i32, rows: i32) -> Self {
        let block = Self::default().block_size;
        Self::new(columns * block.width, rows * block.height)
    }

    /// Read a configuration from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: SnakeConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that sizes are positive and consistent with each other
    pub fn validate(&self) -> Result<()> {
        for (name, size) in [
            ("bounds", self.bounds),
            ("block_size", self.block_size),
            ("snake_size", self.snake_size),
        ] {
            if size.width <= 0 || size.height <= 0 {
                bail!(
                    "{name} must be positive, got {}x{}",
                    size.width,
                    size.height
                );
            }
        }

        if self.bounds.width < self.block_size.width || self.bounds.height < self.block_size.height
        {
            bail!(
                "bounds ({}x{}) must hold at least one block ({}x{})",
                self.bounds.width,
                self.bounds.height,
                self.block_size.width,
                self.block_size.height
            );
        }

        // Segments are drawn snake*2 - block wide across the travel axis.
        if self.snake_size.width > self.block_size.width
            || self.snake_size.height > self.block_size.height
            || self.snake_size.width <= self.block_size.width / 2
            || self.snake_size.height <= self.block_size.height / 2
        {
            bail!(
                "snake_size ({}x{}) must be larger than half a block and no larger than a block ({}x{})",
                self.snake_size.width,
                self.snake_size.height,
                self.block_size.width,
                self.block_size.height
            );
        }

        if self.move_delay_ms < Self::MIN_MOVE_DELAY_MS {
            bail!(
                "move_delay_ms must be at least {}, got {}",
                Self::MIN_MOVE_DELAY_MS,
                self.move_delay_ms
            );
        }

        Ok(())
    }
}
