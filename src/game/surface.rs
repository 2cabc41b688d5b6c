//! The drawing capability the controller paints through.

use super::config::Rgb;

/// Axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl SegmentRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Something rectangles can be filled on
pub trait Surface {
    /// Wipe everything drawn so far
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: SegmentRect, color: Rgb);
}

/// A surface that remembers what was filled, in draw order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    fills: Vec<(SegmentRect, Rgb)>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fills(&self) -> &[(SegmentRect, Rgb)] {
        &self.fills
    }

    pub fn len(&self) -> usize {
        self.fills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }
}

impl Surface for Scene {
    fn clear(&mut self) {
        self.fills.clear();
    }

    fn fill_rect(&mut self, rect: SegmentRect, color: Rgb) {
        self.fills.push((rect, color));
    }
}
