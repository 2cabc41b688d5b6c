//! Turns a pixel-space [`Scene`] into a coarse grid a terminal can show.

use crate::game::{Rgb, Scene, Size};

/// Sampled colors, row-major; `None` is background
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    columns: usize,
    rows: usize,
    cells: Vec<Option<Rgb>>,
}

impl Raster {
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, column: usize, row: usize) -> Option<Rgb> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells[row * self.columns + column]
    }
}

/// Pixel span covered by cell `index` when `extent` pixels are split into `count` cells
fn span(index: usize, count: usize, extent: i32) -> (i32, i32) {
    let extent = i64::from(extent);
    let count = count as i64;
    let start = index as i64 * extent / count;
    let end = ((index as i64 + 1) * extent / count).max(start + 1);
    (start as i32, end as i32)
}

/// Cells whose span overlaps the half-open pixel range `[from, to)`
fn covered(spans: &[(i32, i32)], from: i32, to: i32) -> std::ops::Range<usize> {
    // Both span ends grow with the index, so the overlap is contiguous.
    let first = spans.partition_point(|&(_, end)| end <= from);
    let last = spans.partition_point(|&(start, _)| start < to);
    first..last.max(first)
}

/// Sample `scene` onto a `columns` x `rows` grid.
///
/// A cell takes the color of the last fill that overlaps any part of it, so
/// thin segments never vanish when the grid is coarser than the scene. Fills
/// are painted oldest first, each touching only the cells it covers.
pub fn rasterize(scene: &Scene, bounds: Size, columns: usize, rows: usize) -> Raster {
    let mut cells = vec![None; columns * rows];

    if columns > 0 && rows > 0 {
        let column_spans: Vec<_> = (0..columns)
            .map(|column| span(column, columns, bounds.width))
            .collect();
        let row_spans: Vec<_> = (0..rows)
            .map(|row| span(row, rows, bounds.height))
            .collect();

        for (rect, color) in scene.fills() {
            let covered_columns = covered(&column_spans, rect.x, rect.right());
            for row in covered(&row_spans, rect.y, rect.bottom()) {
                let start = row * columns;
                for cell in &mut cells[start + covered_columns.start..start + covered_columns.end] {
                    *cell = Some(*color);
                }
            }
        }
    }

    Raster {
        columns,
        rows,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Command, Direction, SegmentRect, SnakeConfig, SnakeController, Surface};

    const HEAD: Rgb = Rgb::new(255, 51, 187);
    const BODY: Rgb = Rgb::new(51, 187, 255);

    #[test]
    fn test_span_covers_extent() {
        assert_eq!(span(0, 4, 40), (0, 10));
        assert_eq!(span(3, 4, 40), (30, 40));
        // More cells than pixels still gives every cell a pixel.
        assert_eq!(span(5, 10, 4), (2, 3));
    }

    #[test]
    fn test_one_cell_per_block() {
        let mut scene = Scene::new();
        scene.fill_rect(SegmentRect::new(40, 15, 40, 10), HEAD);
        scene.fill_rect(SegmentRect::new(0, 15, 40, 10), BODY);

        let raster = rasterize(&scene, Size::new(120, 40), 3, 1);

        assert_eq!(raster.get(0, 0), Some(BODY));
        assert_eq!(raster.get(1, 0), Some(HEAD));
        assert_eq!(raster.get(2, 0), None);
        assert_eq!(raster.get(3, 0), None);
    }

    #[test]
    fn test_thin_segment_survives_coarse_grid() {
        let mut scene = Scene::new();
        scene.fill_rect(SegmentRect::new(15, 15, 10, 10), HEAD);

        let raster = rasterize(&scene, Size::new(40, 40), 2, 2);

        // The 10px square straddles all four 20px cells.
        assert_eq!(raster.get(0, 0), Some(HEAD));
        assert_eq!(raster.get(1, 1), Some(HEAD));
    }

    #[test]
    fn test_fine_grid_shows_pole_inset() {
        let mut scene = Scene::new();
        scene.fill_rect(SegmentRect::new(0, 15, 40, 10), BODY);

        let raster = rasterize(&scene, Size::new(40, 40), 4, 4);

        let column: Vec<_> = (0..4).map(|row| raster.get(0, row)).collect();
        assert_eq!(column, vec![None, Some(BODY), Some(BODY), None]);
    }

    #[test]
    fn test_later_fills_win() {
        let mut scene = Scene::new();
        scene.fill_rect(SegmentRect::new(0, 0, 20, 20), BODY);
        scene.fill_rect(SegmentRect::new(10, 10, 20, 20), HEAD);

        let raster = rasterize(&scene, Size::new(40, 40), 4, 4);

        assert_eq!(raster.get(0, 0), Some(BODY));
        assert_eq!(raster.get(1, 1), Some(HEAD));
        assert_eq!(raster.get(2, 2), Some(HEAD));
        assert_eq!(raster.get(3, 3), None);
    }

    #[test]
    fn test_fills_outside_bounds_are_clipped() {
        let mut scene = Scene::new();
        scene.fill_rect(SegmentRect::new(-20, 30, 100, 40), HEAD);

        let raster = rasterize(&scene, Size::new(40, 40), 4, 4);

        let bottom: Vec<_> = (0..4).map(|column| raster.get(column, 3)).collect();
        assert_eq!(bottom, vec![Some(HEAD); 4]);
        assert_eq!(raster.get(0, 2), None);
    }

    /// Newest-first search over every fill for every cell
    fn rasterize_by_search(scene: &Scene, bounds: Size, columns: usize, rows: usize) -> Vec<Option<Rgb>> {
        let mut cells = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            let (top, bottom) = span(row, rows, bounds.height);
            for column in 0..columns {
                let (left, right) = span(column, columns, bounds.width);
                cells.push(
                    scene
                        .fills()
                        .iter()
                        .rev()
                        .find(|(rect, _)| {
                            rect.x < right
                                && rect.right() > left
                                && rect.y < bottom
                                && rect.bottom() > top
                        })
                        .map(|(_, color)| *color),
                );
            }
        }
        cells
    }

    #[test]
    fn test_long_session_scene() {
        let mut snake = SnakeController::new(SnakeConfig::default(), Scene::new());
        // Sweep the 20x15 board lane by lane, down and then back up, ten times.
        for pass in 0..10 {
            let vertical = if pass % 2 == 0 { Direction::Down } else { Direction::Up };
            for _ in 0..15 {
                let horizontal = if snake.state().head.x == 0 {
                    Direction::Right
                } else {
                    Direction::Left
                };
                snake.apply(Command::Move(horizontal));
                for _ in 0..19 {
                    snake.tick();
                }
                snake.apply(Command::Move(vertical));
            }
        }

        let scene = snake.surface();
        let bounds = snake.config().bounds;
        assert!(scene.len() > 2000, "only {} fills", scene.len());

        let raster = rasterize(scene, bounds, 160, 120);
        assert_eq!(raster.columns(), 160);
        assert!((0..120).any(|row| (0..160).any(|column| raster.get(column, row).is_some())));

        for (columns, rows) in [(20, 15), (37, 23), (80, 60)] {
            let raster = rasterize(scene, bounds, columns, rows);
            assert_eq!(raster.cells, rasterize_by_search(scene, bounds, columns, rows));
        }
    }

    #[test]
    fn test_empty_grid() {
        let raster = rasterize(&Scene::new(), Size::new(40, 40), 0, 0);
        assert_eq!(raster.columns(), 0);
        assert_eq!(raster.get(0, 0), None);
    }
}
