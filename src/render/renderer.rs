use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::raster::{Raster, rasterize};
use crate::game::{Rgb, Scene, Size, SnakeController};
use crate::metrics::SessionMetrics;

fn to_color(color: Option<Rgb>) -> Color {
    match color {
        Some(Rgb { r, g, b }) => Color::Rgb(r, g, b),
        None => Color::Reset,
    }
}

/// Largest rectangle inside `area` with the board's aspect ratio, centered.
///
/// Terminal cells are about twice as tall as wide and each one shows two
/// vertical samples, so one sample is treated as square.
pub fn fit_board(bounds: Size, area: Rect) -> Rect {
    if bounds.width <= 0 || bounds.height <= 0 || area.width == 0 || area.height == 0 {
        return Rect::new(area.x, area.y, 0, 0);
    }

    let scale_x = f64::from(area.width) / f64::from(bounds.width);
    let scale_y = f64::from(area.height) * 2.0 / f64::from(bounds.height);
    let scale = scale_x.min(scale_y);

    let width = ((f64::from(bounds.width) * scale) as u16).clamp(1, area.width);
    let height = ((f64::from(bounds.height) * scale / 2.0) as u16).clamp(1, area.height);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        controller: &SnakeController<Scene>,
        metrics: &SessionMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(controller, metrics);
        frame.render_widget(stats, chunks[0]);

        let board_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake ");
        let inner = board_block.inner(chunks[1]);
        frame.render_widget(board_block, chunks[1]);

        let bounds = controller.config().bounds;
        let board_area = fit_board(bounds, inner);
        let raster = rasterize(
            controller.surface(),
            bounds,
            board_area.width as usize,
            board_area.height as usize * 2,
        );
        frame.render_widget(self.render_board(&raster), board_area);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Two raster rows per terminal row: upper half as foreground, lower as background
    fn render_board(&self, raster: &Raster) -> Paragraph<'static> {
        let mut lines = Vec::with_capacity(raster.rows() / 2);

        for row in (0..raster.rows()).step_by(2) {
            let spans: Vec<Span> = (0..raster.columns())
                .map(|column| {
                    let top = raster.get(column, row);
                    let bottom = raster.get(column, row + 1);
                    match (top, bottom) {
                        (None, None) => Span::raw(" "),
                        _ => Span::styled(
                            "▀",
                            Style::default().fg(to_color(top)).bg(to_color(bottom)),
                        ),
                    }
                })
                .collect();
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
    }

    fn render_stats(
        &self,
        controller: &SnakeController<Scene>,
        metrics: &SessionMetrics,
    ) -> Paragraph<'_> {
        let state = controller.state();
        let direction = state.last_direction.map_or("none", |d| d.label());
        let (status, status_color) = if state.is_moving() {
            ("moving", Color::Green)
        } else {
            ("stopped", Color::Red)
        };

        let text = vec![Line::from(vec![
            Span::styled(
                status,
                Style::default()
                    .fg(status_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Direction: ", Style::default().fg(Color::Yellow)),
            Span::styled(direction, Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Delay: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}ms", state.move_delay_ms),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Turns: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.turn_history.len().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Moves: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.moves.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("+/-", Style::default().fg(Color::Cyan)),
            Span::raw(" faster/slower | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, SnakeConfig};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_fit_board_keeps_aspect() {
        // 800x600 board in an 80x30 area: height limits (60 samples).
        let fitted = fit_board(Size::new(800, 600), Rect::new(0, 0, 80, 30));
        assert_eq!(fitted.height, 30);
        assert_eq!(fitted.width, 80);

        let fitted = fit_board(Size::new(400, 400), Rect::new(0, 0, 80, 20));
        assert_eq!(fitted, Rect::new(20, 0, 40, 20));
    }

    #[test]
    fn test_fit_board_degenerate_area() {
        let fitted = fit_board(Size::new(800, 600), Rect::new(3, 4, 0, 10));
        assert_eq!(fitted.width, 0);
        assert_eq!(fitted.height, 0);
    }

    #[test]
    fn test_render_draws_snake_and_status() {
        let mut controller = SnakeController::new(SnakeConfig::default(), Scene::new());
        controller.move_snake(Some(Direction::Right), false);
        let metrics = SessionMetrics::new();
        let renderer = Renderer::new();

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|frame| renderer.render(frame, &controller, &metrics))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("moving"));
        assert!(text.contains("500ms"));
        assert!(text.contains("▀"));
    }
}
