use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Paragraph,
        canvas::{Canvas, Context, Rectangle},
    },
};

use super::scene::{DrawCommand, build_scene};
use crate::game::{GameState, Grid};
use crate::metrics::SessionStats;

const DARK_GREEN: Color = Color::Rgb(43, 51, 24);
const GREEN: Color = Color::Rgb(173, 204, 96);

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, grid: Grid, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, stats), chunks[0]);

        let board_area = square_area(chunks[1]);
        self.render_board(frame, board_area, state, grid);

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_board(&self, frame: &mut Frame, area: Rect, state: &GameState, grid: Grid) {
        let window = f64::from(grid.window_pixels());
        let scene = build_scene(state, grid);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(GREEN)
            .x_bounds([0.0, window])
            .y_bounds([0.0, window])
            .paint(move |ctx| {
                for command in &scene {
                    paint_command(ctx, command, window);
                }
            });

        frame.render_widget(canvas, area);
    }

    fn render_stats(&self, state: &GameState, stats: &SessionStats) -> Paragraph<'static> {
        let text = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.best_with(state.score).to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Tick: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}ms", state.speed.as_millis()),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest centred area that looks square, terminal cells being about twice
/// as tall as they are wide
fn square_area(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Canvas y grows upwards, scene y grows downwards
fn paint_command(ctx: &mut Context, command: &DrawCommand, window: f64) {
    let flip = |y: i64, h: i64| window - (y + h) as f64;

    match command {
        DrawCommand::Border { x, y, size } => ctx.draw(&Rectangle {
            x: *x as f64,
            y: flip(*y, *size),
            width: *size as f64,
            height: *size as f64,
            color: DARK_GREEN,
        }),
        DrawCommand::Segment { x, y, size, head } => ctx.draw(&Rectangle {
            x: *x as f64,
            y: flip(*y, *size),
            width: *size as f64,
            height: *size as f64,
            color: if *head { Color::Black } else { DARK_GREEN },
        }),
        DrawCommand::Food { x, y, size } => {
            let centre = *size / 2;
            ctx.print(
                (*x + centre) as f64,
                flip(*y + centre, 0),
                Span::styled(
                    "●",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            );
        }
        DrawCommand::Text { x, y, text } => {
            ctx.print(
                *x as f64,
                flip(*y, 0),
                Span::styled(
                    text.clone(),
                    Style::default().fg(DARK_GREEN).add_modifier(Modifier::BOLD),
                ),
            );
        }
    }
}
