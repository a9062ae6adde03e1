//! Pixel-space draw list for one frame.
//!
//! Everything is laid out the way a window of `grid.window_pixels()` square
//! pixels would show it, with the origin in the top-left corner. Backends
//! only have to map these commands onto their own surface.

use crate::game::{GameState, Grid};

pub const TITLE: &str = "Retro Snake";

/// Gap between the board and its frame, in pixels
const BORDER_GAP: i64 = 5;
/// Vertical distance of the score line above the board
const SCORE_RISE: i64 = 40;
/// Distance of the title from the top of the window
const TITLE_TOP: i64 = 20;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Frame around the board
    Border { x: i64, y: i64, size: i64 },
    /// One snake segment
    Segment { x: i64, y: i64, size: i64, head: bool },
    /// The food sprite
    Food { x: i64, y: i64, size: i64 },
    /// Text whose top-left corner sits at (x, y)
    Text { x: i64, y: i64, text: String },
}

pub fn build_scene(state: &GameState, grid: Grid) -> Vec<DrawCommand> {
    let offset = i64::from(grid.offset);
    let size = i64::from(grid.cell_size);
    let mut scene = Vec::with_capacity(state.snake.len() + 4);

    scene.push(DrawCommand::Border {
        x: offset - BORDER_GAP,
        y: offset - BORDER_GAP,
        size: i64::from(grid.board_pixels()) + 2 * BORDER_GAP,
    });
    scene.push(DrawCommand::Text {
        x: offset - BORDER_GAP,
        y: TITLE_TOP,
        text: TITLE.to_string(),
    });

    let (fx, fy) = grid.to_pixel(state.food);
    scene.push(DrawCommand::Food { x: fx, y: fy, size });

    for (i, &segment) in state.snake.body().iter().enumerate() {
        let (x, y) = grid.to_pixel(segment);
        scene.push(DrawCommand::Segment {
            x,
            y,
            size,
            head: i == 0,
        });
    }

    let status = if state.running {
        format!("Score: {}", state.score)
    } else {
        format!("Score: {}  -  press a direction to start", state.score)
    };
    scene.push(DrawCommand::Text {
        x: offset,
        y: offset - SCORE_RISE,
        text: status,
    });

    scene
}
