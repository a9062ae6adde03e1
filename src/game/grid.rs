//! Square grid geometry and grid-to-pixel conversion.

use super::state::Position;

/// Edge length of one cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 30;
/// Number of cells along each side of the board
pub const DEFAULT_CELL_COUNT: u32 = 25;
/// Margin between the window edge and the board, in pixels
pub const DEFAULT_OFFSET: u32 = 75;

/// Dimensions of the square board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cell_size: u32,
    pub cell_count: u32,
    pub offset: u32,
}

impl Grid {
    pub const fn new(cell_size: u32, cell_count: u32, offset: u32) -> Self {
        Self {
            cell_size,
            cell_count,
            offset,
        }
    }

    /// Cells per side as a coordinate bound, clamped to `i32::MAX`
    pub fn side(&self) -> i32 {
        i32::try_from(self.cell_count).unwrap_or(i32::MAX)
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        let side = self.side();
        (0..side).contains(&pos.x) && (0..side).contains(&pos.y)
    }

    /// Total number of cells on the board
    pub fn area(&self) -> usize {
        (self.cell_count as usize) * (self.cell_count as usize)
    }

    /// Top-left pixel of a cell: `offset + coordinate * cell_size`.
    ///
    /// Positions outside the board map outside the board area, possibly to
    /// negative pixels.
    pub fn to_pixel(&self, pos: Position) -> (i64, i64) {
        let offset = i64::from(self.offset);
        let size = i64::from(self.cell_size);
        (
            offset + i64::from(pos.x) * size,
            offset + i64::from(pos.y) * size,
        )
    }

    /// Pixel size of the board itself, saturating at `u32::MAX`
    pub fn board_pixels(&self) -> u32 {
        self.cell_size.saturating_mul(self.cell_count)
    }

    /// Pixel size of the whole (square) window including both margins,
    /// saturating at `u32::MAX`
    pub fn window_pixels(&self) -> u32 {
        self.offset
            .saturating_mul(2)
            .saturating_add(self.board_pixels())
    }

    /// Every cell of the board in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let side = self.side();
        (0..side).flat_map(move |y| (0..side).map(move |x| Position::new(x, y)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE, DEFAULT_CELL_COUNT, DEFAULT_OFFSET)
    }
}
