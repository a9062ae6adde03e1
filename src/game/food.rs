//! Food placement by rejection sampling over the whole board.

use rand::Rng;

use super::grid::Grid;
use super::state::{Position, Snake};

/// Rejection draws per board cell before falling back to an explicit scan
const DRAWS_PER_CELL: usize = 4;

/// Anything food must not be placed on
pub trait Occupancy {
    fn is_occupied(&self, pos: Position) -> bool;
}

impl Occupancy for Snake {
    fn is_occupied(&self, pos: Position) -> bool {
        self.contains(pos)
    }
}

impl Occupancy for [Position] {
    fn is_occupied(&self, pos: Position) -> bool {
        self.contains(&pos)
    }
}

/// Places food on free cells of a fixed grid
#[derive(Debug, Clone, Copy)]
pub struct FoodSpawner {
    grid: Grid,
}

impl FoodSpawner {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Uniformly random cell of the board, occupied or not
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let side = self.grid.side().max(1);
        Position::new(rng.gen_range(0..side), rng.gen_range(0..side))
    }

    /// Draw random cells until one is free.
    ///
    /// The draw loop is bounded; once the bound is hit the spawner picks
    /// uniformly among the cells that are still free. `None` means the board
    /// is completely covered.
    pub fn generate_random_position<R, O>(&self, rng: &mut R, occupied: &O) -> Option<Position>
    where
        R: Rng + ?Sized,
        O: Occupancy + ?Sized,
    {
        let max_draws = self.grid.area().saturating_mul(DRAWS_PER_CELL);

        for _ in 0..max_draws {
            let pos = self.random_cell(rng);
            if !occupied.is_occupied(pos) {
                return Some(pos);
            }
        }

        let free: Vec<Position> = self
            .grid
            .cells()
            .filter(|&pos| !occupied.is_occupied(pos))
            .collect();

        if free.is_empty() {
            None
        } else {
            Some(free[rng.gen_range(0..free.len())])
        }
    }
}
