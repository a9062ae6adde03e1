use std::collections::VecDeque;
use std::time::Duration;

use super::direction::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Body every new game starts with, head first
pub const INITIAL_BODY: [Position; 3] = [
    Position::new(6, 9),
    Position::new(5, 9),
    Position::new(4, 9),
];

/// Heading every new game starts with
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0. Never empty.
    body: VecDeque<Position>,
    /// Current direction of movement
    direction: Direction,
    /// Set when the next advance should keep the tail
    grow_pending: bool,
}

impl Snake {
    /// Snake in the canonical starting position
    pub fn initial() -> Self {
        Self {
            body: INITIAL_BODY.iter().copied().collect(),
            direction: INITIAL_DIRECTION,
            grow_pending: false,
        }
    }

    /// Create a straight snake with given head, direction and length.
    /// The body trails behind the head, opposite to `direction`.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let back = direction.opposite();
        let mut body = VecDeque::with_capacity(length.max(1));
        body.push_back(head);

        for _ in 1..length {
            let prev = body[body.len() - 1];
            body.push_back(prev.moved_in_direction(back));
        }

        Self {
            body,
            direction,
            grow_pending: false,
        }
    }

    /// Create a snake from explicit cells, head first.
    /// Returns `None` for an empty cell list.
    pub fn from_cells<I>(cells: I, direction: Direction) -> Option<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let body: VecDeque<Position> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }

        Some(Self {
            body,
            direction,
            grow_pending: false,
        })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_growth_pending(&self) -> bool {
        self.grow_pending
    }

    /// Change heading. A reversal onto the second segment is rejected and
    /// reported as `false`.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Move one cell along the current direction.
    ///
    /// The new head is not bounds checked; an off-board head is detected by
    /// the caller.
    pub fn advance(&mut self) {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.push_front(new_head);

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop_back();
        }
    }

    /// Keep the tail on the next advance. Calling this several times before
    /// that advance still grows the body by a single segment.
    pub fn request_growth(&mut self) {
        self.grow_pending = true;
    }

    /// Back to the starting body and heading
    pub fn reset(&mut self) {
        *self = Self::initial();
    }

    /// Check if position is covered by any segment except the head
    pub fn contains_excluding_head(&self, pos: Position) -> bool {
        self.body.iter().skip(1).any(|&segment| segment == pos)
    }

    /// Check if position is covered by any segment, head included
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false for a live snake; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::initial()
    }
}

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Whether logical updates are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub running: bool,
    /// Interval between logical ticks; smaller is faster
    pub speed: Duration,
}

impl GameState {
    /// Create a new, running game state
    pub fn new(snake: Snake, food: Position, speed: Duration) -> Self {
        Self {
            snake,
            food,
            score: 0,
            running: true,
            speed,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.running {
            Phase::Running
        } else {
            Phase::Paused
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(snake: &Snake) -> Vec<Position> {
        snake.body().iter().copied().collect()
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_initial_snake() {
        let snake = Snake::initial();
        assert_eq!(cells(&snake), INITIAL_BODY.to_vec());
        assert_eq!(snake.direction(), Direction::Right);
        assert!(!snake.is_growth_pending());
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body()[1], Position::new(4, 5));
        assert_eq!(snake.tail(), Position::new(3, 5));
    }

    #[test]
    fn test_from_cells_rejects_empty() {
        assert!(Snake::from_cells(Vec::new(), Direction::Up).is_none());
    }

    #[test]
    fn test_advance_without_growth() {
        let mut snake = Snake::initial();
        snake.advance();

        assert_eq!(
            cells(&snake),
            vec![Position::new(7, 9), Position::new(6, 9), Position::new(5, 9)]
        );
    }

    #[test]
    fn test_advance_moves_head_by_direction() {
        for dir in [Direction::Up, Direction::Down, Direction::Right] {
            let mut snake = Snake::initial();
            let before = snake.head();
            assert!(snake.turn(dir));
            snake.advance();

            let (dx, dy) = dir.delta();
            assert_eq!(snake.head(), before.moved_by(dx, dy));
            assert_eq!(snake.len(), 3);
        }
    }

    #[test]
    fn test_growth_adds_exactly_one_segment() {
        let mut snake = Snake::initial();
        snake.request_growth();
        snake.request_growth();
        snake.advance();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Position::new(4, 9));
        assert!(!snake.is_growth_pending());

        snake.advance();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_reverse_turn_rejected() {
        let mut snake = Snake::initial();
        assert!(!snake.turn(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);

        assert!(snake.turn(Direction::Up));
        assert!(!snake.turn(Direction::Down));
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut snake = Snake::initial();
        snake.turn(Direction::Down);
        snake.request_growth();
        snake.advance();
        snake.request_growth();

        snake.reset();
        assert_eq!(snake, Snake::initial());
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(!snake.contains_excluding_head(Position::new(5, 5))); // head
        assert!(snake.contains_excluding_head(Position::new(4, 5))); // body
        assert!(!snake.contains_excluding_head(Position::new(10, 10))); // empty
        assert!(snake.contains(Position::new(5, 5)));
    }

    #[test]
    fn test_self_intersection_detected() {
        // Head has wrapped around onto the fourth segment
        let snake = Snake::from_cells(
            [
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(6, 6),
                Position::new(6, 5),
                Position::new(5, 5),
            ],
            Direction::Up,
        )
        .unwrap();

        assert!(snake.contains_excluding_head(snake.head()));
    }

    #[test]
    fn test_phase_follows_running_flag() {
        let mut state = GameState::new(
            Snake::initial(),
            Position::new(0, 0),
            Duration::from_millis(200),
        );
        assert_eq!(state.phase(), Phase::Running);
        state.running = false;
        assert_eq!(state.phase(), Phase::Paused);
    }
}
