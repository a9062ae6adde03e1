use std::time::Duration;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    config::GameConfig,
    direction::Direction,
    food::FoodSpawner,
    grid::Grid,
    state::{CollisionType, GameState, Snake},
    timing::TemporalGate,
};

/// Information about one logical step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Score the game ended with, set together with `collision_type`
    pub final_score: Option<u32>,
}

/// What happened during one render frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameResult {
    /// The update gate fired this frame
    pub ticked: bool,
    /// Outcome of the logical step, if the game was running when the gate fired
    pub step: Option<StepInfo>,
    /// The tick interval was shortened this frame
    pub sped_up: bool,
}

/// The game engine that owns the state and drives every update
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    grid: Grid,
    spawner: FoodSpawner,
    rng: R,
    state: GameState,
    gate: TemporalGate,
}

impl GameEngine<StdRng> {
    /// Create an engine seeded from OS entropy, with its clocks starting at `now`
    pub fn new(config: GameConfig, now: Duration) -> Self {
        Self::with_rng(config, StdRng::from_entropy(), now)
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food positions from `rng`
    pub fn with_rng(config: GameConfig, mut rng: R, now: Duration) -> Self {
        let grid = config.grid();
        let spawner = FoodSpawner::new(grid);
        let snake = Snake::initial();
        let food = spawner
            .generate_random_position(&mut rng, &snake)
            .unwrap_or_else(|| spawner.random_cell(&mut rng));
        let speed = config.initial_speed();
        let gate = TemporalGate::new(
            speed,
            config.speed_up_interval(),
            config.speed_multiplier,
            now,
        );

        Self {
            config,
            grid,
            spawner,
            rng,
            state: GameState::new(snake, food, speed),
            gate,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access to the state, for setting up scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn gate(&self) -> &TemporalGate {
        &self.gate
    }

    /// Run everything that belongs to one render frame: at most one logical
    /// step, then the speed ramp.
    pub fn frame(&mut self, now: Duration) -> FrameResult {
        let ticked = self.gate.update.poll(now, self.state.speed);
        let step = if ticked { self.update(now) } else { None };

        let sped_up = self.gate.ramp.apply(now, &mut self.state.speed);
        if sped_up {
            debug!("Speed up: tick interval now {:?}", self.state.speed);
        }

        FrameResult {
            ticked,
            step,
            sped_up,
        }
    }

    /// Execute one logical step if the game is running
    pub fn update(&mut self, now: Duration) -> Option<StepInfo> {
        if self.state.running {
            Some(self.step(now))
        } else {
            None
        }
    }

    /// Offer a direction change from the player.
    ///
    /// Accepted only once per fired tick and never as a reversal. An accepted
    /// change also (re)starts the game.
    pub fn handle_direction(&mut self, direction: Direction) -> bool {
        if !self.gate.update.move_allowed() {
            return false;
        }
        if self.state.snake.direction().is_opposite(direction) {
            return false;
        }

        self.gate.update.consume_move();
        self.state.snake.turn(direction);
        if !self.state.running {
            info!("Game resumed heading {:?}", direction);
        }
        self.state.running = true;
        true
    }

    fn step(&mut self, now: Duration) -> StepInfo {
        let mut info = StepInfo::default();

        self.state.snake.advance();
        let head = self.state.snake.head();

        if head == self.state.food {
            self.respawn_food();
            self.state.snake.request_growth();
            self.state.score += 1;
            info.ate_food = true;
            debug!("Food eaten at {:?}, score {}", head, self.state.score);
        }

        let collision = if !self.grid.contains(head) {
            Some(CollisionType::Wall)
        } else if self.state.snake.contains_excluding_head(head) {
            Some(CollisionType::SelfCollision)
        } else {
            None
        };

        if let Some(kind) = collision {
            info.final_score = Some(self.state.score);
            info.collision_type = Some(kind);
            self.game_over(now, kind);
        }

        info
    }

    fn game_over(&mut self, now: Duration, kind: CollisionType) {
        info!("Game over ({:?}) with score {}", kind, self.state.score);

        self.state.snake.reset();
        self.respawn_food();
        self.state.running = false;
        self.state.score = 0;
        self.gate.ramp.reset(now, &mut self.state.speed);
    }

    fn respawn_food(&mut self) {
        match self
            .spawner
            .generate_random_position(&mut self.rng, &self.state.snake)
        {
            Some(pos) => self.state.food = pos,
            None => warn!("No free cell left for food, keeping {:?}", self.state.food),
        }
    }
}
