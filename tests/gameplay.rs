use retro_snake::game::state::INITIAL_BODY;
use retro_snake::game::*;

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

fn seeded_engine(seed: u64, clock: &ManualClock) -> GameEngine<StdRng> {
    GameEngine::with_rng(GameConfig::default(), StdRng::seed_from_u64(seed), clock.now())
}

fn body(engine: &GameEngine<StdRng>) -> Vec<Position> {
    engine.state().snake.body().iter().copied().collect()
}

/// Advance the clock to the next tick and run one frame
fn tick(engine: &mut GameEngine<StdRng>, clock: &ManualClock) -> FrameResult {
    clock.advance(engine.state().speed);
    engine.frame(clock.now())
}

// ── Movement ─────────────────────────────────────────────────────────────────

#[test]
fn first_tick_moves_right() {
    let clock = ManualClock::new();
    let mut engine = seeded_engine(1, &clock);
    engine.state_mut().food = Position::new(0, 0);

    tick(&mut engine, &clock);

    assert_eq!(
        body(&engine),
        vec![Position::new(7, 9), Position::new(6, 9), Position::new(5, 9)]
    );
}

#[test]
fn frames_between_ticks_change_nothing() {
    let clock = ManualClock::new();
    let mut engine = seeded_engine(1, &clock);
    engine.state_mut().food = Position::new(0, 0);

    // 60 FPS frames for just under one tick interval
    for _ in 0..11 {
        clock.advance(Duration::from_millis(16));
        assert!(!engine.frame(clock.now()).ticked);
    }
    assert_eq!(body(&engine), INITIAL_BODY.to_vec());
}

// ── Edges ────────────────────────────────────────────────────────────────────

#[test]
fn leaving_the_board_ends_the_game() {
    let clock = ManualClock::new();
    let mut engine = seeded_engine(2, &clock);
    engine.state_mut().food = Position::new(0, 0);

    // Drive the snake straight right: head goes 6 → 24 in 18 ticks
    for _ in 0..18 {
        let result = tick(&mut engine, &clock);
        assert_eq!(result.step.unwrap().collision_type, None);
    }
    assert_eq!(engine.state().snake.head(), Position::new(24, 9));

    let result = tick(&mut engine, &clock);
    assert_eq!(
        result.step.unwrap().collision_type,
        Some(CollisionType::Wall)
    );

    let state = engine.state();
    assert_eq!(body(&engine), INITIAL_BODY.to_vec());
    assert_eq!(state.snake.direction(), Direction::Right);
    assert_eq!(state.score, 0);
    assert_eq!(state.phase(), Phase::Paused);
    assert_eq!(state.speed, Duration::from_millis(200));
}

// ── Food ─────────────────────────────────────────────────────────────────────

#[test]
fn eating_grows_on_the_next_tick() {
    let clock = ManualClock::new();
    let mut engine = seeded_engine(3, &clock);
    engine.state_mut().food = Position::new(8, 9);

    tick(&mut engine, &clock);
    let len_before_eating = engine.state().snake.len();

    let result = tick(&mut engine, &clock);
    assert!(result.step.unwrap().ate_food);
    assert_eq!(engine.state().score, 1);
    assert!(!engine.state().snake.contains(engine.state().food));

    tick(&mut engine, &clock);
    assert_eq!(engine.state().snake.len(), len_before_eating + 1);
}

#[test]
fn food_never_lands_on_the_snake() {
    for seed in 0..50 {
        let clock = ManualClock::new();
        let mut engine = seeded_engine(seed, &clock);

        for _ in 0..30 {
            let state = engine.state();
            assert!(!state.snake.contains(state.food));
            assert!(engine.grid().contains(state.food));

            // Feed the snake the cell straight ahead whenever it is on the board
            let ahead = state
                .snake
                .head()
                .moved_in_direction(state.snake.direction());
            if engine.grid().contains(ahead) && !state.snake.contains(ahead) {
                engine.state_mut().food = ahead;
            }
            tick(&mut engine, &clock);
        }
    }
}

// ── Input gating and resume ──────────────────────────────────────────────────

#[test]
fn turns_are_gated_per_tick() {
    let clock = ManualClock::new();
    let mut engine = seeded_engine(4, &clock);
    engine.state_mut().food = Position::new(0, 0);

    assert!(!engine.handle_direction(Direction::Down));

    tick(&mut engine, &clock);
    assert!(!engine.handle_direction(Direction::Left));
    assert!(engine.handle_direction(Direction::Down));
    assert!(!engine.handle_direction(Direction::Right));

    tick(&mut engine, &clock);
    assert_eq!(engine.state().snake.head(), Position::new(7, 10));
}

#[test]
fn direction_input_resumes_after_game_over() {
    let clock = ManualClock::new();
    let mut engine = seeded_engine(5, &clock);
    engine.state_mut().snake = Snake::new(Position::new(24, 9), Direction::Right, 3);
    engine.state_mut().food = Position::new(0, 0);

    tick(&mut engine, &clock);
    assert!(!engine.state().running);

    // Paused ticks leave the snake alone
    let result = tick(&mut engine, &clock);
    assert_eq!(result.step, None);
    assert_eq!(body(&engine), INITIAL_BODY.to_vec());

    assert!(engine.handle_direction(Direction::Up));
    assert_eq!(engine.state().phase(), Phase::Running);

    tick(&mut engine, &clock);
    assert_eq!(engine.state().snake.head(), Position::new(6, 8));
}

// ── Speed ramp ───────────────────────────────────────────────────────────────

#[test]
fn speed_ramps_every_ten_seconds() {
    let clock = ManualClock::new();
    let mut engine = seeded_engine(6, &clock);
    engine.state_mut().running = false;
    let initial = engine.state().speed;

    clock.set(Duration::from_secs(10));
    assert!(engine.frame(clock.now()).sped_up);
    assert_eq!(engine.state().speed, initial.mul_f64(0.9));

    clock.set(Duration::from_millis(19_990));
    assert!(!engine.frame(clock.now()).sped_up);

    clock.set(Duration::from_secs(20));
    assert!(engine.frame(clock.now()).sped_up);
    assert_eq!(engine.state().speed, initial.mul_f64(0.9).mul_f64(0.9));
}
