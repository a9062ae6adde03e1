use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use log::info;
use tokio::time::{MissedTickBehavior, interval};

use super::session::{TerminalSession, TuiTerminal};
use crate::audio::{AudioSink, cues_for};
use crate::game::{Clock, FrameResult, GameConfig, GameEngine, SystemClock};
use crate::input::{InputHandler, KeyAction, PressedTurns};
use crate::metrics::SessionStats;
use crate::render::Renderer;

pub struct HumanMode<C: Clock = SystemClock> {
    engine: GameEngine,
    clock: C,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    audio: Box<dyn AudioSink>,
    pressed: PressedTurns,
    should_quit: bool,
}

impl HumanMode<SystemClock> {
    pub fn new(config: GameConfig, audio: Box<dyn AudioSink>) -> Self {
        Self::with_clock(config, SystemClock::new(), audio)
    }
}

impl<C: Clock> HumanMode<C> {
    pub fn with_clock(config: GameConfig, clock: C, audio: Box<dyn AudioSink>) -> Self {
        let engine = GameEngine::new(config, clock.now());

        Self {
            engine,
            clock,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            audio,
            pressed: PressedTurns::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut session = TerminalSession::enter()?;
        info!("Terminal ready, starting game loop");

        let result = self.run_game_loop(session.terminal()).await;

        session.leave()?;
        info!(
            "Session over: {} games, best score {}",
            self.stats.games_finished, self.stats.best_score
        );
        result
    }

    async fn run_game_loop(&mut self, terminal: &mut TuiTerminal) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut frame_timer = interval(self.engine.config().frame_interval());
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                // Collect key presses until the next frame
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Render frame
                _ = frame_timer.tick() => {
                    self.on_frame();
                    self.stats.update();
                    let grid = self.engine.grid();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.state(), grid, &self.stats);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("Quit requested");
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => self.pressed.press(direction),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    /// Advance the game by one render frame, then apply this frame's key
    /// presses. The engine accepts at most one of them.
    fn on_frame(&mut self) -> FrameResult {
        let result = self.engine.frame(self.clock.now());

        if let Some(step) = &result.step {
            for cue in cues_for(step) {
                self.audio.play(cue);
            }
            if let Some(score) = step.final_score {
                self.stats.on_game_over(score);
            }
        }

        for direction in self.pressed.take() {
            if self.engine.handle_direction(direction) {
                break;
            }
        }

        result
    }
}
