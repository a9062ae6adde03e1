//! Tick scheduling.
//!
//! The render loop runs at whatever rate the terminal allows; the
//! [`TemporalGate`] turns that into fixed-interval logical ticks and, on a
//! separate timer, shortens the interval as the session goes on.

use std::time::Duration;

/// Fires once every `speed` and hands out one direction change per fire
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGate {
    last_update: Duration,
    allow_move: bool,
}

impl UpdateGate {
    pub fn new(now: Duration) -> Self {
        Self {
            last_update: now,
            allow_move: false,
        }
    }

    /// Returns true when at least `interval` has passed since the last fire.
    /// Firing moves the reference point to `now` and re-arms the move flag.
    pub fn poll(&mut self, now: Duration, interval: Duration) -> bool {
        if now.saturating_sub(self.last_update) >= interval {
            self.last_update = now;
            self.allow_move = true;
            true
        } else {
            false
        }
    }

    pub fn move_allowed(&self) -> bool {
        self.allow_move
    }

    /// Take the move flag. Only the first call after a fire returns true.
    pub fn consume_move(&mut self) -> bool {
        std::mem::replace(&mut self.allow_move, false)
    }
}

/// Periodically multiplies the tick interval by a factor below one
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedRamp {
    initial_speed: Duration,
    interval: Duration,
    multiplier: f64,
    last_ramp: Duration,
}

impl SpeedRamp {
    pub fn new(
        initial_speed: Duration,
        interval: Duration,
        multiplier: f64,
        now: Duration,
    ) -> Self {
        Self {
            initial_speed,
            interval,
            multiplier,
            last_ramp: now,
        }
    }

    /// Shorten `speed` if a full ramp interval has passed. At most one step
    /// per call, however long the gap.
    pub fn apply(&mut self, now: Duration, speed: &mut Duration) -> bool {
        if now.saturating_sub(self.last_ramp) >= self.interval {
            *speed = speed.mul_f64(self.multiplier);
            self.last_ramp = now;
            true
        } else {
            false
        }
    }

    /// Back to the starting interval, counting the next ramp from `now`
    pub fn reset(&mut self, now: Duration, speed: &mut Duration) {
        *speed = self.initial_speed;
        self.last_ramp = now;
    }
}

/// The two independent timers driving the game
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalGate {
    pub update: UpdateGate,
    pub ramp: SpeedRamp,
}

impl TemporalGate {
    pub fn new(
        initial_speed: Duration,
        ramp_interval: Duration,
        multiplier: f64,
        now: Duration,
    ) -> Self {
        Self {
            update: UpdateGate::new(now),
            ramp: SpeedRamp::new(initial_speed, ramp_interval, multiplier, now),
        }
    }
}
