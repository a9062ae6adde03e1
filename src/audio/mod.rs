//! Sound cues. Playback is fire-and-forget: a sink that fails to play logs
//! the failure and carries on.

use std::io::Write;

use log::warn;

use crate::game::StepInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Food was eaten
    Eaten,
    /// The snake hit a wall or itself
    Collision,
}

pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Cues a finished step should trigger
pub fn cues_for(step: &StepInfo) -> Vec<SoundCue> {
    let mut cues = Vec::new();
    if step.ate_food {
        cues.push(SoundCue::Eaten);
    }
    if step.collision_type.is_some() {
        cues.push(SoundCue::Collision);
    }
    cues
}

/// Rings the terminal bell: once when food is eaten, twice on a collision
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) {
        let bells: &[u8] = match cue {
            SoundCue::Eaten => b"\x07",
            SoundCue::Collision => b"\x07\x07",
        };
        if let Err(e) = self.out.write_all(bells).and_then(|_| self.out.flush()) {
            warn!("Failed to play {:?} cue: {}", cue, e);
        }
    }
}

/// Drops every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: SoundCue) {}
}
