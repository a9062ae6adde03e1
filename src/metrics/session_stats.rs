use std::time::{Duration, Instant};

/// In-memory statistics for the current process. Nothing is persisted.
pub struct SessionStats {
    pub session_start: Instant,
    pub elapsed_time: Duration,
    pub best_score: u32,
    pub games_finished: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            session_start: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            games_finished: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.session_start.elapsed();
    }

    /// Track the score a game ended with
    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_finished += 1;
        self.best_score = self.best_score.max(final_score);
    }

    /// Best of the recorded games and the one still in progress
    pub fn best_with(&self, current_score: u32) -> u32 {
        self.best_score.max(current_score)
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
