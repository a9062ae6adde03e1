use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::grid::{DEFAULT_CELL_COUNT, DEFAULT_CELL_SIZE, DEFAULT_OFFSET, Grid};
use super::state::INITIAL_BODY;

/// Longest accepted tick or speed-up interval, in seconds
pub const MAX_INTERVAL_SECS: f64 = 3600.0;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    /// Number of cells along each side of the square board
    pub cell_count: u32,
    /// Margin around the board in pixels
    pub offset: u32,

    /// Seconds between logical ticks at the start of a game
    pub initial_speed_secs: f64,
    /// Seconds between two speed-ups
    pub speed_up_interval_secs: f64,
    /// Factor applied to the tick interval at each speed-up
    pub speed_multiplier: f64,

    /// Render frames per second
    pub target_fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            cell_count: DEFAULT_CELL_COUNT,
            offset: DEFAULT_OFFSET,
            initial_speed_secs: 0.2,
            speed_up_interval_secs: 10.0,
            speed_multiplier: 0.9,
            target_fps: 60,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(cell_count: u32) -> Self {
        Self {
            cell_count,
            ..Default::default()
        }
    }

    /// Read a JSON config file. Missing keys take their default value.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.cell_size, self.cell_count, self.offset)
    }

    pub fn initial_speed(&self) -> Duration {
        Duration::from_secs_f64(self.initial_speed_secs)
    }

    pub fn speed_up_interval(&self) -> Duration {
        Duration::from_secs_f64(self.speed_up_interval_secs)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps.max(1)))
    }

    fn min_cell_count() -> u32 {
        let reach = INITIAL_BODY
            .iter()
            .map(|p| p.x.max(p.y))
            .max()
            .unwrap_or(0);
        u32::try_from(reach).unwrap_or(0) + 1
    }

    /// Validate configuration parameters
    ///
    /// # Returns
    ///
    /// `Ok(())` if all parameters are valid, `Err(String)` with an error message otherwise.
    pub fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("cell_size must be at least 1".to_string());
        }

        let min_cells = Self::min_cell_count();
        if self.cell_count < min_cells {
            return Err(format!(
                "cell_count must be at least {} to fit the starting snake, got {}",
                min_cells, self.cell_count
            ));
        }

        if i32::try_from(self.cell_count).is_err() {
            return Err(format!(
                "cell_count must be at most {}, got {}",
                i32::MAX,
                self.cell_count
            ));
        }

        let window = self
            .cell_size
            .checked_mul(self.cell_count)
            .zip(self.offset.checked_mul(2))
            .and_then(|(board, margins)| board.checked_add(margins));
        if window.is_none() {
            return Err(format!(
                "window of {} cells of {}px plus {}px margins does not fit in u32 pixels",
                self.cell_count, self.cell_size, self.offset
            ));
        }

        check_interval("initial_speed_secs", self.initial_speed_secs)?;
        check_interval("speed_up_interval_secs", self.speed_up_interval_secs)?;

        if !(self.speed_multiplier > 0.0 && self.speed_multiplier < 1.0) {
            return Err(format!(
                "speed_multiplier must be in (0, 1), got {}",
                self.speed_multiplier
            ));
        }

        if self.target_fps == 0 {
            return Err("target_fps must be at least 1".to_string());
        }

        Ok(())
    }
}

fn check_interval(name: &str, secs: f64) -> Result<(), String> {
    if secs.is_finite() && secs > 0.0 && secs <= MAX_INTERVAL_SECS {
        Ok(())
    } else {
        Err(format!(
            "{} must be in (0, {}], got {}",
            name, MAX_INTERVAL_SECS, secs
        ))
    }
}
