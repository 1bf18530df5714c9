use thiserror::Error;

use crate::rendering::CellStyle;

/// Milliseconds between generations
pub const FRAME_INTERVAL_MS: f64 = 500.0;

/// Chance that a freshly seeded cell starts alive
pub const INITIAL_ALIVE_PROBABILITY: f64 = 0.3;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be a positive finite number, got {0}")]
    CellSize(f32),
    #[error("cell gap {gap} must be non-negative and smaller than cell size {cell_size}")]
    Gap { gap: f32, cell_size: f32 },
    #[error("corner radius must be non-negative, got {0}")]
    CornerRadius(f32),
    #[error("frame interval must be a non-negative finite number of milliseconds, got {0}")]
    FrameInterval(f64),
    #[error("alive probability must lie in [0, 1], got {0}")]
    AliveProbability(f64),
}

/// Fixed settings of the demo. Only `Default` is used at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LifeConfig {
    pub frame_interval_ms: f64,
    pub alive_probability: f64,
    pub style: CellStyle,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: FRAME_INTERVAL_MS,
            alive_probability: INITIAL_ALIVE_PROBABILITY,
            style: CellStyle::default(),
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let style = &self.style;
        if !(style.cell_size.is_finite() && style.cell_size > 0.0) {
            return Err(ConfigError::CellSize(style.cell_size));
        }
        if !(style.gap >= 0.0 && style.gap < style.cell_size) {
            return Err(ConfigError::Gap { gap: style.gap, cell_size: style.cell_size });
        }
        if !(style.corner_radius >= 0.0) {
            return Err(ConfigError::CornerRadius(style.corner_radius));
        }
        if !(self.frame_interval_ms.is_finite() && self.frame_interval_ms >= 0.0) {
            return Err(ConfigError::FrameInterval(self.frame_interval_ms));
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(ConfigError::AliveProbability(self.alive_probability));
        }
        Ok(())
    }
}
