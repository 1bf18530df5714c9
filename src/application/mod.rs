mod config;
mod simulation;
mod viewport;

pub use config::{ConfigError, LifeConfig, FRAME_INTERVAL_MS, INITIAL_ALIVE_PROBABILITY};
pub use simulation::{Simulation, TickOutcome};
pub use viewport::{Viewport, ViewportWatcher};
