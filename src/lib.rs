// Domain layer - Cells, the toroidal grid and the life rule
pub mod domain;

// Application layer - Configuration, viewport tracking and the animation driver
pub mod application;

// Infrastructure layer - Drawing surface and renderer
pub mod rendering;

// Re-exports for convenience
pub use domain::{Cell, Grid, next_generation};
pub use application::{LifeConfig, Simulation, TickOutcome, Viewport, ViewportWatcher};
pub use rendering::{DisplayList, Surface, render};
