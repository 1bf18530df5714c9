use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, info};

use super::{ConfigError, LifeConfig, Viewport};
use crate::domain::{Grid, next_generation};
use crate::rendering::{Surface, render};

/// What a call to [`Simulation::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Frame interval not yet elapsed; nothing changed
    Waiting,
    /// Current generation painted, next one stored
    Fired,
}

/// Simulation owns everything the animation loop mutates: the grid, its
/// dimensions, the last tick timestamp and the seeding randomness.
pub struct Simulation<R: Rng = ThreadRng> {
    config: LifeConfig,
    grid: Grid,
    viewport: Viewport,
    last_tick_ms: f64,
    generation: u64,
    rng: R,
}

impl<R: Rng> Simulation<R> {
    /// Validate `config` and seed a grid that fills `viewport`.
    pub fn new(config: LifeConfig, viewport: Viewport, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = Self::seed(&config, viewport, &mut rng);
        info!(
            width = viewport.width,
            height = viewport.height,
            population = grid.population(),
            "simulation started"
        );

        Ok(Self {
            config,
            grid,
            viewport,
            last_tick_ms: 0.0,
            generation: 0,
            rng,
        })
    }

    fn seed(config: &LifeConfig, viewport: Viewport, rng: &mut R) -> Grid {
        let (cols, rows) = viewport.grid_dimensions(config.style.cell_size);
        Grid::initialize(cols, rows, config.alive_probability, rng)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_tick_ms(&self) -> f64 {
        self.last_tick_ms
    }

    /// Throw the current pattern away and reseed for a new viewport size.
    /// The tick clock is left alone.
    pub fn reset(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.grid = Self::seed(&self.config, viewport, &mut self.rng);
        self.generation = 0;

        let (cols, rows) = self.grid.dimensions();
        info!(cols, rows, population = self.grid.population(), "grid reseeded");
    }

    /// Advance the animation clock to `now_ms`.
    ///
    /// Once a full frame interval has passed since the last fired tick the
    /// current generation is painted onto `surface`, then replaced by the
    /// next one. Earlier calls are no-ops.
    pub fn tick<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> TickOutcome {
        if now_ms - self.last_tick_ms < self.config.frame_interval_ms {
            return TickOutcome::Waiting;
        }

        render(&self.grid, surface, &self.config.style);
        self.grid = next_generation(&self.grid);
        self.generation += 1;
        self.last_tick_ms = now_ms;

        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "generation advanced"
        );
        TickOutcome::Fired
    }
}
