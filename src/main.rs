use macroquad::prelude::*;
use life_canvas::{DisplayList, LifeConfig, Simulation, Surface, Viewport, ViewportWatcher};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let config = LifeConfig::default();
    let mut watcher = ViewportWatcher::new(Viewport::current());
    let mut surface = DisplayList::new(config.style.background);

    let mut simulation = match Simulation::new(config, watcher.viewport(), ::rand::rng()) {
        Ok(simulation) => simulation,
        Err(err) => {
            tracing::error!(%err, "invalid configuration");
            return;
        }
    };

    loop {
        // A resize restarts the pattern and blanks what was on screen
        if let Some(viewport) = watcher.poll(Viewport::current()) {
            simulation.reset(viewport);
            surface.clear();
        }

        simulation.tick(get_time() * 1000.0, &mut surface);
        surface.present();

        next_frame().await;
    }
}
