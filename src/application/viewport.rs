use macroquad::window::{screen_height, screen_width};

/// Pixel size of the drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size of the window right now
    pub fn current() -> Self {
        Self::new(screen_width(), screen_height())
    }

    /// `(cols, rows)` of whole cells that fit, i.e. `floor(size / cell_size)`.
    /// A viewport smaller than one cell gives zero.
    pub fn grid_dimensions(&self, cell_size: f32) -> (usize, usize) {
        let cols = (self.width / cell_size).floor() as usize;
        let rows = (self.height / cell_size).floor() as usize;
        (cols, rows)
    }
}

/// Turns the polled window size into resize events.
pub struct ViewportWatcher {
    last: Viewport,
}

impl ViewportWatcher {
    pub fn new(initial: Viewport) -> Self {
        Self { last: initial }
    }

    pub fn viewport(&self) -> Viewport {
        self.last
    }

    /// `Some(new)` when `current` differs from the last seen size
    pub fn poll(&mut self, current: Viewport) -> Option<Viewport> {
        (current != self.last).then(|| {
            self.last = current;
            current
        })
    }
}
