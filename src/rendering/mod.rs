//! Painting the life field onto a drawing surface.

mod display_list;

pub use display_list::{DisplayList, DrawCommand};

use macroquad::color::Color;
use crate::domain::Grid;

/// The minimal raster surface the renderer needs.
pub trait Surface {
    /// Wipe the whole surface back to its background
    fn clear(&mut self);

    /// Color used by subsequent fills
    fn set_fill_color(&mut self, color: Color);

    fn fill_rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32);
}

/// `#rrggbb` as an opaque color, usable in constants
const fn rgb(hex: u32) -> Color {
    Color::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    )
}

/// Density heat-map, lightest for the loneliest cells
pub const PALETTE: [Color; 4] = [
    rgb(0x9be9a8),
    rgb(0x40c463),
    rgb(0x30a14e),
    rgb(0x216e39),
];

pub const BACKGROUND: Color = rgb(0x0d1117);

/// Geometry and colors of a painted cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellStyle {
    /// Pitch of the grid in pixels
    pub cell_size: f32,
    /// Spacing left between neighboring squares
    pub gap: f32,
    pub corner_radius: f32,
    pub palette: [Color; 4],
    pub background: Color,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            gap: 1.0,
            corner_radius: 2.0,
            palette: PALETTE,
            background: BACKGROUND,
        }
    }
}

/// Palette slot for a live cell with `neighbors` live neighbors.
/// Saturates at the last entry.
pub fn palette_index(neighbors: u8) -> usize {
    usize::from(neighbors.min(3))
}

/// Clear `surface` and paint every live cell of `grid` as a rounded square,
/// colored by how crowded its neighborhood is. Dead cells are left as
/// background.
pub fn render<S: Surface + ?Sized>(grid: &Grid, surface: &mut S, style: &CellStyle) {
    surface.clear();

    let side = style.cell_size - style.gap;
    grid.iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .for_each(|(x, y, _)| {
            let color = style.palette[palette_index(grid.neighbor_count(x, y))];
            surface.set_fill_color(color);
            surface.fill_rounded_rect(
                x as f32 * style.cell_size,
                y as f32 * style.cell_size,
                side,
                side,
                style.corner_radius,
            );
        });
}
