use super::Grid;

/// Compute the next generation into a fresh grid.
///
/// Every cell reads its neighbors from `grid`, never from the grid under
/// construction, so the whole generation advances at once. The input is left
/// untouched.
pub fn next_generation(grid: &Grid) -> Grid {
    let (cols, rows) = grid.dimensions();
    Grid::from_fn(cols, rows, |x, y| {
        grid.cell(x, y).evolve(grid.neighbor_count(x, y))
    })
}
