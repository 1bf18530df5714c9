use super::Cell;
use rand::Rng;

/// Grid is the toroidal life field, `cols` columns of `rows` cells each.
/// Cells are stored column-major so that `column(x)` is a contiguous slice
/// and coordinates read as `[x][y]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::Dead; cols * rows],
        }
    }

    /// Seed a grid where every cell is independently alive with
    /// `alive_probability` (0.3 for the running demo).
    pub fn initialize<R: Rng + ?Sized>(
        cols: usize,
        rows: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Self {
        Self::from_fn(cols, rows, |_, _| {
            Cell::from(rng.random::<f64>() < alive_probability)
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every cell, column by column.
    pub fn from_fn<F>(cols: usize, rows: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Cell,
    {
        let mut cells = Vec::with_capacity(cols * rows);
        for x in 0..cols {
            for y in 0..rows {
                cells.push(f(x, y));
            }
        }
        Self { cols, rows, cells }
    }

    /// Grid dimensions as `(cols, rows)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        x * self.rows + y
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.cols && y < self.rows).then(|| self.cells[self.index(x, y)])
    }

    /// Cell at a position the caller already knows is in range.
    pub(crate) fn cell(&self, x: usize, y: usize) -> Cell {
        debug_assert!(x < self.cols && y < self.rows);
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.cols && y < self.rows {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// All `rows` cells of column `x`
    pub fn column(&self, x: usize) -> Option<&[Cell]> {
        (x < self.cols).then(|| {
            let start = x * self.rows;
            &self.cells[start..start + self.rows]
        })
    }

    /// Count live cells among the 8 surrounding positions. Both axes wrap,
    /// so the left edge touches the right edge and the top touches the bottom.
    /// `x` and `y` must be in range.
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        let cols = self.cols as isize;
        let rows = self.rows as isize;

        (-1..=1isize)
            .flat_map(|dx| (-1..=1isize).map(move |dy| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| {
                let nx = (x as isize + dx).rem_euclid(cols);
                let ny = (y as isize + dy).rem_euclid(rows);
                self.cell(nx as usize, ny as usize)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, column by column
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.cols)
            .flat_map(move |x| (0..self.rows).map(move |y| (x, y)))
            .map(|(x, y)| (x, y, self.cell(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid_with(cols: usize, rows: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(cols, rows);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_initialize_dimensions() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::initialize(12, 5, 0.3, &mut rng);

        assert_eq!(grid.dimensions(), (12, 5));
        for x in 0..12 {
            assert_eq!(grid.column(x).map(<[Cell]>::len), Some(5));
        }
        assert!(grid.column(12).is_none());
    }

    #[test]
    fn test_initialize_density_is_near_probability() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = Grid::initialize(200, 200, 0.3, &mut rng);
        let density = grid.population() as f64 / 40_000.0;

        assert!((0.27..0.33).contains(&density), "density was {density}");
    }

    #[test]
    fn test_initialize_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Grid::initialize(10, 10, 0.0, &mut rng).population(), 0);
        assert_eq!(Grid::initialize(10, 10, 1.0, &mut rng).population(), 100);
    }

    #[test]
    fn test_initialize_is_reproducible_for_same_seed() {
        let a = Grid::initialize(30, 20, 0.3, &mut StdRng::seed_from_u64(9));
        let b = Grid::initialize(30, 20, 0.3, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_neighbor_count_excludes_self() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        assert_eq!(grid.neighbor_count(2, 2), 0);
        assert_eq!(grid.neighbor_count(1, 1), 1);
        assert_eq!(grid.neighbor_count(3, 2), 1);
        assert_eq!(grid.neighbor_count(4, 4), 0);
    }

    #[test]
    fn test_neighbor_count_wraps_corners() {
        let grid = grid_with(5, 4, &[(0, 0)]);
        assert_eq!(grid.neighbor_count(4, 3), 1);
        assert_eq!(grid.neighbor_count(4, 0), 1);
        assert_eq!(grid.neighbor_count(0, 3), 1);
        assert_eq!(grid.neighbor_count(2, 2), 0);
    }

    #[test]
    fn test_neighbor_count_full_grid() {
        let grid = Grid::from_fn(6, 6, |_, _| Cell::Alive);
        for (x, y, _) in grid.iter_cells() {
            assert_eq!(grid.neighbor_count(x, y), 8);
        }
    }

    #[test]
    fn test_neighbor_count_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..20 {
            let grid = Grid::initialize(9, 7, 0.5, &mut rng);
            for (x, y, _) in grid.iter_cells() {
                assert!(grid.neighbor_count(x, y) <= 8);
            }
        }
    }

    #[test]
    fn test_get_and_set_bounds() {
        let mut grid = Grid::new(3, 2);
        grid.set(2, 1, Cell::Alive);
        grid.set(3, 0, Cell::Alive);

        assert_eq!(grid.get(2, 1), Some(Cell::Alive));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.column(2), Some(&[Cell::Dead, Cell::Alive][..]));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new(0, 4);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.iter_cells().count(), 0);
    }
}
