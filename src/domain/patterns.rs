use super::{Cell, Grid};

/// A named seed shape, stored as offsets of its live cells
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Stamp the pattern with its top-left at (col, row); wraps around edges
    pub fn place_on(&self, grid: &mut Grid, col: i64, row: i64) {
        for &(dx, dy) in &self.cells {
            grid.set_wrapped(col + dx as i64, row + dy as i64, Cell::Alive);
        }
    }

    /// Stamp the pattern centred on the grid
    pub fn place_centered(&self, grid: &mut Grid) {
        let (cols, rows) = grid.dimensions();
        let col = (cols as i64 - self.width as i64) / 2;
        let row = (rows as i64 - self.height as i64) / 2;
        self.place_on(grid, col, row);
    }
}

/// Classic seed shapes
pub mod presets {
    use super::*;

    /// Glider - moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (1, 0), (2, 0)],
        )
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Block - the smallest still life
    pub fn block() -> Pattern {
        Pattern::new(
            "block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "lwss",
            "Lightweight spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    pub fn pulsar() -> Pattern {
        Pattern::new(
            "pulsar",
            "Oscillator (period 3)",
            vec![
                (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
                (0, 2), (5, 2), (7, 2), (12, 2),
                (0, 3), (5, 3), (7, 3), (12, 3),
                (0, 4), (5, 4), (7, 4), (12, 4),
                (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
                (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
                (0, 8), (5, 8), (7, 8), (12, 8),
                (0, 9), (5, 9), (7, 9), (12, 9),
                (0, 10), (5, 10), (7, 10), (12, 10),
                (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
            ],
        )
    }

    /// Gosper glider gun - emits a glider every 30 generations
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "glider-gun",
            "Gosper glider gun (period 30)",
            vec![
                (0, 4), (0, 5),
                (1, 4), (1, 5),
                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),
                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),
                (34, 2), (34, 3),
                (35, 2), (35, 3),
            ],
        )
    }

    /// R-pentomino - stabilizes after 1103 generations
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "r-pentomino",
            "Methuselah",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            lwss(),
            pulsar(),
            glider_gun(),
            r_pentomino(),
        ]
    }

    /// Look a preset up by its name, case-insensitively
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_from_cells() {
        let gun = presets::glider_gun();
        assert_eq!((gun.width, gun.height), (36, 9));
    }

    #[test]
    fn test_place_centered() {
        let mut grid = Grid::new(10, 10);
        presets::block().place_centered(&mut grid);
        assert_eq!(grid.population(), 4);
        assert_eq!(grid.get(4, 4), Ok(Cell::Alive));
        assert_eq!(grid.get(5, 5), Ok(Cell::Alive));
    }

    #[test]
    fn test_place_wraps_around_edges() {
        let mut grid = Grid::new(5, 5);
        presets::blinker().place_on(&mut grid, 4, 4);
        assert_eq!(grid.get(4, 4), Ok(Cell::Alive));
        assert_eq!(grid.get(0, 4), Ok(Cell::Alive));
        assert_eq!(grid.get(1, 4), Ok(Cell::Alive));
    }

    #[test]
    fn test_glider_returns_translated_after_four_steps() {
        let mut grid = Grid::new(12, 12);
        presets::glider().place_on(&mut grid, 2, 2);
        let mut shifted = Grid::new(12, 12);
        presets::glider().place_on(&mut shifted, 3, 3);

        let mut next = grid;
        for _ in 0..4 {
            next = next.step();
        }
        assert_eq!(next, shifted);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(presets::by_name("Glider-Gun").map(|p| p.name), Some("glider-gun"));
        assert!(presets::by_name("nope").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
