//! Character grid with signed coordinates

/// Offsets of the 8 compass directions as `(row, col)` deltas:
/// N, NE, E, SE, S, SW, W, NW
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// A rectangular (or ragged) grid of ASCII cells borrowed from the input
///
/// Lookups take signed coordinates so walks can step off the edge; any cell
/// outside a row, including past the end of a short row, is out of bounds.
#[derive(Debug, Clone)]
pub struct Grid<'a> {
    rows: Vec<&'a [u8]>,
}

impl<'a> Grid<'a> {
    /// Build a grid from the non-blank lines of `input`
    pub fn parse(input: &'a str) -> Self {
        let rows = input
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::as_bytes)
            .collect();
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `(row, col)`, or None when out of bounds
    pub fn get(&self, row: isize, col: isize) -> Option<u8> {
        let row = self.rows.get(usize::try_from(row).ok()?)?;
        row.get(usize::try_from(col).ok()?).copied()
    }

    /// All in-bounds coordinates in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            (0..row.len()).map(move |c| (r as isize, c as isize))
        })
    }

    /// Whether walking from `start` one step at a time along `dir` spells `word`
    pub fn spells(&self, start: (isize, isize), dir: (isize, isize), word: &[u8]) -> bool {
        word.iter().enumerate().all(|(step, &expected)| {
            let step = step as isize;
            self.get(start.0 + dir.0 * step, start.1 + dir.1 * step) == Some(expected)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::parse("ab\ncde\n");
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(0, 1), Some(b'b'));
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.get(1, 2), Some(b'e'));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn test_cells_row_major() {
        let grid = Grid::parse("ab\nc");
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_spells_in_every_direction() {
        let grid = Grid::parse("S.S.S\n.AAA.\nSAXAS\n.AAA.\nS.S.S");
        let hits = DIRECTIONS
            .iter()
            .filter(|&&dir| grid.spells((2, 2), dir, b"XAS"))
            .count();
        assert_eq!(hits, 8);
        assert!(!grid.spells((2, 2), (0, 1), b"XASX"));
    }
}
