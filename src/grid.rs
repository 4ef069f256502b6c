//! The mirrored 5x5 cell pattern of an identicon.

use std::fmt;

/// Number of rows and columns in a grid.
pub const GRID_SIZE: usize = 5;

/// Nibbles consumed per row, one for each column group.
pub const NIBBLES_PER_ROW: usize = COLUMN_GROUPS.len();

/// Columns written by each nibble of a row, in consumption order.
///
/// Mirrored columns share a nibble, which makes every row symmetric.
const COLUMN_GROUPS: [&[usize]; 3] = [&[0, 4], &[1, 3], &[2]];

/// Returns true if a hex nibble marks its cell(s) as filled.
///
/// The nibble is scaled by 1/10 and rounded half away from zero, so 0-4 are
/// empty and 5-15 are filled.
pub fn nibble_is_filled(nibble: u8) -> bool {
    (f64::from(nibble) / 10.0).round() != 0.0
}

/// A 5x5 boolean pattern with horizontally mirrored rows.
///
/// For every row `r`, column 0 equals column 4 and column 1 equals column 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Decodes a grid from a nibble sequence.
    ///
    /// Row `r` reads nibbles `3r`, `3r + 1` and `3r + 2` for the column
    /// groups `{0, 4}`, `{1, 3}` and `{2}`. Nibbles past the 15th are
    /// ignored; rows without a full set of nibbles stay empty.
    pub fn from_nibbles(nibbles: &[u8]) -> Self {
        let mut cells = [[false; GRID_SIZE]; GRID_SIZE];

        for (row, chunk) in cells
            .iter_mut()
            .zip(nibbles.chunks_exact(NIBBLES_PER_ROW))
        {
            for (columns, &nibble) in COLUMN_GROUPS.iter().zip(chunk) {
                let filled = nibble_is_filled(nibble);
                for &column in *columns {
                    row[column] = filled;
                }
            }
        }

        Self { cells }
    }

    /// Returns whether the cell at `(row, column)` is filled.
    ///
    /// Out-of-range coordinates are reported as empty.
    pub fn is_filled(&self, row: usize, column: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(false)
    }

    pub fn rows(&self) -> &[[bool; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Iterates over the `(row, column)` coordinates of filled cells,
    /// row by row.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(move |(c, _)| (r, c))
        })
    }

    /// Returns true if every row mirrors around the center column.
    pub fn is_symmetric(&self) -> bool {
        self.cells
            .iter()
            .all(|row| (0..GRID_SIZE / 2).all(|c| row[c] == row[GRID_SIZE - 1 - c]))
    }
}

/// Renders the grid as text, `X` for filled and `.` for empty cells,
/// one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for &filled in row {
                f.write_str(if filled { "X" } else { "." })?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_rounds_half_up() {
        for nibble in 0..5 {
            assert!(!nibble_is_filled(nibble), "{nibble} should be empty");
        }
        for nibble in 5..16 {
            assert!(nibble_is_filled(nibble), "{nibble} should be filled");
        }
    }

    #[test]
    fn column_groups_cover_every_column_once() {
        let mut seen = [0; GRID_SIZE];
        for columns in COLUMN_GROUPS {
            for &c in columns {
                seen[c] += 1;
            }
        }
        assert_eq!(seen, [1; GRID_SIZE]);
    }

    #[test]
    fn decode_assigns_column_groups_in_order() {
        // Row 0: outer filled, inner empty, center filled.
        // Row 1: outer empty, inner filled, center empty.
        let nibbles = [15, 0, 9, 4, 5, 1];
        let grid = Grid::from_nibbles(&nibbles);

        assert_eq!(grid.rows()[0], [true, false, true, false, true]);
        assert_eq!(grid.rows()[1], [false, true, false, true, false]);
        // Rows without nibbles stay empty
        assert_eq!(grid.rows()[2], [false; GRID_SIZE]);
    }

    #[test]
    fn decode_ignores_trailing_nibbles() {
        let mut nibbles = [0u8; 16];
        nibbles[15] = 15;
        let grid = Grid::from_nibbles(&nibbles);
        assert_eq!(grid, Grid::default());
    }

    #[test]
    fn decoded_grids_are_symmetric() {
        for seed in 0u8..=255 {
            let nibbles: Vec<u8> = (0..15u8)
                .map(|i| seed.wrapping_mul(31).wrapping_add(i.wrapping_mul(7)) % 16)
                .collect();
            let grid = Grid::from_nibbles(&nibbles);
            assert!(grid.is_symmetric(), "grid for seed {seed} is not mirrored");
        }
    }

    #[test]
    fn filled_cells_and_lookup() {
        let grid = Grid::from_nibbles(&[0, 0, 15]);
        assert_eq!(grid.filled_cells().collect::<Vec<_>>(), vec![(0, 2)]);
        assert!(grid.is_filled(0, 2));
        assert!(!grid.is_filled(0, 0));
        assert!(!grid.is_filled(7, 2));
    }

    #[test]
    fn display_as_text() {
        let grid = Grid::from_nibbles(&[9, 0, 9, 0, 9, 0]);
        assert_eq!(
            grid.to_string(),
            "X.X.X\n.X.X.\n.....\n.....\n....."
        );
    }
}
