use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use settings::*;
pub use timer::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod session;
mod settings;
mod timer;
mod types;

/// Validated board configuration: a square `count x count` grid whose mine
/// count is derived from the fixed density formula `count^2 / 5 - count`
/// (integer division, so floor).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    count: Coord,
    mine_count: CellCount,
}

impl BoardConfig {
    /// Only for side lengths known to satisfy the density formula.
    pub(crate) const fn new_unchecked(count: Coord) -> Self {
        Self {
            count,
            mine_count: square(count) / 5 - count as CellCount,
        }
    }

    pub fn new(count: Coord) -> Result<Self> {
        let total = square(count) as i32;
        let mine_count = total / 5 - count as i32;
        if mine_count < 0 || mine_count >= total {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self {
            count,
            mine_count: mine_count as CellCount,
        })
    }

    pub const fn count(&self) -> Coord {
        self.count
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.count)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }
}

/// One cell of the generated board.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellKind {
    Mine,
    /// Safe cell carrying its precomputed adjacent-mine count (0..=8).
    Safe(u8),
}

impl CellKind {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// Immutable mine layout with per-cell adjacency counts, fixed for the
/// lifetime of a game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<CellKind>,
    side: Coord,
    mine_count: CellCount,
}

impl Board {
    /// Builds a board from a mine mask, deriving every safe cell's
    /// adjacent-mine count by scanning its in-bounds neighbors.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let dim = mine_mask.dim();
        if dim.0 != dim.1 {
            return Err(GameError::InvalidConfiguration);
        }
        let side: Coord = dim
            .0
            .try_into()
            .map_err(|_| GameError::InvalidConfiguration)?;

        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap();

        let cells = Array2::from_shape_fn((dim.0, dim.1), |(row, col)| {
            if mine_mask[(row, col)] {
                CellKind::Mine
            } else {
                let coords = (row as Coord, col as Coord);
                let adjacent = NeighborIter::new(coords, side)
                    .filter(|&pos| mine_mask[pos.to_nd_index()])
                    .count() as u8;
                CellKind::Safe(adjacent)
            }
        });

        Ok(Self {
            cells,
            side,
            mine_count,
        })
    }

    /// Builds a board with mines at exactly the given coordinates.
    pub fn from_mine_coords(side: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default((side as usize, side as usize));
        for &coords in mine_coords {
            if coords.0 >= side || coords.1 >= side {
                return Err(GameError::OutOfBoundsCell);
            }
            mine_mask[coords.to_nd_index()] = true;
        }
        Self::from_mine_mask(mine_mask)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.side && coords.1 < self.side {
            Ok(coords)
        } else {
            Err(GameError::OutOfBoundsCell)
        }
    }

    pub fn side(&self) -> Coord {
        self.side
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.side)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn kind_at(&self, coords: Coord2) -> CellKind {
        self.cells[coords.to_nd_index()]
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.kind_at(coords).is_mine()
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.side)
    }
}

/// Outcome of a reveal action, telling the caller whether anything changed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Toggled,
    /// The toggle flagged the last unflagged mine.
    Won,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use FlagOutcome::*;
        match self {
            NoChange => false,
            Toggled => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_formula_matches_reference_values() {
        assert_eq!(BoardConfig::new(8).unwrap().mine_count(), 4);
        assert_eq!(BoardConfig::new(10).unwrap().mine_count(), 10);
        assert_eq!(BoardConfig::new(15).unwrap().mine_count(), 30);
        assert_eq!(BoardConfig::new(20).unwrap().mine_count(), 60);
    }

    #[test]
    fn degenerate_side_lengths_are_rejected() {
        for count in [0, 1, 2, 3, 4] {
            assert_eq!(
                BoardConfig::new(count),
                Err(GameError::InvalidConfiguration)
            );
        }
        // smallest side where the formula is non-negative
        assert_eq!(BoardConfig::new(5).unwrap().mine_count(), 0);
    }

    #[test]
    fn adjacency_counts_match_brute_force_scan() {
        let mines = [(0, 0), (1, 1), (2, 0)];
        let board = Board::from_mine_coords(3, &mines).unwrap();

        for row in 0..3 {
            for col in 0..3 {
                let expected = board
                    .iter_neighbors((row, col))
                    .filter(|&pos| mines.contains(&pos))
                    .count() as u8;
                match board.kind_at((row, col)) {
                    CellKind::Mine => assert!(mines.contains(&(row, col))),
                    CellKind::Safe(count) => assert_eq!(count, expected),
                }
            }
        }
    }

    #[test]
    fn mine_coords_outside_grid_are_rejected() {
        assert_eq!(
            Board::from_mine_coords(3, &[(3, 0)]),
            Err(GameError::OutOfBoundsCell)
        );
    }

    #[test]
    fn non_square_mask_is_rejected() {
        let mask: Array2<bool> = Array2::default((2, 3));
        assert_eq!(
            Board::from_mine_mask(mask),
            Err(GameError::InvalidConfiguration)
        );
    }
}
