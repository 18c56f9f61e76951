use super::*;

/// Generation strategy that places the configured number of mines by an
/// unbiased Fisher-Yates shuffle of the full cell sequence, then derives the
/// per-cell adjacency counts. Deterministic for a given seed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShuffledBoardGenerator {
    seed: u64,
}

impl ShuffledBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for ShuffledBoardGenerator {
    fn generate(self, config: BoardConfig) -> Board {
        use rand::prelude::*;

        let total_cells = config.total_cells() as usize;
        let mine_count = config.mine_count() as usize;
        let side = config.count() as usize;

        let mut mask = vec![false; total_cells];
        for cell in mask.iter_mut().take(mine_count) {
            *cell = true;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        mask.shuffle(&mut rng);

        let mine_mask =
            ndarray::Array2::from_shape_vec((side, side), mask).expect("mask length is side^2");
        log::debug!(
            "generated {}x{} board with {} mines (seed {})",
            side,
            side,
            mine_count,
            self.seed
        );

        Board::from_mine_mask(mine_mask).expect("shuffled mask is square")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_configured_mine_count() {
        // count=8 => 64/5 - 8 = 4 mines
        let config = BoardConfig::new(8).unwrap();
        let board = ShuffledBoardGenerator::new(7).generate(config);

        assert_eq!(board.mine_count(), 4);
        assert_eq!(board.safe_cell_count(), 60);

        let mut mines = 0;
        for row in 0..8 {
            for col in 0..8 {
                if board.contains_mine((row, col)) {
                    mines += 1;
                }
            }
        }
        assert_eq!(mines, 4);
    }

    #[test]
    fn adjacency_counts_cross_check_against_mine_positions() {
        let config = BoardConfig::new(10).unwrap();
        let board = ShuffledBoardGenerator::new(42).generate(config);

        for row in 0..10 {
            for col in 0..10 {
                if let CellKind::Safe(count) = board.kind_at((row, col)) {
                    let expected = board
                        .iter_neighbors((row, col))
                        .filter(|&pos| board.contains_mine(pos))
                        .count() as u8;
                    assert_eq!(count, expected, "mismatch at ({}, {})", row, col);
                }
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_board() {
        let config = BoardConfig::new(10).unwrap();
        let first = ShuffledBoardGenerator::new(3).generate(config);
        let second = ShuffledBoardGenerator::new(3).generate(config);
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_are_not_pinned_to_one_layout() {
        let config = BoardConfig::new(10).unwrap();
        let boards: Vec<_> = (0..8)
            .map(|seed| ShuffledBoardGenerator::new(seed).generate(config))
            .collect();
        assert!(boards.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
