use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::*;

/// Coarse session status.
///
/// Valid transitions:
/// - NotStarted -> Running (first reveal or flag action)
/// - Running -> Won
/// - Running -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Running,
    Won,
    Lost,
}

impl Phase {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Indicates the game has ended and no moves are accepted anymore
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Counter/phase snapshot the presentation layer polls for rendering.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Flag-count display: total mines minus flags placed, regardless of
    /// flag correctness. Goes negative when over-flagged.
    pub remaining_mines: i32,
    pub elapsed_secs: u32,
    pub phase: Phase,
}

/// One game from board generation to a terminal phase.
///
/// The session owns the board and all mutable state; the embedding holds it
/// as a plain value and replaces it wholesale on reset or level change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    grid: Array2<CellView>,
    revealed_count: CellCount,
    remaining_mines: i32,
    swept_mines: CellCount,
    timer: Timer,
    phase: Phase,
}

impl Session {
    pub fn new(board: Board) -> Self {
        let side = board.side() as usize;
        let remaining_mines = board.mine_count() as i32;
        Self {
            board,
            grid: Array2::default((side, side)),
            revealed_count: 0,
            remaining_mines,
            swept_mines: 0,
            timer: Timer::default(),
            phase: Phase::default(),
        }
    }

    /// Replaces board and state atomically, stopping any running timer first.
    pub fn reset(&mut self, board: Board) {
        self.timer.stop();
        *self = Session::new(board);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn side(&self) -> Coord {
        self.board.side()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn remaining_mines(&self) -> i32 {
        self.remaining_mines
    }

    pub fn swept_mines(&self) -> CellCount {
        self.swept_mines
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.timer.elapsed_secs()
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.grid[coords.to_nd_index()]
    }

    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            remaining_mines: self.remaining_mines,
            elapsed_secs: self.timer.elapsed_secs(),
            phase: self.phase,
        }
    }

    /// Once-per-second notification from the embedding. Advances the timer
    /// and returns the new elapsed seconds only while the session is running.
    pub fn tick(&mut self) -> Option<u32> {
        self.phase.is_running().then(|| self.timer.tick())
    }

    /// Reveals a hidden cell, flood-filling outward from a zero-adjacency
    /// cell. A no-op on revealed or flagged cells and after the game ended.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.phase.is_final() {
            return Ok(RevealOutcome::NoChange);
        }
        if !matches!(self.grid[coords.to_nd_index()], CellView::Hidden) {
            return Ok(RevealOutcome::NoChange);
        }

        self.mark_started();
        Ok(self.reveal_hidden_cell(coords))
    }

    /// Toggles the flag on a hidden or flagged cell. The remaining-mine
    /// counter tracks flags placed, not correctness, and has no floor.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use CellView::*;
        use FlagOutcome::*;

        let coords = self.board.validate_coords(coords)?;

        if self.phase.is_final() {
            return Ok(NoChange);
        }

        Ok(match self.grid[coords.to_nd_index()] {
            Hidden => {
                self.mark_started();
                self.grid[coords.to_nd_index()] = Flagged;
                self.remaining_mines -= 1;
                if self.board.contains_mine(coords) {
                    self.swept_mines += 1;
                    if self.swept_mines == self.board.mine_count() {
                        self.finish(true);
                        return Ok(Won);
                    }
                }
                Toggled
            }
            Flagged => {
                self.grid[coords.to_nd_index()] = Hidden;
                self.remaining_mines += 1;
                if self.board.contains_mine(coords) {
                    self.swept_mines -= 1;
                }
                Toggled
            }
            _ => NoChange,
        })
    }

    fn reveal_hidden_cell(&mut self, coords: Coord2) -> RevealOutcome {
        match self.board.kind_at(coords) {
            CellKind::Mine => {
                self.grid[coords.to_nd_index()] = CellView::Detonated;
                log::debug!("mine revealed at {:?}", coords);
                self.finish(false);
                RevealOutcome::HitMine
            }
            CellKind::Safe(adjacent) => {
                self.grid[coords.to_nd_index()] = CellView::Revealed(adjacent);
                self.revealed_count += 1;
                log::debug!("revealed {:?}, adjacent mines: {}", coords, adjacent);

                if adjacent == 0 {
                    self.flood_fill_from(coords);
                }

                if self.revealed_count == self.board.safe_cell_count() {
                    self.finish(true);
                    RevealOutcome::Won
                } else {
                    RevealOutcome::Revealed
                }
            }
        }
    }

    /// Iterative worklist reveal of the zero-adjacency region around `start`
    /// plus its numbered boundary. Flagged cells are skipped; mines are never
    /// reached because only neighbors of zero-count cells are enqueued.
    fn flood_fill_from(&mut self, start: Coord2) {
        let mut to_visit: VecDeque<_> = self
            .board
            .iter_neighbors(start)
            .filter(|&pos| matches!(self.grid[pos.to_nd_index()], CellView::Hidden))
            .collect();
        log::trace!("flood-fill from {:?}, initial worklist: {:?}", start, to_visit);

        while let Some(coords) = to_visit.pop_front() {
            if !matches!(self.grid[coords.to_nd_index()], CellView::Hidden) {
                continue;
            }

            let CellKind::Safe(adjacent) = self.board.kind_at(coords) else {
                continue;
            };

            self.grid[coords.to_nd_index()] = CellView::Revealed(adjacent);
            self.revealed_count += 1;
            log::trace!("flood revealed {:?}, adjacent mines: {}", coords, adjacent);

            if adjacent == 0 {
                to_visit.extend(
                    self.board
                        .iter_neighbors(coords)
                        .filter(|&pos| matches!(self.grid[pos.to_nd_index()], CellView::Hidden)),
                );
            }
        }
    }

    fn mark_started(&mut self) {
        if matches!(self.phase, Phase::NotStarted) {
            self.phase = Phase::Running;
            self.timer.start();
            log::debug!("session started");
        }
    }

    fn finish(&mut self, won: bool) {
        self.timer.stop();
        self.phase = if won { Phase::Won } else { Phase::Lost };
        log::debug!("session ended after {}s, won: {}", self.timer.elapsed_secs(), won);
        self.resolve_final();
    }

    /// Terminal sweep over the whole grid: show every still-hidden cell as
    /// its true kind and grade every remaining flag. No flood-fill, no win
    /// re-checks, no counter updates.
    fn resolve_final(&mut self) {
        use CellView::*;

        let side = self.board.side();
        for row in 0..side {
            for col in 0..side {
                let coords = (row, col);
                let resolved = match (self.cell_at(coords), self.board.kind_at(coords)) {
                    (Hidden, CellKind::Mine) => Mine,
                    (Hidden, CellKind::Safe(adjacent)) => Revealed(adjacent),
                    (Flagged, CellKind::Mine) => CorrectFlag,
                    (Flagged, CellKind::Safe(_)) => IncorrectFlag,
                    _ => continue,
                };
                self.grid[coords.to_nd_index()] = resolved;
            }
        }
    }
}
