use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
///
/// During play a cell only moves Hidden -> Revealed, Hidden -> Flagged or
/// Flagged -> Hidden; Revealed is terminal. The remaining variants are
/// produced exclusively by end-of-game resolution, which shows every
/// still-hidden cell as its true kind and grades every remaining flag.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Revealed(u8),
    Flagged,
    /// The mine that was revealed and ended the game.
    Detonated,
    /// An unrevealed, unflagged mine shown at game end.
    Mine,
    /// A flag that was sitting on a mine when the game ended.
    CorrectFlag,
    /// A flag that was sitting on a safe cell when the game ended.
    IncorrectFlag,
}

impl CellView {
    /// Whether the cell still accepts reveal/flag actions.
    pub const fn is_interactable(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hidden_and_flagged_cells_accept_actions() {
        assert!(CellView::Hidden.is_interactable());
        assert!(CellView::Flagged.is_interactable());
        assert!(!CellView::Revealed(0).is_interactable());
        assert!(!CellView::Detonated.is_interactable());
        assert!(!CellView::Mine.is_interactable());
        assert!(!CellView::CorrectFlag.is_interactable());
        assert!(!CellView::IncorrectFlag.is_interactable());
    }
}
