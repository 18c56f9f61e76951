use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Mine count out of range for the requested board size")]
    InvalidConfiguration,
    #[error("Cell coordinates outside the board")]
    OutOfBoundsCell,
}

pub type Result<T> = std::result::Result<T, GameError>;
