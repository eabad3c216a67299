use thiserror::Error;

use crate::pieces::PieceKind;

use super::position::Position;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error(
        "Board sides must be between 1 and {} squares, got {size}",
        super::MAX_BOARD_SIDE
    )]
    InvalidBoardSize { size: Position },
    #[error("The {kind} at {position} lies outside the board")]
    PieceOutOfBounds { kind: PieceKind, position: Position },
    #[error("The {kind} at {position} stands on a wall")]
    PieceOnWall { kind: PieceKind, position: Position },
    #[error("More than one piece occupies {position}")]
    SquareOccupied { position: Position },
    #[error("A board may hold at most one king, found {count}")]
    MultipleKings { count: usize },
    #[error("Cannot move from {position}, the square is empty")]
    NoPieceAt { position: Position },
}
