use core::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{error::BoardError, Board, Position};
use crate::pieces::MoveEffect;

static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?\s*(\d+)\s*,\s*(\d+)\s*\)?\s*(?:->|-)\s*\(?\s*(\d+)\s*,\s*(\d+)\s*\)?$")
        .expect("MOVE_RE regex should be valid")
});

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MoveParseError {
    #[error("invalid move {input:?}, expected `x,y-x,y`")]
    InvalidNotation { input: String },
}

/// A move as the outside world sees it: the square a piece leaves and the
/// square it targets. For cans the piece stays put and `to` receives a bean.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || MoveParseError::InvalidNotation {
            input: input.to_string(),
        };
        let caps = MOVE_RE.captures(input.trim()).ok_or_else(invalid)?;
        let mut coords = [0i32; 4];
        for (i, coord) in coords.iter_mut().enumerate() {
            *coord = caps[i + 1].parse().map_err(|_| invalid())?;
        }
        Ok(Move::new(
            Position::new(coords[0], coords[1]),
            Position::new(coords[2], coords[3]),
        ))
    }
}

/// Everything needed to return a board to the state it had before a move.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Undo {
    enemy_turn: bool,
    effect: MoveEffect,
}

impl Undo {
    pub fn effect(&self) -> &MoveEffect {
        &self.effect
    }

    /// Restores the turn flag, then reverses the piece-list mutation.
    pub fn revert(self, board: &mut Board) {
        board.set_enemy_turn(self.enemy_turn);
        self.effect.revert(board.pieces_mut());
    }
}

/// Executes the move of the piece standing on `from` and flips the turn. No
/// legality checks are made here; see `move_generation` for those.
pub fn execute_move(board: &mut Board, from: Position, to: Position) -> Result<Undo, BoardError> {
    let index = board
        .index_at(from)
        .ok_or(BoardError::NoPieceAt { position: from })?;
    Ok(execute_at(board, index, to))
}

pub fn undo(board: &mut Board, record: Undo) {
    record.revert(board);
}

pub(crate) fn execute_at(board: &mut Board, index: usize, to: Position) -> Undo {
    let kind = board.pieces()[index].kind;
    let board_size = board.size();
    let effect = kind.on_move(board.pieces_mut(), index, to, board_size);
    let enemy_turn = board.enemy_turn();
    board.set_enemy_turn(!enemy_turn);
    Undo { enemy_turn, effect }
}

/// Runs `f` with `mv` applied and always undoes it afterwards.
pub fn with_move_applied<F, T>(board: &mut Board, mv: Move, f: F) -> Result<T, BoardError>
where
    F: FnOnce(&mut Board) -> T,
{
    let index = board
        .index_at(mv.from)
        .ok_or(BoardError::NoPieceAt { position: mv.from })?;
    Ok(with_applied_at(board, index, mv.to, f))
}

/// Plays the piece at `index` to `to`, runs `f`, and takes the move back.
pub(crate) fn with_applied_at<F, T>(board: &mut Board, index: usize, to: Position, f: F) -> T
where
    F: FnOnce(&mut Board) -> T,
{
    let record = execute_at(board, index, to);
    let result = f(board);
    record.revert(board);
    result
}
