//! Compact text notation for boards: `<rows> [p|e] [budget]`.
//!
//! Rows run from `y = 0` to the last row and are separated by `/`. Each square
//! is one character: `.` empty, `#` wall, or a piece letter (upper case enemy,
//! lower case player, see [`PieceKind::to_layout_char`]).

use core::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::pieces::{Faction, PieceKind};

use super::{error::BoardError, Board, Level, Piece, Position};

const EMPTY: char = '.';
const WALL: char = '#';

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutParseError {
    #[error("Layout is empty")]
    Empty,
    #[error("Too many fields, expected `<rows> [p|e] [budget]`")]
    TooManyFields,
    #[error("Invalid square character: {invalid_character:?}")]
    InvalidSquareCharacter { invalid_character: char },
    #[error("Row {row} is {width} squares wide, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },
    #[error("Invalid side to move: {invalid_turn:?}")]
    InvalidTurn { invalid_turn: String },
    #[error("Invalid move budget: {invalid_budget:?}")]
    InvalidBudget { invalid_budget: String },
    #[error("Invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
}

type LayoutResult<T> = Result<T, LayoutParseError>;

impl FromStr for Board {
    type Err = LayoutParseError;

    fn from_str(layout: &str) -> LayoutResult<Board> {
        let mut fields = layout.split_whitespace();
        let rows = fields.next().ok_or(LayoutParseError::Empty)?;
        let enemy_turn = match fields.next() {
            None | Some("p") => false,
            Some("e") => true,
            Some(other) => {
                return Err(LayoutParseError::InvalidTurn {
                    invalid_turn: other.to_string(),
                })
            }
        };
        let move_budget = match fields.next() {
            None => 0,
            Some(budget) => budget
                .parse::<u32>()
                .map_err(|_| LayoutParseError::InvalidBudget {
                    invalid_budget: budget.to_string(),
                })?,
        };
        if fields.next().is_some() {
            return Err(LayoutParseError::TooManyFields);
        }

        let (size, pieces, walls) = parse_rows(rows)?;
        let mut board = Board::new(Level::new(size, pieces, walls, move_budget));
        board.set_enemy_turn(enemy_turn);
        board.validate()?;
        Ok(board)
    }
}

fn parse_rows(rows: &str) -> LayoutResult<(Position, Vec<Piece>, Vec<Position>)> {
    let mut pieces = Vec::new();
    let mut walls = Vec::new();
    let mut width = None;
    let mut height = 0;

    for (y, row) in rows.split('/').enumerate() {
        let row_width = row.chars().count();
        let expected = *width.get_or_insert(row_width);
        if row_width != expected || row_width == 0 {
            return Err(LayoutParseError::RaggedRow {
                row: y,
                width: row_width,
                expected,
            });
        }

        for (x, c) in row.chars().enumerate() {
            let position = Position::new(x as i32, y as i32);
            match c {
                EMPTY => {}
                WALL => walls.push(position),
                _ => {
                    let kind = PieceKind::from_layout_char(c).ok_or(
                        LayoutParseError::InvalidSquareCharacter {
                            invalid_character: c,
                        },
                    )?;
                    pieces.push(Piece::new(kind, position));
                }
            }
        }
        height += 1;
    }

    let size = Position::new(width.unwrap_or(0) as i32, height);
    Ok((size, pieces, walls))
}

impl Board {
    fn square_char(&self, position: Position) -> char {
        match self.piece_at(position) {
            Some(piece) => piece.kind.to_layout_char(),
            None if self.is_wall(position) => WALL,
            None => EMPTY,
        }
    }

    fn row_strings(&self) -> Vec<String> {
        let size = self.size();
        (0..size.y)
            .map(|y| {
                (0..size.x)
                    .map(|x| self.square_char(Position::new(x, y)))
                    .collect()
            })
            .collect()
    }

    /// Single-line notation accepted by `Board::from_str`.
    pub fn to_layout(&self) -> String {
        let turn = match self.side_to_move() {
            Faction::Player => 'p',
            Faction::Enemy => 'e',
        };
        format!(
            "{} {} {}",
            self.row_strings().join("/"),
            turn,
            self.move_budget()
        )
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_strings() {
            writeln!(f, "{}", row)?;
        }
        write!(f, "{} to move", self.side_to_move())
    }
}

/// Builds a player-to-move board from bare layout tokens, rows separated by
/// `/`. Whitespace is ignored, so rows can be laid out one per line.
#[macro_export]
macro_rules! puzzle_position {
    ($($square:tt)*) => {{
        let rows: String = stringify!($($square)*)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        rows.parse::<$crate::board::Board>()
            .expect("invalid puzzle position")
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_one() {
        let board: Board = "K./../../bb p 3".parse().unwrap();
        assert_eq!(board.size(), Position::new(2, 4));
        assert_eq!(board.move_budget(), 3);
        assert!(!board.enemy_turn());
        assert_eq!(
            board.pieces(),
            &[
                Piece::new(PieceKind::King, Position::new(0, 0)),
                Piece::new(PieceKind::Bean, Position::new(0, 3)),
                Piece::new(PieceKind::Bean, Position::new(1, 3)),
            ]
        );
    }

    #[test]
    fn test_parse_walls_and_enemy_turn() {
        let board: Board = "K#/.s e".parse().unwrap();
        assert!(board.enemy_turn());
        assert_eq!(board.walls(), &[Position::new(1, 0)]);
        assert_eq!(board.move_budget(), 0);
    }

    #[test]
    fn test_layout_round_trips_through_to_layout() {
        let layout = "K.#/.P./hxm e 4";
        let board: Board = layout.parse().unwrap();
        assert_eq!(layout, board.to_layout());
    }

    #[test]
    fn test_display_prints_rows_and_turn() {
        let board: Board = "K./.b".parse().unwrap();
        assert_eq!("K.\n.b\nplayer to move", board.to_string());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Err(LayoutParseError::Empty), "  ".parse::<Board>());
        assert_eq!(
            Err(LayoutParseError::RaggedRow {
                row: 1,
                width: 1,
                expected: 2
            }),
            "K./b".parse::<Board>()
        );
        assert_eq!(
            Err(LayoutParseError::InvalidSquareCharacter {
                invalid_character: 'z'
            }),
            "Kz".parse::<Board>()
        );
        assert_eq!(
            Err(LayoutParseError::InvalidTurn {
                invalid_turn: "w".to_string()
            }),
            "Kb w".parse::<Board>()
        );
        assert_eq!(
            Err(LayoutParseError::InvalidBudget {
                invalid_budget: "-1".to_string()
            }),
            "Kb p -1".parse::<Board>()
        );
        assert_eq!(
            Err(LayoutParseError::TooManyFields),
            "Kb p 1 2".parse::<Board>()
        );
        assert_eq!(
            Err(LayoutParseError::InvalidBoard(BoardError::MultipleKings {
                count: 2
            })),
            "KK/bb".parse::<Board>()
        );
    }

    #[test]
    fn test_macro_ignores_whitespace() {
        let board = puzzle_position! {
            K. /
            .. /
            bb
        };
        assert_eq!(board, "K./../bb".parse::<Board>().unwrap());
    }
}
